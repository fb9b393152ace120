use crate::api::handlers::{RawBody, decode_create, overlay_update, parse_id};
use crate::api::models::{
    Envelope, ErrorBody,
    sections::{SectionRequest, SectionResponse},
};
use crate::AppState;
use crate::db::models::sections::Section;
use crate::errors::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// POST /sections - Create a new section
#[utoipa::path(
    post,
    path = "/sections",
    tag = "sections",
    summary = "Create section",
    request_body = SectionRequest,
    responses(
        (status = 201, description = "Section created, wrapped in the success envelope", body = SectionResponse),
        (status = 400, description = "Invalid body or field", body = ErrorBody),
        (status = 409, description = "Section number already used or warehouse does not exist", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_section(State(state): State<AppState>, body: RawBody) -> Result<(StatusCode, Json<Envelope<SectionResponse>>)> {
    let request: SectionRequest = decode_create(body)?;

    let mut section = Section::from(request);
    state.sections.save(&mut section).await?;

    Ok((StatusCode::CREATED, Json(Envelope::success(section.into()))))
}

// GET /sections - List all sections
#[utoipa::path(
    get,
    path = "/sections",
    tag = "sections",
    summary = "List sections",
    responses(
        (status = 200, description = "All sections ordered by id, wrapped in the success envelope", body = Vec<SectionResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_sections(State(state): State<AppState>) -> Result<Json<Envelope<Vec<SectionResponse>>>> {
    let sections = state.sections.get_all().await?;
    Ok(Json(Envelope::success(sections.into_iter().map(Into::into).collect())))
}

// GET /sections/{id} - Get a specific section
#[utoipa::path(
    get,
    path = "/sections/{id}",
    tag = "sections",
    summary = "Get section",
    responses(
        (status = 200, description = "Section details, wrapped in the success envelope", body = SectionResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Section not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Section ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_section(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope<SectionResponse>>> {
    let id = parse_id(&id)?;
    let section = state.sections.get(id).await?;
    Ok(Json(Envelope::success(section.into())))
}

// PATCH /sections/{id} - Merge the body into an existing section
#[utoipa::path(
    patch,
    path = "/sections/{id}",
    tag = "sections",
    summary = "Update section",
    request_body = SectionRequest,
    responses(
        (status = 200, description = "Updated section, wrapped in the success envelope", body = SectionResponse),
        (status = 400, description = "Invalid id, body or field", body = ErrorBody),
        (status = 404, description = "Section not found", body = ErrorBody),
        (status = 409, description = "Section number already used or warehouse does not exist", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Section ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Result<Json<Envelope<SectionResponse>>> {
    let id = parse_id(&id)?;
    let current = state.sections.get(id).await?;

    let request = overlay_update(SectionRequest::from(current), body, id)?;
    let section = Section::from(request);
    state.sections.update(&section).await?;

    Ok(Json(Envelope::success(section.into())))
}

// DELETE /sections/{id} - Delete an section
#[utoipa::path(
    delete,
    path = "/sections/{id}",
    tag = "sections",
    summary = "Delete section",
    responses(
        (status = 204, description = "Section deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Section not found", body = ErrorBody),
        (status = 409, description = "Section is referenced by product batches", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Section ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_section(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.sections.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
