use crate::api::handlers::{RawBody, decode_create, overlay_update, parse_id};
use crate::api::models::{
    Envelope, ErrorBody,
    sellers::{SellerRequest, SellerResponse},
};
use crate::AppState;
use crate::db::models::sellers::Seller;
use crate::errors::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// POST /sellers - Create a new seller
#[utoipa::path(
    post,
    path = "/sellers",
    tag = "sellers",
    summary = "Create seller",
    request_body = SellerRequest,
    responses(
        (status = 201, description = "Seller created, wrapped in the success envelope", body = SellerResponse),
        (status = 400, description = "Invalid body or field", body = ErrorBody),
        (status = 409, description = "CID already used", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_seller(State(state): State<AppState>, body: RawBody) -> Result<(StatusCode, Json<Envelope<SellerResponse>>)> {
    let request: SellerRequest = decode_create(body)?;

    let mut seller = Seller::from(request);
    state.sellers.save(&mut seller).await?;

    Ok((StatusCode::CREATED, Json(Envelope::success(seller.into()))))
}

// GET /sellers - List all sellers
#[utoipa::path(
    get,
    path = "/sellers",
    tag = "sellers",
    summary = "List sellers",
    responses(
        (status = 200, description = "All sellers ordered by id, wrapped in the success envelope", body = Vec<SellerResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_sellers(State(state): State<AppState>) -> Result<Json<Envelope<Vec<SellerResponse>>>> {
    let sellers = state.sellers.get_all().await?;
    Ok(Json(Envelope::success(sellers.into_iter().map(Into::into).collect())))
}

// GET /sellers/{id} - Get a specific seller
#[utoipa::path(
    get,
    path = "/sellers/{id}",
    tag = "sellers",
    summary = "Get seller",
    responses(
        (status = 200, description = "Seller details, wrapped in the success envelope", body = SellerResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Seller not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Seller ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_seller(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope<SellerResponse>>> {
    let id = parse_id(&id)?;
    let seller = state.sellers.get(id).await?;
    Ok(Json(Envelope::success(seller.into())))
}

// PATCH /sellers/{id} - Merge the body into an existing seller
#[utoipa::path(
    patch,
    path = "/sellers/{id}",
    tag = "sellers",
    summary = "Update seller",
    request_body = SellerRequest,
    responses(
        (status = 200, description = "Updated seller, wrapped in the success envelope", body = SellerResponse),
        (status = 400, description = "Invalid id, body or field", body = ErrorBody),
        (status = 404, description = "Seller not found", body = ErrorBody),
        (status = 409, description = "CID already used", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Seller ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_seller(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Result<Json<Envelope<SellerResponse>>> {
    let id = parse_id(&id)?;
    let current = state.sellers.get(id).await?;

    let request = overlay_update(SellerRequest::from(current), body, id)?;
    let seller = Seller::from(request);
    state.sellers.update(&seller).await?;

    Ok(Json(Envelope::success(seller.into())))
}

// DELETE /sellers/{id} - Delete an seller
#[utoipa::path(
    delete,
    path = "/sellers/{id}",
    tag = "sellers",
    summary = "Delete seller",
    responses(
        (status = 204, description = "Seller deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Seller not found", body = ErrorBody),
        (status = 409, description = "Seller still has products", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Seller ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_seller(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.sellers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
