use crate::api::handlers::{RawBody, decode_create, overlay_update, parse_id};
use crate::api::models::{
    Envelope, ErrorBody,
    buyers::{BuyerRequest, BuyerResponse},
};
use crate::AppState;
use crate::db::models::buyers::Buyer;
use crate::errors::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// POST /buyers - Create a new buyer
#[utoipa::path(
    post,
    path = "/buyers",
    tag = "buyers",
    summary = "Create buyer",
    request_body = BuyerRequest,
    responses(
        (status = 201, description = "Buyer created, wrapped in the success envelope", body = BuyerResponse),
        (status = 400, description = "Invalid body or field", body = ErrorBody),
        (status = 409, description = "Card number already used", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_buyer(State(state): State<AppState>, body: RawBody) -> Result<(StatusCode, Json<Envelope<BuyerResponse>>)> {
    let request: BuyerRequest = decode_create(body)?;

    let mut buyer = Buyer::from(request);
    state.buyers.save(&mut buyer).await?;

    Ok((StatusCode::CREATED, Json(Envelope::success(buyer.into()))))
}

// GET /buyers - List all buyers
#[utoipa::path(
    get,
    path = "/buyers",
    tag = "buyers",
    summary = "List buyers",
    responses(
        (status = 200, description = "All buyers ordered by id, wrapped in the success envelope", body = Vec<BuyerResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_buyers(State(state): State<AppState>) -> Result<Json<Envelope<Vec<BuyerResponse>>>> {
    let buyers = state.buyers.get_all().await?;
    Ok(Json(Envelope::success(buyers.into_iter().map(Into::into).collect())))
}

// GET /buyers/{id} - Get a specific buyer
#[utoipa::path(
    get,
    path = "/buyers/{id}",
    tag = "buyers",
    summary = "Get buyer",
    responses(
        (status = 200, description = "Buyer details, wrapped in the success envelope", body = BuyerResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Buyer not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Buyer ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_buyer(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope<BuyerResponse>>> {
    let id = parse_id(&id)?;
    let buyer = state.buyers.get(id).await?;
    Ok(Json(Envelope::success(buyer.into())))
}

// PATCH /buyers/{id} - Merge the body into an existing buyer
#[utoipa::path(
    patch,
    path = "/buyers/{id}",
    tag = "buyers",
    summary = "Update buyer",
    request_body = BuyerRequest,
    responses(
        (status = 200, description = "Updated buyer, wrapped in the success envelope", body = BuyerResponse),
        (status = 400, description = "Invalid id, body or field", body = ErrorBody),
        (status = 404, description = "Buyer not found", body = ErrorBody),
        (status = 409, description = "Card number already used", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Buyer ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_buyer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Result<Json<Envelope<BuyerResponse>>> {
    let id = parse_id(&id)?;
    let current = state.buyers.get(id).await?;

    let request = overlay_update(BuyerRequest::from(current), body, id)?;
    let buyer = Buyer::from(request);
    state.buyers.update(&buyer).await?;

    Ok(Json(Envelope::success(buyer.into())))
}

// DELETE /buyers/{id} - Delete an buyer
#[utoipa::path(
    delete,
    path = "/buyers/{id}",
    tag = "buyers",
    summary = "Delete buyer",
    responses(
        (status = 204, description = "Buyer deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Buyer not found", body = ErrorBody),
        (status = 409, description = "Buyer is referenced by purchase orders", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Buyer ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_buyer(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.buyers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
