use crate::api::handlers::{RawBody, decode_create, overlay_update, parse_id};
use crate::api::models::{
    Envelope, ErrorBody,
    warehouses::{WarehouseRequest, WarehouseResponse},
};
use crate::AppState;
use crate::db::models::warehouses::Warehouse;
use crate::errors::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// POST /warehouses - Create a new warehouse
#[utoipa::path(
    post,
    path = "/warehouses",
    tag = "warehouses",
    summary = "Create warehouse",
    request_body = WarehouseRequest,
    responses(
        (status = 201, description = "Warehouse created, wrapped in the success envelope", body = WarehouseResponse),
        (status = 400, description = "Invalid body or field", body = ErrorBody),
        (status = 409, description = "Warehouse code already used", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_warehouse(State(state): State<AppState>, body: RawBody) -> Result<(StatusCode, Json<Envelope<WarehouseResponse>>)> {
    let request: WarehouseRequest = decode_create(body)?;

    let mut warehouse = Warehouse::from(request);
    state.warehouses.save(&mut warehouse).await?;

    Ok((StatusCode::CREATED, Json(Envelope::success(warehouse.into()))))
}

// GET /warehouses - List all warehouses
#[utoipa::path(
    get,
    path = "/warehouses",
    tag = "warehouses",
    summary = "List warehouses",
    responses(
        (status = 200, description = "All warehouses ordered by id, wrapped in the success envelope", body = Vec<WarehouseResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_warehouses(State(state): State<AppState>) -> Result<Json<Envelope<Vec<WarehouseResponse>>>> {
    let warehouses = state.warehouses.get_all().await?;
    Ok(Json(Envelope::success(warehouses.into_iter().map(Into::into).collect())))
}

// GET /warehouses/{id} - Get a specific warehouse
#[utoipa::path(
    get,
    path = "/warehouses/{id}",
    tag = "warehouses",
    summary = "Get warehouse",
    responses(
        (status = 200, description = "Warehouse details, wrapped in the success envelope", body = WarehouseResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Warehouse not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Warehouse ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_warehouse(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope<WarehouseResponse>>> {
    let id = parse_id(&id)?;
    let warehouse = state.warehouses.get(id).await?;
    Ok(Json(Envelope::success(warehouse.into())))
}

// PATCH /warehouses/{id} - Merge the body into an existing warehouse
#[utoipa::path(
    patch,
    path = "/warehouses/{id}",
    tag = "warehouses",
    summary = "Update warehouse",
    request_body = WarehouseRequest,
    responses(
        (status = 200, description = "Updated warehouse, wrapped in the success envelope", body = WarehouseResponse),
        (status = 400, description = "Invalid id, body or field", body = ErrorBody),
        (status = 404, description = "Warehouse not found", body = ErrorBody),
        (status = 409, description = "Warehouse code already used", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Warehouse ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Result<Json<Envelope<WarehouseResponse>>> {
    let id = parse_id(&id)?;
    let current = state.warehouses.get(id).await?;

    let request = overlay_update(WarehouseRequest::from(current), body, id)?;
    let warehouse = Warehouse::from(request);
    state.warehouses.update(&warehouse).await?;

    Ok(Json(Envelope::success(warehouse.into())))
}

// DELETE /warehouses/{id} - Delete an warehouse
#[utoipa::path(
    delete,
    path = "/warehouses/{id}",
    tag = "warehouses",
    summary = "Delete warehouse",
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Warehouse not found", body = ErrorBody),
        (status = 409, description = "Warehouse still has warehouses, sections or inbound orders", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Warehouse ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_warehouse(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.warehouses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
