use crate::api::handlers::{RawBody, decode_create, overlay_update, parse_id};
use crate::api::models::{
    Envelope, ErrorBody,
    products::{ProductRequest, ProductResponse},
};
use crate::AppState;
use crate::db::models::products::Product;
use crate::errors::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// POST /products - Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    summary = "Create product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created, wrapped in the success envelope", body = ProductResponse),
        (status = 400, description = "Invalid body or field", body = ErrorBody),
        (status = 409, description = "Product code already used or seller does not exist", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(State(state): State<AppState>, body: RawBody) -> Result<(StatusCode, Json<Envelope<ProductResponse>>)> {
    let request: ProductRequest = decode_create(body)?;

    let mut product = Product::from(request);
    state.products.save(&mut product).await?;

    Ok((StatusCode::CREATED, Json(Envelope::success(product.into()))))
}

// GET /products - List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    summary = "List products",
    responses(
        (status = 200, description = "All products ordered by id, wrapped in the success envelope", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Envelope<Vec<ProductResponse>>>> {
    let products = state.products.get_all().await?;
    Ok(Json(Envelope::success(products.into_iter().map(Into::into).collect())))
}

// GET /products/{id} - Get a specific product
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    summary = "Get product",
    responses(
        (status = 200, description = "Product details, wrapped in the success envelope", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Product ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope<ProductResponse>>> {
    let id = parse_id(&id)?;
    let product = state.products.get(id).await?;
    Ok(Json(Envelope::success(product.into())))
}

// PATCH /products/{id} - Merge the body into an existing product
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "products",
    summary = "Update product",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated product, wrapped in the success envelope", body = ProductResponse),
        (status = 400, description = "Invalid id, body or field", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 409, description = "Product code already used or seller does not exist", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Product ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Result<Json<Envelope<ProductResponse>>> {
    let id = parse_id(&id)?;
    let current = state.products.get(id).await?;

    let request = overlay_update(ProductRequest::from(current), body, id)?;
    let product = Product::from(request);
    state.products.update(&product).await?;

    Ok(Json(Envelope::success(product.into())))
}

// DELETE /products/{id} - Delete an product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    summary = "Delete product",
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 409, description = "Product is referenced by product records or batches", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Product ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::{Envelope, products::ProductResponse};
    use crate::test_utils::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn peas() -> serde_json::Value {
        json!({
            "product_code": "PEA-01",
            "description": "Frozen peas",
            "height": 10.0,
            "length": 20.0,
            "width": 15.0,
            "netweight": 1.5,
            "expiration_rate": 0.7,
            "freezing_rate": 0.3,
            "recommended_freezing_temperature": -18.0,
            "product_type_id": 2,
            "seller_id": 1
        })
    }

    #[test_log::test(tokio::test)]
    async fn test_create_and_get_product() {
        let (app, _repos) = create_test_app();

        let response = app.post("/api/v1/products").json(&peas()).await;
        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Envelope<ProductResponse>>().data;
        assert_eq!(created.id, 1);
        assert_eq!(created.netweight, 1.5);
        assert_eq!(created.recommended_freezing_temperature, -18.0);

        let fetched = app.get("/api/v1/products/1").await.json::<Envelope<ProductResponse>>().data;
        assert_eq!(fetched, created);
    }

    #[test_log::test(tokio::test)]
    async fn test_create_product_missing_key() {
        let (app, _repos) = create_test_app();
        let mut body = peas();
        body.as_object_mut().unwrap().remove("netweight");

        let response = app.post("/api/v1/products").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"message": "missing key: netweight not found", "status": "bad request"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_negative_width_is_invalid() {
        let (app, repos) = create_test_app();
        let mut body = peas();
        body["width"] = json!(-3.0);

        let response = app.post("/api/v1/products").json(&body).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"message": "invalid field: width", "status": "bad request"}));
        assert_eq!(repos.products.calls(), 0);
    }

    #[test_log::test(tokio::test)]
    async fn test_duplicate_product_code() {
        let (app, repos) = create_test_app();
        repos.products.seed([sample_product("PEA-01")]);

        let response = app.post("/api/v1/products").json(&peas()).await;

        response.assert_status(StatusCode::CONFLICT);
        response.assert_json(&json!({"message": "product already exists", "status": "conflict"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_seller_is_invalid_reference() {
        let (app, repos) = create_test_app();
        repos.products.fail_next(missing_reference_error("seller_id"));

        let response = app.post("/api/v1/products").json(&peas()).await;

        response.assert_status(StatusCode::CONFLICT);
        response.assert_json(&json!({"message": "invalid reference: seller_id", "status": "conflict"}));
    }

    #[test_log::test(tokio::test)]
    async fn test_patch_product_merges_like_other_entities() {
        let (app, repos) = create_test_app();
        repos.products.seed([sample_product("PEA-01")]);

        let response = app
            .patch("/api/v1/products/1")
            .json(&json!({"description": "Organic frozen peas", "netweight": 2.0}))
            .await;

        response.assert_status_ok();
        let updated = response.json::<Envelope<ProductResponse>>().data;
        assert_eq!(updated.description, "Organic frozen peas");
        assert_eq!(updated.netweight, 2.0);
        assert_eq!(updated.product_code, "PEA-01");
        assert_eq!(updated.seller_id, 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_patch_product_with_wrong_type() {
        let (app, repos) = create_test_app();
        repos.products.seed([sample_product("PEA-01")]);

        let response = app.patch("/api/v1/products/1").json(&json!({"height": "tall"})).await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"message": "invalid body: cannot unmarshal to struct", "status": "bad request"}));
    }
}
