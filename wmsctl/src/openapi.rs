//! OpenAPI documentation for the `/api/v1` surface.
//!
//! Served as JSON at `/api/openapi.json` and rendered with Scalar at `/api/docs`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    servers(
        (url = "/api/v1", description = "Warehouse management API")
    ),
    paths(
        api::handlers::products::create_product,
        api::handlers::products::list_products,
        api::handlers::products::get_product,
        api::handlers::products::update_product,
        api::handlers::products::delete_product,
        api::handlers::sellers::create_seller,
        api::handlers::sellers::list_sellers,
        api::handlers::sellers::get_seller,
        api::handlers::sellers::update_seller,
        api::handlers::sellers::delete_seller,
        api::handlers::buyers::create_buyer,
        api::handlers::buyers::list_buyers,
        api::handlers::buyers::get_buyer,
        api::handlers::buyers::update_buyer,
        api::handlers::buyers::delete_buyer,
        api::handlers::employees::create_employee,
        api::handlers::employees::list_employees,
        api::handlers::employees::get_employee,
        api::handlers::employees::update_employee,
        api::handlers::employees::delete_employee,
        api::handlers::warehouses::create_warehouse,
        api::handlers::warehouses::list_warehouses,
        api::handlers::warehouses::get_warehouse,
        api::handlers::warehouses::update_warehouse,
        api::handlers::warehouses::delete_warehouse,
        api::handlers::sections::create_section,
        api::handlers::sections::list_sections,
        api::handlers::sections::get_section,
        api::handlers::sections::update_section,
        api::handlers::sections::delete_section,
    ),
    components(
        schemas(
            api::models::ErrorBody,
            api::models::products::ProductRequest,
            api::models::products::ProductResponse,
            api::models::sellers::SellerRequest,
            api::models::sellers::SellerResponse,
            api::models::buyers::BuyerRequest,
            api::models::buyers::BuyerResponse,
            api::models::employees::EmployeeRequest,
            api::models::employees::EmployeeResponse,
            api::models::warehouses::WarehouseRequest,
            api::models::warehouses::WarehouseResponse,
            api::models::sections::SectionRequest,
            api::models::sections::SectionResponse,
        )
    ),
    tags(
        (name = "products", description = "Products offered by sellers"),
        (name = "sellers", description = "Companies selling through the warehouses"),
        (name = "buyers", description = "Customers placing purchase orders"),
        (name = "employees", description = "Warehouse staff"),
        (name = "warehouses", description = "Physical warehouses"),
        (name = "sections", description = "Temperature-controlled areas inside a warehouse"),
    ),
    info(
        title = "Warehouse Management API",
        version = "1.0.0",
        description = "CRUD endpoints for the six warehouse entities.

## Envelopes

Successful responses wrap their payload as `{\"message\": \"success\", \"data\": ...}`. Errors are returned as
`{\"message\": ..., \"status\": ...}` where `status` is the lowercase HTTP reason phrase.

## Updates

`PATCH` merges the body into the stored entity: keys left out keep their current values and the id
always comes from the path.",
    ),
)]
pub struct ApiDoc;
