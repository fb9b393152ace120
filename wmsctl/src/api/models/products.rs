//! API request/response models for products.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RequestBody, first_missing};
use crate::db::models::products::Product;
use crate::types::{ProductId, ProductTypeId, SellerId};

/// Request body for creating or patching a product.
///
/// Dimensions are in centimetres, `netweight` in kilograms and temperatures in degrees Celsius.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductRequest {
    pub id: ProductId,
    /// Unique product code
    #[schema(example = "PEA-01")]
    pub product_code: String,
    #[schema(example = "Frozen peas")]
    pub description: String,
    pub height: f64,
    pub length: f64,
    pub width: f64,
    pub netweight: f64,
    pub expiration_rate: f64,
    pub freezing_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub product_type_id: ProductTypeId,
    pub seller_id: SellerId,
}

impl RequestBody for ProductRequest {
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "product_code",
        "description",
        "height",
        "length",
        "width",
        "netweight",
        "expiration_rate",
        "freezing_rate",
        "recommended_freezing_temperature",
        "product_type_id",
        "seller_id",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn missing_field(&self) -> Option<&'static str> {
        first_missing([
            ("product_code", self.product_code.is_empty()),
            ("description", self.description.is_empty()),
            ("height", self.height == 0.0),
            ("length", self.length == 0.0),
            ("width", self.width == 0.0),
            ("netweight", self.netweight == 0.0),
            ("expiration_rate", self.expiration_rate == 0.0),
            ("freezing_rate", self.freezing_rate == 0.0),
            ("recommended_freezing_temperature", self.recommended_freezing_temperature == 0.0),
            ("seller_id", self.seller_id <= 0),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: ProductId,
    pub product_code: String,
    pub description: String,
    pub height: f64,
    pub length: f64,
    pub width: f64,
    pub netweight: f64,
    pub expiration_rate: f64,
    pub freezing_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub product_type_id: ProductTypeId,
    pub seller_id: SellerId,
}

impl From<ProductRequest> for Product {
    fn from(request: ProductRequest) -> Self {
        Self {
            id: request.id,
            product_code: request.product_code,
            description: request.description,
            height: request.height,
            length: request.length,
            width: request.width,
            netweight: request.netweight,
            expiration_rate: request.expiration_rate,
            freezing_rate: request.freezing_rate,
            recommended_freezing_temperature: request.recommended_freezing_temperature,
            product_type_id: request.product_type_id,
            seller_id: request.seller_id,
        }
    }
}

impl From<Product> for ProductRequest {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_code: product.product_code,
            description: product.description,
            height: product.height,
            length: product.length,
            width: product.width,
            netweight: product.netweight,
            expiration_rate: product.expiration_rate,
            freezing_rate: product.freezing_rate,
            recommended_freezing_temperature: product.recommended_freezing_temperature,
            product_type_id: product.product_type_id,
            seller_id: product.seller_id,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_code: product.product_code,
            description: product.description,
            height: product.height,
            length: product.length,
            width: product.width,
            netweight: product.netweight,
            expiration_rate: product.expiration_rate,
            freezing_rate: product.freezing_rate,
            recommended_freezing_temperature: product.recommended_freezing_temperature,
            product_type_id: product.product_type_id,
            seller_id: product.seller_id,
        }
    }
}
