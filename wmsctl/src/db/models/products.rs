use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::models::impl_entity;
use crate::types::{ProductId, ProductTypeId, SellerId};

/// A product as stored in the `products` table.
///
/// Two columns keep their historical names: `weight` holds the net weight and `recom_freez_temp`
/// the recommended freezing temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: ProductId,
    /// Unique product code
    pub product_code: String,
    pub description: String,
    pub height: f64,
    pub length: f64,
    pub width: f64,
    #[sqlx(rename = "weight")]
    pub netweight: f64,
    pub expiration_rate: f64,
    pub freezing_rate: f64,
    #[sqlx(rename = "recom_freez_temp")]
    pub recommended_freezing_temperature: f64,
    pub product_type_id: ProductTypeId,
    pub seller_id: SellerId,
}

impl_entity!(Product, "product");
