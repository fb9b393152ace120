//! API request/response models for buyers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RequestBody, first_missing};
use crate::db::models::buyers::Buyer;
use crate::types::BuyerId;

/// Request body for creating or patching a buyer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BuyerRequest {
    pub id: BuyerId,
    /// Customer card number (must be unique)
    #[schema(example = 402)]
    pub card_number_id: i64,
    #[schema(example = "Maria")]
    pub first_name: String,
    #[schema(example = "Lopez")]
    pub last_name: String,
}

impl RequestBody for BuyerRequest {
    const REQUIRED_KEYS: &'static [&'static str] = &["card_number_id", "first_name", "last_name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn missing_field(&self) -> Option<&'static str> {
        first_missing([
            ("card_number_id", self.card_number_id <= 0),
            ("first_name", self.first_name.is_empty()),
            ("last_name", self.last_name.is_empty()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BuyerResponse {
    pub id: BuyerId,
    pub card_number_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<BuyerRequest> for Buyer {
    fn from(request: BuyerRequest) -> Self {
        Self {
            id: request.id,
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

impl From<Buyer> for BuyerRequest {
    fn from(buyer: Buyer) -> Self {
        Self {
            id: buyer.id,
            card_number_id: buyer.card_number_id,
            first_name: buyer.first_name,
            last_name: buyer.last_name,
        }
    }
}

impl From<Buyer> for BuyerResponse {
    fn from(buyer: Buyer) -> Self {
        Self {
            id: buyer.id,
            card_number_id: buyer.card_number_id,
            first_name: buyer.first_name,
            last_name: buyer.last_name,
        }
    }
}
