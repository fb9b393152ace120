//! API request/response models for sellers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RequestBody, first_missing};
use crate::db::models::sellers::Seller;
use crate::types::SellerId;

/// Request body for creating or patching a seller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SellerRequest {
    pub id: SellerId,
    /// Company identification number (must be unique)
    #[schema(example = 30712)]
    pub cid: i64,
    #[schema(example = "Acme Foods")]
    pub company_name: String,
    pub address: String,
    /// `123-456-7890`, `1234567890`, `12345678` or `1234567`
    #[schema(example = "555-123-4567")]
    pub telephone: String,
    pub locality_id: String,
}

impl RequestBody for SellerRequest {
    const REQUIRED_KEYS: &'static [&'static str] = &["cid", "company_name", "address", "telephone", "locality_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn missing_field(&self) -> Option<&'static str> {
        first_missing([
            ("cid", self.cid <= 0),
            ("company_name", self.company_name.is_empty()),
            ("address", self.address.is_empty()),
            ("telephone", self.telephone.is_empty()),
            ("locality_id", self.locality_id.is_empty()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SellerResponse {
    pub id: SellerId,
    pub cid: i64,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: String,
}

impl From<SellerRequest> for Seller {
    fn from(request: SellerRequest) -> Self {
        Self {
            id: request.id,
            cid: request.cid,
            company_name: request.company_name,
            address: request.address,
            telephone: request.telephone,
            locality_id: request.locality_id,
        }
    }
}

impl From<Seller> for SellerRequest {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id,
            cid: seller.cid,
            company_name: seller.company_name,
            address: seller.address,
            telephone: seller.telephone,
            locality_id: seller.locality_id,
        }
    }
}

impl From<Seller> for SellerResponse {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id,
            cid: seller.cid,
            company_name: seller.company_name,
            address: seller.address,
            telephone: seller.telephone,
            locality_id: seller.locality_id,
        }
    }
}
