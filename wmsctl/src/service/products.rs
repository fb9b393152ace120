use super::{Validate, errors::Result, rules};
use crate::db::models::products::Product;

impl Validate for Product {
    fn validate(&self) -> Result<()> {
        rules::required("product code", &self.product_code)?;
        rules::required("description", &self.description)?;
        rules::positive_measure("height", self.height)?;
        rules::positive_measure("length", self.length)?;
        rules::positive_measure("width", self.width)?;
        rules::positive_measure("netweight", self.netweight)?;
        rules::positive_id("product type id", self.product_type_id)?;
        rules::positive_id("seller id", self.seller_id)?;
        Ok(())
    }
}
