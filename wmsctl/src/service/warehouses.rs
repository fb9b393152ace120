use super::{Validate, errors::Result, rules};
use crate::db::models::warehouses::Warehouse;

impl Validate for Warehouse {
    fn validate(&self) -> Result<()> {
        rules::required("warehouse code", &self.warehouse_code)?;
        rules::required("address", &self.address)?;
        rules::telephone("telephone", &self.telephone)?;
        rules::not_negative("minimum capacity", self.minimum_capacity)?;
        rules::required("locality id", &self.locality_id)?;
        Ok(())
    }
}
