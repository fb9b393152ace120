use super::{Validate, errors::Result, rules};
use crate::db::models::sections::Section;

/// Coldest temperature (°C) a section can be configured for
pub const MIN_SECTION_TEMPERATURE: f64 = -30.0;

impl Validate for Section {
    fn validate(&self) -> Result<()> {
        rules::positive_id("section number", i64::from(self.section_number))?;
        rules::at_least("minimum temperature", self.minimum_temperature, MIN_SECTION_TEMPERATURE)?;
        rules::not_negative("current capacity", self.current_capacity)?;
        rules::not_negative("minimum capacity", self.minimum_capacity)?;
        rules::not_negative("maximum capacity", self.maximum_capacity)?;
        if self.minimum_capacity > self.maximum_capacity {
            return Err(super::ServiceError::InvalidField {
                field: "maximum capacity",
            });
        }
        rules::positive_id("warehouse id", self.warehouse_id)?;
        rules::positive_id("product type id", self.product_type_id)?;
        Ok(())
    }
}
