use super::{Validate, errors::Result, rules};
use crate::db::models::employees::Employee;

impl Validate for Employee {
    fn validate(&self) -> Result<()> {
        rules::min_len("first name", &self.first_name, 3)?;
        rules::min_len("last name", &self.last_name, 3)?;
        rules::not_negative("warehouse id", self.warehouse_id)?;
        Ok(())
    }
}
