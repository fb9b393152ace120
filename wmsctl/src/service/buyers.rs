use super::{Validate, errors::Result, rules};
use crate::db::models::buyers::Buyer;

impl Validate for Buyer {
    fn validate(&self) -> Result<()> {
        rules::positive_id("card number id", self.card_number_id)?;
        rules::min_len("first name", &self.first_name, 3)?;
        rules::min_len("last name", &self.last_name, 3)?;
        Ok(())
    }
}
