use super::{Validate, errors::Result, rules};
use crate::db::models::sellers::Seller;

impl Validate for Seller {
    fn validate(&self) -> Result<()> {
        rules::positive_id("cid", self.cid)?;
        rules::required("company name", &self.company_name)?;
        rules::required("address", &self.address)?;
        rules::telephone("telephone", &self.telephone)?;
        rules::required("locality id", &self.locality_id)?;
        Ok(())
    }
}
