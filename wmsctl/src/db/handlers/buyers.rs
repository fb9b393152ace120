//! Database repository for buyers.

use sqlx::MySqlPool;
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::{inserted_id, repository::Repository},
    models::buyers::Buyer,
};
use crate::types::BuyerId;

const SELECT_BUYERS: &str = "SELECT id, card_number_id, first_name, last_name FROM buyers";

pub struct Buyers {
    db: MySqlPool,
}

impl Buyers {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl Repository for Buyers {
    type Entity = Buyer;

    #[instrument(skip(self), err)]
    async fn get_all(&self) -> Result<Vec<Buyer>> {
        let buyers = sqlx::query_as::<_, Buyer>(&format!("{SELECT_BUYERS} ORDER BY id"))
            .fetch_all(&self.db)
            .await?;

        Ok(buyers)
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: BuyerId) -> Result<Buyer> {
        sqlx::query_as::<_, Buyer>(&format!("{SELECT_BUYERS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(DbError::NotFound)
    }

    #[instrument(skip(self, buyer), fields(card_number_id = buyer.card_number_id), err)]
    async fn save(&self, buyer: &mut Buyer) -> Result<()> {
        let result = sqlx::query("INSERT INTO buyers (card_number_id, first_name, last_name) VALUES (?, ?, ?)")
            .bind(buyer.card_number_id)
            .bind(&buyer.first_name)
            .bind(&buyer.last_name)
            .execute(&self.db)
            .await?;

        buyer.id = inserted_id(&result)?;
        Ok(())
    }

    #[instrument(skip(self, buyer), fields(buyer_id = buyer.id), err)]
    async fn update(&self, buyer: &Buyer) -> Result<()> {
        sqlx::query("UPDATE buyers SET card_number_id = ?, first_name = ?, last_name = ? WHERE id = ?")
            .bind(buyer.card_number_id)
            .bind(&buyer.first_name)
            .bind(&buyer.last_name)
            .bind(buyer.id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: BuyerId) -> Result<()> {
        // Fails with a foreign key violation while purchase orders reference the buyer
        let result = sqlx::query("DELETE FROM buyers WHERE id = ?").bind(id).execute(&self.db).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}
