//! Database repository for sellers.

use sqlx::MySqlPool;
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::{inserted_id, repository::Repository},
    models::sellers::Seller,
};
use crate::types::SellerId;

const SELECT_SELLERS: &str = "SELECT id, cid, company_name, address, telephone, locality_id FROM sellers";

pub struct Sellers {
    db: MySqlPool,
}

impl Sellers {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl Repository for Sellers {
    type Entity = Seller;

    #[instrument(skip(self), err)]
    async fn get_all(&self) -> Result<Vec<Seller>> {
        let sellers = sqlx::query_as::<_, Seller>(&format!("{SELECT_SELLERS} ORDER BY id"))
            .fetch_all(&self.db)
            .await?;

        Ok(sellers)
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: SellerId) -> Result<Seller> {
        sqlx::query_as::<_, Seller>(&format!("{SELECT_SELLERS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(DbError::NotFound)
    }

    #[instrument(skip(self, seller), fields(cid = seller.cid), err)]
    async fn save(&self, seller: &mut Seller) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO sellers (cid, company_name, address, telephone, locality_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(seller.cid)
        .bind(&seller.company_name)
        .bind(&seller.address)
        .bind(&seller.telephone)
        .bind(&seller.locality_id)
        .execute(&self.db)
        .await?;

        seller.id = inserted_id(&result)?;
        Ok(())
    }

    #[instrument(skip(self, seller), fields(seller_id = seller.id), err)]
    async fn update(&self, seller: &Seller) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE sellers
            SET cid = ?, company_name = ?, address = ?, telephone = ?, locality_id = ?
            WHERE id = ?
            "#,
        )
        .bind(seller.cid)
        .bind(&seller.company_name)
        .bind(&seller.address)
        .bind(&seller.telephone)
        .bind(&seller.locality_id)
        .bind(seller.id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: SellerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM sellers WHERE id = ?").bind(id).execute(&self.db).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}
