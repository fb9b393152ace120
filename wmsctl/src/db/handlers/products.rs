//! Database repository for products.

use sqlx::MySqlPool;
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::{inserted_id, repository::Repository},
    models::products::Product,
};
use crate::types::ProductId;

const SELECT_PRODUCTS: &str = "SELECT id, product_code, description, height, length, width, weight, expiration_rate, \
                               freezing_rate, recom_freez_temp, product_type_id, seller_id FROM products";

pub struct Products {
    db: MySqlPool,
}

impl Products {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl Repository for Products {
    type Entity = Product;

    #[instrument(skip(self), err)]
    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCTS} ORDER BY id"))
            .fetch_all(&self.db)
            .await?;

        Ok(products)
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: ProductId) -> Result<Product> {
        sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCTS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(DbError::NotFound)
    }

    #[instrument(skip(self, product), fields(product_code = %product.product_code), err)]
    async fn save(&self, product: &mut Product) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (product_code, description, height, length, width, weight, expiration_rate,
                                  freezing_rate, recom_freez_temp, product_type_id, seller_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.product_code)
        .bind(&product.description)
        .bind(product.height)
        .bind(product.length)
        .bind(product.width)
        .bind(product.netweight)
        .bind(product.expiration_rate)
        .bind(product.freezing_rate)
        .bind(product.recommended_freezing_temperature)
        .bind(product.product_type_id)
        .bind(product.seller_id)
        .execute(&self.db)
        .await?;

        product.id = inserted_id(&result)?;
        Ok(())
    }

    #[instrument(skip(self, product), fields(product_id = product.id), err)]
    async fn update(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE products
            SET product_code = ?, description = ?, height = ?, length = ?, width = ?, weight = ?,
                expiration_rate = ?, freezing_rate = ?, recom_freez_temp = ?, product_type_id = ?, seller_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.product_code)
        .bind(&product.description)
        .bind(product.height)
        .bind(product.length)
        .bind(product.width)
        .bind(product.netweight)
        .bind(product.expiration_rate)
        .bind(product.freezing_rate)
        .bind(product.recommended_freezing_temperature)
        .bind(product.product_type_id)
        .bind(product.seller_id)
        .bind(product.id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: ProductId) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?").bind(id).execute(&self.db).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(product_code: &str, seller_id: i64) -> Product {
        Product {
            id: 0,
            product_code: product_code.to_string(),
            description: "Frozen peas".to_string(),
            height: 10.0,
            length: 20.0,
            width: 5.0,
            netweight: 1.5,
            expiration_rate: 0.7,
            freezing_rate: 0.3,
            recommended_freezing_temperature: -18.0,
            product_type_id: 1,
            seller_id,
        }
    }

    async fn create_seller(pool: &MySqlPool) -> i64 {
        sqlx::query(
            "INSERT INTO sellers (cid, company_name, address, telephone, locality_id) \
             VALUES (77, 'Frescos SA', 'Calle 1', '1234567890', '1')",
        )
        .execute(pool)
        .await
        .expect("Failed to create seller")
        .last_insert_id() as i64
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_renamed_columns_round_trip(pool: MySqlPool) {
        let seller_id = create_seller(&pool).await;
        let repo = Products::new(pool);

        let mut saved = product("PEA-01", seller_id);
        repo.save(&mut saved).await.unwrap();

        let fetched = repo.get(saved.id).await.unwrap();
        assert_eq!(fetched.netweight, 1.5);
        assert_eq!(fetched.recommended_freezing_temperature, -18.0);
        assert_eq!(fetched, saved);
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_save_with_unknown_seller_is_foreign_key_violation(pool: MySqlPool) {
        let repo = Products::new(pool);

        let err = repo.save(&mut product("PEA-01", 999)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { referenced: false, .. }));
    }
}
