//! Database repository for warehouses.

use sqlx::MySqlPool;
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::{inserted_id, repository::Repository},
    models::warehouses::Warehouse,
};
use crate::types::WarehouseId;

const SELECT_WAREHOUSES: &str = "SELECT id, warehouse_code, address, telephone, minimum_capacity, minimum_temperature, locality_id \
                                 FROM warehouses";

pub struct Warehouses {
    db: MySqlPool,
}

impl Warehouses {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl Repository for Warehouses {
    type Entity = Warehouse;

    #[instrument(skip(self), err)]
    async fn get_all(&self) -> Result<Vec<Warehouse>> {
        let warehouses = sqlx::query_as::<_, Warehouse>(&format!("{SELECT_WAREHOUSES} ORDER BY id"))
            .fetch_all(&self.db)
            .await?;

        Ok(warehouses)
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: WarehouseId) -> Result<Warehouse> {
        sqlx::query_as::<_, Warehouse>(&format!("{SELECT_WAREHOUSES} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(DbError::NotFound)
    }

    #[instrument(skip(self, warehouse), fields(warehouse_code = %warehouse.warehouse_code), err)]
    async fn save(&self, warehouse: &mut Warehouse) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO warehouses (warehouse_code, address, telephone, minimum_capacity, minimum_temperature, locality_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&warehouse.warehouse_code)
        .bind(&warehouse.address)
        .bind(&warehouse.telephone)
        .bind(warehouse.minimum_capacity)
        .bind(warehouse.minimum_temperature)
        .bind(&warehouse.locality_id)
        .execute(&self.db)
        .await?;

        warehouse.id = inserted_id(&result)?;
        Ok(())
    }

    #[instrument(skip(self, warehouse), fields(warehouse_id = warehouse.id), err)]
    async fn update(&self, warehouse: &Warehouse) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE warehouses
            SET warehouse_code = ?, address = ?, telephone = ?, minimum_capacity = ?, minimum_temperature = ?, locality_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&warehouse.warehouse_code)
        .bind(&warehouse.address)
        .bind(&warehouse.telephone)
        .bind(warehouse.minimum_capacity)
        .bind(warehouse.minimum_temperature)
        .bind(&warehouse.locality_id)
        .bind(warehouse.id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: WarehouseId) -> Result<()> {
        // Employees, sections and inbound orders all reference warehouses
        let result = sqlx::query("DELETE FROM warehouses WHERE id = ?").bind(id).execute(&self.db).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}
