//! Database repository for employees.

use sqlx::MySqlPool;
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::{inserted_id, repository::Repository},
    models::employees::Employee,
};
use crate::types::EmployeeId;

const SELECT_EMPLOYEES: &str = "SELECT id, card_number_id, first_name, last_name, warehouse_id FROM employees";

pub struct Employees {
    db: MySqlPool,
}

impl Employees {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl Repository for Employees {
    type Entity = Employee;

    #[instrument(skip(self), err)]
    async fn get_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEES} ORDER BY id"))
            .fetch_all(&self.db)
            .await?;

        Ok(employees)
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: EmployeeId) -> Result<Employee> {
        sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEES} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(DbError::NotFound)
    }

    #[instrument(skip(self, employee), fields(card_number_id = employee.card_number_id), err)]
    async fn save(&self, employee: &mut Employee) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (card_number_id, first_name, last_name, warehouse_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(employee.card_number_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.warehouse_id)
        .execute(&self.db)
        .await?;

        employee.id = inserted_id(&result)?;
        Ok(())
    }

    #[instrument(skip(self, employee), fields(employee_id = employee.id), err)]
    async fn update(&self, employee: &Employee) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE employees
            SET card_number_id = ?, first_name = ?, last_name = ?, warehouse_id = ?
            WHERE id = ?
            "#,
        )
        .bind(employee.card_number_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.warehouse_id)
        .bind(employee.id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: EmployeeId) -> Result<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?").bind(id).execute(&self.db).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create_warehouse(pool: &MySqlPool, code: &str) -> i64 {
        sqlx::query(
            "INSERT INTO warehouses (warehouse_code, address, telephone, minimum_capacity, minimum_temperature, locality_id) \
             VALUES (?, 'Av. Siempre Viva 742', '1234567890', 10, -5.0, '1')",
        )
        .bind(code)
        .execute(pool)
        .await
        .expect("Failed to create warehouse")
        .last_insert_id() as i64
    }

    fn employee(card_number_id: i64, warehouse_id: i64) -> Employee {
        Employee {
            id: 0,
            card_number_id,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            warehouse_id,
        }
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_save_then_get_round_trip(pool: MySqlPool) {
        let warehouse_id = create_warehouse(&pool, "WH-1").await;
        let repo = Employees::new(pool);

        let mut saved = employee(1234, warehouse_id);
        repo.save(&mut saved).await.unwrap();
        assert!(saved.id > 0);

        let fetched = repo.get(saved.id).await.unwrap();
        assert_eq!(fetched, saved);
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_get_all_is_ordered_and_empty_when_no_rows(pool: MySqlPool) {
        let warehouse_id = create_warehouse(&pool, "WH-1").await;
        let repo = Employees::new(pool);
        assert!(repo.get_all().await.unwrap().is_empty());

        for card in [30, 10, 20] {
            repo.save(&mut employee(card, warehouse_id)).await.unwrap();
        }

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_duplicate_card_number_is_unique_violation(pool: MySqlPool) {
        let warehouse_id = create_warehouse(&pool, "WH-1").await;
        let repo = Employees::new(pool);

        repo.save(&mut employee(1234, warehouse_id)).await.unwrap();
        let err = repo.save(&mut employee(1234, warehouse_id)).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_update_with_missing_warehouse_is_foreign_key_violation(pool: MySqlPool) {
        let warehouse_id = create_warehouse(&pool, "WH-1").await;
        let repo = Employees::new(pool);

        let mut saved = employee(1234, warehouse_id);
        repo.save(&mut saved).await.unwrap();
        saved.warehouse_id = warehouse_id + 100;

        match repo.update(&saved).await.unwrap_err() {
            DbError::ForeignKeyViolation { referenced, column, .. } => {
                assert!(!referenced);
                assert_eq!(column.as_deref(), Some("warehouse_id"));
            }
            other => panic!("expected foreign key violation, got {other:?}"),
        }
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_delete_referenced_employee_is_foreign_key_violation(pool: MySqlPool) {
        let warehouse_id = create_warehouse(&pool, "WH-1").await;
        let repo = Employees::new(pool.clone());

        let mut saved = employee(1234, warehouse_id);
        repo.save(&mut saved).await.unwrap();
        sqlx::query("INSERT INTO inbound_orders (order_number, order_date, employee_id, warehouse_id) VALUES ('IO-1', CURDATE(), ?, ?)")
            .bind(saved.id)
            .bind(warehouse_id)
            .execute(&pool)
            .await
            .unwrap();

        let err = repo.delete(saved.id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { referenced: true, .. }));
    }

    #[sqlx::test]
    #[ignore = "needs a MySQL server at DATABASE_URL"]
    async fn test_delete_missing_employee_is_not_found(pool: MySqlPool) {
        let repo = Employees::new(pool);
        assert!(matches!(repo.delete(42).await.unwrap_err(), DbError::NotFound));
    }
}
