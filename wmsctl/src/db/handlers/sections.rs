//! Database repository for warehouse sections.

use sqlx::MySqlPool;
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::{inserted_id, repository::Repository},
    models::sections::Section,
};
use crate::types::SectionId;

const SELECT_SECTIONS: &str = "SELECT id, section_number, current_temperature, minimum_temperature, current_capacity, \
                               minimum_capacity, maximum_capacity, warehouse_id, product_type_id FROM sections";

pub struct Sections {
    db: MySqlPool,
}

impl Sections {
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl Repository for Sections {
    type Entity = Section;

    #[instrument(skip(self), err)]
    async fn get_all(&self) -> Result<Vec<Section>> {
        let sections = sqlx::query_as::<_, Section>(&format!("{SELECT_SECTIONS} ORDER BY id"))
            .fetch_all(&self.db)
            .await?;

        Ok(sections)
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: SectionId) -> Result<Section> {
        sqlx::query_as::<_, Section>(&format!("{SELECT_SECTIONS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(DbError::NotFound)
    }

    #[instrument(skip(self, section), fields(section_number = section.section_number), err)]
    async fn save(&self, section: &mut Section) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO sections (section_number, current_temperature, minimum_temperature, current_capacity,
                                  minimum_capacity, maximum_capacity, warehouse_id, product_type_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(section.section_number)
        .bind(section.current_temperature)
        .bind(section.minimum_temperature)
        .bind(section.current_capacity)
        .bind(section.minimum_capacity)
        .bind(section.maximum_capacity)
        .bind(section.warehouse_id)
        .bind(section.product_type_id)
        .execute(&self.db)
        .await?;

        section.id = inserted_id(&result)?;
        Ok(())
    }

    #[instrument(skip(self, section), fields(section_id = section.id), err)]
    async fn update(&self, section: &Section) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE sections
            SET section_number = ?, current_temperature = ?, minimum_temperature = ?, current_capacity = ?,
                minimum_capacity = ?, maximum_capacity = ?, warehouse_id = ?, product_type_id = ?
            WHERE id = ?
            "#,
        )
        .bind(section.section_number)
        .bind(section.current_temperature)
        .bind(section.minimum_temperature)
        .bind(section.current_capacity)
        .bind(section.minimum_capacity)
        .bind(section.maximum_capacity)
        .bind(section.warehouse_id)
        .bind(section.product_type_id)
        .bind(section.id)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: SectionId) -> Result<()> {
        let result = sqlx::query("DELETE FROM sections WHERE id = ?").bind(id).execute(&self.db).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}
