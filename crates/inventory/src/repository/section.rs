use crate::{
    abstract_trait::section::SectionRepositoryTrait,
    domain::response::report::SectionProductsReport,
    model::Section,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct SectionRepository {
    db: ConnectionPool,
}

impl SectionRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SectionRepositoryTrait for SectionRepository {
    async fn find_all(&self) -> Result<Vec<Section>, RepositoryError> {
        info!("🔍 Fetching all sections");

        sqlx::query_as::<_, Section>(
            r#"
            SELECT
                id,
                section_number,
                current_temperature,
                minimum_temperature,
                current_capacity,
                minimum_capacity,
                maximum_capacity,
                warehouse_id,
                product_type_id
            FROM sections
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sections: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Section>, RepositoryError> {
        info!("🔍 Fetching section id={id}");

        sqlx::query_as::<_, Section>(
            r#"
            SELECT
                id,
                section_number,
                current_temperature,
                minimum_temperature,
                current_capacity,
                minimum_capacity,
                maximum_capacity,
                warehouse_id,
                product_type_id
            FROM sections
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch section {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn section_number_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM sections WHERE section_number = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check section number: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &Section) -> Result<i32, RepositoryError> {
        info!("🆕 Creating section");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO sections (
                section_number,
                current_temperature,
                minimum_temperature,
                current_capacity,
                minimum_capacity,
                maximum_capacity,
                warehouse_id,
                product_type_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(value.section_number)
        .bind(value.current_temperature)
        .bind(value.minimum_temperature)
        .bind(value.current_capacity)
        .bind(value.minimum_capacity)
        .bind(value.maximum_capacity)
        .bind(value.warehouse_id)
        .bind(value.product_type_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create section: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created section id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Section) -> Result<bool, RepositoryError> {
        info!("🔄 Updating section id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE sections
            SET
                section_number = $2,
                current_temperature = $3,
                minimum_temperature = $4,
                current_capacity = $5,
                minimum_capacity = $6,
                maximum_capacity = $7,
                warehouse_id = $8,
                product_type_id = $9
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(value.section_number)
        .bind(value.current_temperature)
        .bind(value.minimum_temperature)
        .bind(value.current_capacity)
        .bind(value.minimum_capacity)
        .bind(value.maximum_capacity)
        .bind(value.warehouse_id)
        .bind(value.product_type_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update section {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting section id={id}");

        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete section {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn report_products(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<SectionProductsReport>, RepositoryError> {
        info!("📊 Summing batch quantities per section (section={id:?})");

        sqlx::query_as::<_, SectionProductsReport>(
            r#"
            SELECT
                s.id AS section_id,
                s.section_number,
                COALESCE(SUM(pb.current_quantity), 0)::BIGINT AS products_count
            FROM sections s
            LEFT JOIN product_batches pb ON pb.section_id = s.id
            WHERE ($1::INTEGER IS NULL OR s.id = $1)
            GROUP BY s.id, s.section_number
            ORDER BY s.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to build section products report: {e:?}");
            RepositoryError::from(e)
        })
    }
}
