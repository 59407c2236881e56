use crate::{
    abstract_trait::product_batch::ProductBatchRepositoryTrait,
    model::ProductBatch,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductBatchRepository {
    db: ConnectionPool,
}

impl ProductBatchRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductBatchRepositoryTrait for ProductBatchRepository {
    async fn find_all(&self) -> Result<Vec<ProductBatch>, RepositoryError> {
        info!("🔍 Fetching all product batches");

        sqlx::query_as::<_, ProductBatch>(
            r#"
            SELECT
                id,
                batch_number,
                current_quantity,
                current_temperature,
                due_date,
                initial_quantity,
                manufacturing_date,
                manufacturing_hour,
                minimum_temperature,
                product_id,
                section_id
            FROM product_batches
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product batches: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductBatch>, RepositoryError> {
        info!("🔍 Fetching product batch id={id}");

        sqlx::query_as::<_, ProductBatch>(
            r#"
            SELECT
                id,
                batch_number,
                current_quantity,
                current_temperature,
                due_date,
                initial_quantity,
                manufacturing_date,
                manufacturing_hour,
                minimum_temperature,
                product_id,
                section_id
            FROM product_batches
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product batch {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn batch_number_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM product_batches WHERE batch_number = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check batch number: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &ProductBatch) -> Result<i32, RepositoryError> {
        info!("🆕 Creating product batch");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO product_batches (
                batch_number,
                current_quantity,
                current_temperature,
                due_date,
                initial_quantity,
                manufacturing_date,
                manufacturing_hour,
                minimum_temperature,
                product_id,
                section_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(value.batch_number)
        .bind(value.current_quantity)
        .bind(value.current_temperature)
        .bind(value.due_date)
        .bind(value.initial_quantity)
        .bind(value.manufacturing_date)
        .bind(value.manufacturing_hour)
        .bind(value.minimum_temperature)
        .bind(value.product_id)
        .bind(value.section_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product batch: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created product batch id={id}");
        Ok(id)
    }

    async fn update(&self, value: &ProductBatch) -> Result<bool, RepositoryError> {
        info!("🔄 Updating product batch id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE product_batches
            SET
                batch_number = $2,
                current_quantity = $3,
                current_temperature = $4,
                due_date = $5,
                initial_quantity = $6,
                manufacturing_date = $7,
                manufacturing_hour = $8,
                minimum_temperature = $9,
                product_id = $10,
                section_id = $11
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(value.batch_number)
        .bind(value.current_quantity)
        .bind(value.current_temperature)
        .bind(value.due_date)
        .bind(value.initial_quantity)
        .bind(value.manufacturing_date)
        .bind(value.manufacturing_hour)
        .bind(value.minimum_temperature)
        .bind(value.product_id)
        .bind(value.section_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product batch {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting product batch id={id}");

        let result = sqlx::query("DELETE FROM product_batches WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product batch {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
