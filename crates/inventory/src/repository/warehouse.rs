use crate::{
    abstract_trait::warehouse::WarehouseRepositoryTrait,
    model::Warehouse,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct WarehouseRepository {
    db: ConnectionPool,
}

impl WarehouseRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WarehouseRepositoryTrait for WarehouseRepository {
    async fn find_all(&self) -> Result<Vec<Warehouse>, RepositoryError> {
        info!("🔍 Fetching all warehouses");

        sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT
                id,
                address,
                telephone,
                warehouse_code,
                minimum_capacity,
                minimum_temperature,
                locality_id
            FROM warehouses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch warehouses: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Warehouse>, RepositoryError> {
        info!("🔍 Fetching warehouse id={id}");

        sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT
                id,
                address,
                telephone,
                warehouse_code,
                minimum_capacity,
                minimum_temperature,
                locality_id
            FROM warehouses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch warehouse {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn code_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM warehouses WHERE warehouse_code = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check warehouse code: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &Warehouse) -> Result<i32, RepositoryError> {
        info!("🆕 Creating warehouse");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO warehouses (
                address,
                telephone,
                warehouse_code,
                minimum_capacity,
                minimum_temperature,
                locality_id
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&value.address)
        .bind(&value.telephone)
        .bind(&value.warehouse_code)
        .bind(value.minimum_capacity)
        .bind(value.minimum_temperature)
        .bind(value.locality_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create warehouse: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created warehouse id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Warehouse) -> Result<bool, RepositoryError> {
        info!("🔄 Updating warehouse id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE warehouses
            SET
                address = $2,
                telephone = $3,
                warehouse_code = $4,
                minimum_capacity = $5,
                minimum_temperature = $6,
                locality_id = $7
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(&value.address)
        .bind(&value.telephone)
        .bind(&value.warehouse_code)
        .bind(value.minimum_capacity)
        .bind(value.minimum_temperature)
        .bind(value.locality_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update warehouse {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting warehouse id={id}");

        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete warehouse {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
