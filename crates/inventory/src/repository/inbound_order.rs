use crate::{
    abstract_trait::inbound_order::InboundOrderRepositoryTrait,
    model::InboundOrder,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct InboundOrderRepository {
    db: ConnectionPool,
}

impl InboundOrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InboundOrderRepositoryTrait for InboundOrderRepository {
    async fn find_all(&self) -> Result<Vec<InboundOrder>, RepositoryError> {
        info!("🔍 Fetching all inbound orders");

        sqlx::query_as::<_, InboundOrder>(
            r#"
            SELECT
                id,
                order_date,
                order_number,
                employee_id,
                product_batch_id,
                warehouse_id
            FROM inbound_orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch inbound orders: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<InboundOrder>, RepositoryError> {
        info!("🔍 Fetching inbound order id={id}");

        sqlx::query_as::<_, InboundOrder>(
            r#"
            SELECT
                id,
                order_date,
                order_number,
                employee_id,
                product_batch_id,
                warehouse_id
            FROM inbound_orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch inbound order {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn order_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM inbound_orders WHERE order_number = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check order number: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &InboundOrder) -> Result<i32, RepositoryError> {
        info!("🆕 Creating inbound order");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO inbound_orders (
                order_date,
                order_number,
                employee_id,
                product_batch_id,
                warehouse_id
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(value.order_date)
        .bind(&value.order_number)
        .bind(value.employee_id)
        .bind(value.product_batch_id)
        .bind(value.warehouse_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create inbound order: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created inbound order id={id}");
        Ok(id)
    }

    async fn update(&self, value: &InboundOrder) -> Result<bool, RepositoryError> {
        info!("🔄 Updating inbound order id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE inbound_orders
            SET
                order_date = $2,
                order_number = $3,
                employee_id = $4,
                product_batch_id = $5,
                warehouse_id = $6
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(value.order_date)
        .bind(&value.order_number)
        .bind(value.employee_id)
        .bind(value.product_batch_id)
        .bind(value.warehouse_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update inbound order {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting inbound order id={id}");

        let result = sqlx::query("DELETE FROM inbound_orders WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete inbound order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
