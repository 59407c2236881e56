use crate::{
    abstract_trait::purchase_order::PurchaseOrderRepositoryTrait,
    model::PurchaseOrder,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct PurchaseOrderRepository {
    db: ConnectionPool,
}

impl PurchaseOrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PurchaseOrderRepositoryTrait for PurchaseOrderRepository {
    async fn find_all(&self) -> Result<Vec<PurchaseOrder>, RepositoryError> {
        info!("🔍 Fetching all purchase orders");

        sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT
                id,
                order_number,
                order_date,
                tracking_code,
                buyer_id,
                product_record_id,
                order_status_id
            FROM purchase_orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch purchase orders: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PurchaseOrder>, RepositoryError> {
        info!("🔍 Fetching purchase order id={id}");

        sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT
                id,
                order_number,
                order_date,
                tracking_code,
                buyer_id,
                product_record_id,
                order_status_id
            FROM purchase_orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch purchase order {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn order_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM purchase_orders WHERE order_number = $1 AND id <> $2)",
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

    async fn create(&self, value: &PurchaseOrder) -> Result<i32, RepositoryError> {
        info!("🆕 Creating purchase order");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO purchase_orders (
                order_number,
                order_date,
                tracking_code,
                buyer_id,
                product_record_id,
                order_status_id
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&value.order_number)
        .bind(value.order_date)
        .bind(&value.tracking_code)
        .bind(value.buyer_id)
        .bind(value.product_record_id)
        .bind(value.order_status_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create purchase order: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created purchase order id={id}");
        Ok(id)
    }

    async fn update(&self, value: &PurchaseOrder) -> Result<bool, RepositoryError> {
        info!("🔄 Updating purchase order id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE purchase_orders
            SET
                order_number = $2,
                order_date = $3,
                tracking_code = $4,
                buyer_id = $5,
                product_record_id = $6,
                order_status_id = $7
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(&value.order_number)
        .bind(value.order_date)
        .bind(&value.tracking_code)
        .bind(value.buyer_id)
        .bind(value.product_record_id)
        .bind(value.order_status_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update purchase order {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting purchase order id={id}");

        let result = sqlx::query("DELETE FROM purchase_orders WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete purchase order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
