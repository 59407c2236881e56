use crate::{
    abstract_trait::buyer::BuyerRepositoryTrait,
    domain::response::report::BuyerPurchaseOrdersReport,
    model::Buyer,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct BuyerRepository {
    db: ConnectionPool,
}

impl BuyerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BuyerRepositoryTrait for BuyerRepository {
    async fn find_all(&self) -> Result<Vec<Buyer>, RepositoryError> {
        info!("🔍 Fetching all buyers");

        sqlx::query_as::<_, Buyer>(
            r#"
            SELECT
                id,
                card_number_id,
                first_name,
                last_name
            FROM buyers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch buyers: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Buyer>, RepositoryError> {
        info!("🔍 Fetching buyer id={id}");

        sqlx::query_as::<_, Buyer>(
            r#"
            SELECT
                id,
                card_number_id,
                first_name,
                last_name
            FROM buyers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch buyer {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn card_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM buyers WHERE card_number_id = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check card number id: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &Buyer) -> Result<i32, RepositoryError> {
        info!("🆕 Creating buyer");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO buyers (card_number_id, first_name, last_name)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&value.card_number_id)
        .bind(&value.first_name)
        .bind(&value.last_name)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create buyer: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created buyer id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Buyer) -> Result<bool, RepositoryError> {
        info!("🔄 Updating buyer id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE buyers
            SET
                card_number_id = $2,
                first_name = $3,
                last_name = $4
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(&value.card_number_id)
        .bind(&value.first_name)
        .bind(&value.last_name)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update buyer {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting buyer id={id}");

        let result = sqlx::query("DELETE FROM buyers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete buyer {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn report_purchase_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<BuyerPurchaseOrdersReport>, RepositoryError> {
        info!("📊 Counting purchase orders per buyer (buyer={id:?})");

        sqlx::query_as::<_, BuyerPurchaseOrdersReport>(
            r#"
            SELECT
                b.id,
                b.card_number_id,
                b.first_name,
                b.last_name,
                COUNT(po.id)::BIGINT AS purchase_orders_count
            FROM buyers b
            LEFT JOIN purchase_orders po ON po.buyer_id = b.id
            WHERE ($1::INTEGER IS NULL OR b.id = $1)
            GROUP BY b.id, b.card_number_id, b.first_name, b.last_name
            ORDER BY b.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to build purchase orders report: {e:?}");
            RepositoryError::from(e)
        })
    }
}
