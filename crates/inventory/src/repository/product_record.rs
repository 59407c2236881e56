use crate::{
    abstract_trait::product_record::ProductRecordRepositoryTrait,
    model::ProductRecord,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRecordRepository {
    db: ConnectionPool,
}

impl ProductRecordRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRecordRepositoryTrait for ProductRecordRepository {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        info!("🔍 Fetching all product records");

        sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT
                id,
                last_update_date,
                purchase_price,
                sale_price,
                product_id
            FROM product_records
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product records: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductRecord>, RepositoryError> {
        info!("🔍 Fetching product record id={id}");

        sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT
                id,
                last_update_date,
                purchase_price,
                sale_price,
                product_id
            FROM product_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product record {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &ProductRecord) -> Result<i32, RepositoryError> {
        info!("🆕 Creating product record");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO product_records (last_update_date, purchase_price, sale_price, product_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(value.last_update_date)
        .bind(value.purchase_price)
        .bind(value.sale_price)
        .bind(value.product_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product record: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created product record id={id}");
        Ok(id)
    }
}
