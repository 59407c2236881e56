use crate::{
    abstract_trait::product::ProductRepositoryTrait,
    domain::response::report::ProductRecordsReport,
    model::Product,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching all products");

        sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                description,
                expiration_rate,
                freezing_rate,
                height,
                length,
                netweight,
                product_code,
                recommended_freezing_temperature,
                width,
                product_type_id,
                seller_id
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        info!("🔍 Fetching product id={id}");

        sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id,
                description,
                expiration_rate,
                freezing_rate,
                height,
                length,
                netweight,
                product_code,
                recommended_freezing_temperature,
                width,
                product_type_id,
                seller_id
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn product_code_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM products WHERE product_code = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check product code: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &Product) -> Result<i32, RepositoryError> {
        info!("🆕 Creating product");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO products (
                description,
                expiration_rate,
                freezing_rate,
                height,
                length,
                netweight,
                product_code,
                recommended_freezing_temperature,
                width,
                product_type_id,
                seller_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&value.description)
        .bind(value.expiration_rate)
        .bind(value.freezing_rate)
        .bind(value.height)
        .bind(value.length)
        .bind(value.netweight)
        .bind(&value.product_code)
        .bind(value.recommended_freezing_temperature)
        .bind(value.width)
        .bind(value.product_type_id)
        .bind(value.seller_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created product id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Product) -> Result<bool, RepositoryError> {
        info!("🔄 Updating product id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE products
            SET
                description = $2,
                expiration_rate = $3,
                freezing_rate = $4,
                height = $5,
                length = $6,
                netweight = $7,
                product_code = $8,
                recommended_freezing_temperature = $9,
                width = $10,
                product_type_id = $11,
                seller_id = $12
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(&value.description)
        .bind(value.expiration_rate)
        .bind(value.freezing_rate)
        .bind(value.height)
        .bind(value.length)
        .bind(value.netweight)
        .bind(&value.product_code)
        .bind(value.recommended_freezing_temperature)
        .bind(value.width)
        .bind(value.product_type_id)
        .bind(value.seller_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting product id={id}");

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn report_records(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<ProductRecordsReport>, RepositoryError> {
        info!("📊 Counting records per product (product={id:?})");

        sqlx::query_as::<_, ProductRecordsReport>(
            r#"
            SELECT
                p.id AS product_id,
                p.description,
                COUNT(pr.id)::BIGINT AS records_count
            FROM products p
            LEFT JOIN product_records pr ON pr.product_id = p.id
            WHERE ($1::INTEGER IS NULL OR p.id = $1)
            GROUP BY p.id, p.description
            ORDER BY p.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to build product records report: {e:?}");
            RepositoryError::from(e)
        })
    }
}
