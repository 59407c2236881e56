use crate::{
    abstract_trait::locality::LocalityRepositoryTrait,
    domain::response::report::LocalitySellersReport,
    model::Locality,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct LocalityRepository {
    db: ConnectionPool,
}

impl LocalityRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocalityRepositoryTrait for LocalityRepository {
    async fn find_all(&self) -> Result<Vec<Locality>, RepositoryError> {
        info!("🔍 Fetching all localities");

        sqlx::query_as::<_, Locality>(
            r#"
            SELECT
                id,
                locality_name,
                province_name,
                country_name,
                postal_code
            FROM localities
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch localities: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Locality>, RepositoryError> {
        info!("🔍 Fetching locality id={id}");

        sqlx::query_as::<_, Locality>(
            r#"
            SELECT
                id,
                locality_name,
                province_name,
                country_name,
                postal_code
            FROM localities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch locality {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn postal_code_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM localities WHERE postal_code = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check postal code: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &Locality) -> Result<i32, RepositoryError> {
        info!("🆕 Creating locality");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO localities (locality_name, province_name, country_name, postal_code)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&value.locality_name)
        .bind(&value.province_name)
        .bind(&value.country_name)
        .bind(value.postal_code)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create locality: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created locality id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Locality) -> Result<bool, RepositoryError> {
        info!("🔄 Updating locality id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE localities
            SET
                locality_name = $2,
                province_name = $3,
                country_name = $4,
                postal_code = $5
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(&value.locality_name)
        .bind(&value.province_name)
        .bind(&value.country_name)
        .bind(value.postal_code)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update locality {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting locality id={id}");

        let result = sqlx::query("DELETE FROM localities WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete locality {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn report_sellers(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<LocalitySellersReport>, RepositoryError> {
        info!("📊 Counting sellers per locality (locality={id:?})");

        sqlx::query_as::<_, LocalitySellersReport>(
            r#"
            SELECT
                l.id AS locality_id,
                l.locality_name,
                COUNT(s.id)::BIGINT AS sellers_count
            FROM localities l
            LEFT JOIN sellers s ON s.locality_id = l.id
            WHERE ($1::INTEGER IS NULL OR l.id = $1)
            GROUP BY l.id, l.locality_name
            ORDER BY l.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to build sellers report: {e:?}");
            RepositoryError::from(e)
        })
    }
}
