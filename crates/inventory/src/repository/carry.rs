use crate::{
    abstract_trait::carry::CarryRepositoryTrait,
    domain::response::report::LocalityCarriesReport,
    model::Carry,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CarryRepository {
    db: ConnectionPool,
}

impl CarryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarryRepositoryTrait for CarryRepository {
    async fn find_all(&self) -> Result<Vec<Carry>, RepositoryError> {
        info!("🔍 Fetching all carries");

        sqlx::query_as::<_, Carry>(
            r#"
            SELECT
                id,
                cid,
                company_name,
                address,
                telephone,
                locality_id
            FROM carries
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch carries: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Carry>, RepositoryError> {
        info!("🔍 Fetching carry id={id}");

        sqlx::query_as::<_, Carry>(
            r#"
            SELECT
                id,
                cid,
                company_name,
                address,
                telephone,
                locality_id
            FROM carries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch carry {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn cid_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM carries WHERE cid = $1 AND id <> $2)",
        )
        .bind(value)
        .bind(exclude_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to check cid: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, value: &Carry) -> Result<i32, RepositoryError> {
        info!("🆕 Creating carry");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO carries (cid, company_name, address, telephone, locality_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&value.cid)
        .bind(&value.company_name)
        .bind(&value.address)
        .bind(&value.telephone)
        .bind(value.locality_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create carry: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created carry id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Carry) -> Result<bool, RepositoryError> {
        info!("🔄 Updating carry id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE carries
            SET
                cid = $2,
                company_name = $3,
                address = $4,
                telephone = $5,
                locality_id = $6
            WHERE id = $1
            "#,
        )
        .bind(value.id)
        .bind(&value.cid)
        .bind(&value.company_name)
        .bind(&value.address)
        .bind(&value.telephone)
        .bind(value.locality_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update carry {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting carry id={id}");

        let result = sqlx::query("DELETE FROM carries WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete carry {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn report_by_locality(
        &self,
        locality_id: Option<i32>,
    ) -> Result<Vec<LocalityCarriesReport>, RepositoryError> {
        info!("📊 Counting carries per locality (locality={locality_id:?})");

        sqlx::query_as::<_, LocalityCarriesReport>(
            r#"
            SELECT
                l.id AS locality_id,
                l.locality_name,
                COUNT(c.id)::BIGINT AS carries_count
            FROM localities l
            LEFT JOIN carries c ON c.locality_id = l.id
            WHERE ($1::INTEGER IS NULL OR l.id = $1)
            GROUP BY l.id, l.locality_name
            ORDER BY l.id
            "#,
        )
        .bind(locality_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to build carries report: {e:?}");
            RepositoryError::from(e)
        })
    }
}
