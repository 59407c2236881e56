use crate::{
    abstract_trait::seller::SellerRepositoryTrait,
    model::Seller,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct SellerRepository {
    db: ConnectionPool,
}

impl SellerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SellerRepositoryTrait for SellerRepository {
    async fn find_all(&self) -> Result<Vec<Seller>, RepositoryError> {
        info!("🔍 Fetching all sellers");

        sqlx::query_as::<_, Seller>(
            r#"
            SELECT
                id,
                cid,
                company_name,
                address,
                telephone,
                locality_id
            FROM sellers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sellers: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Seller>, RepositoryError> {
        info!("🔍 Fetching seller id={id}");

        sqlx::query_as::<_, Seller>(
            r#"
            SELECT
                id,
                cid,
                company_name,
                address,
                telephone,
                locality_id
            FROM sellers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch seller {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn cid_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM sellers WHERE cid = $1 AND id <> $2)",
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

    async fn create(&self, value: &Seller) -> Result<i32, RepositoryError> {
        info!("🆕 Creating seller");

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO sellers (cid, company_name, address, telephone, locality_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(value.cid)
        .bind(&value.company_name)
        .bind(&value.address)
        .bind(&value.telephone)
        .bind(value.locality_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create seller: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created seller id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Seller) -> Result<bool, RepositoryError> {
        info!("🔄 Updating seller id={}", value.id);

        let result = sqlx::query(
            r#"
            UPDATE sellers
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
        .bind(value.cid)
        .bind(&value.company_name)
        .bind(&value.address)
        .bind(&value.telephone)
        .bind(value.locality_id)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update seller {}: {e:?}", value.id);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting seller id={id}");

        let result = sqlx::query("DELETE FROM sellers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete seller {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
