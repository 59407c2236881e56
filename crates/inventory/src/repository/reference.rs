use crate::abstract_trait::reference::{Reference, ReferenceRepositoryTrait};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

/// Existence lookups shared by every service that stores a foreign id.
#[derive(Clone)]
pub struct ReferenceRepository {
    db: ConnectionPool,
}

impl ReferenceRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReferenceRepositoryTrait for ReferenceRepository {
    async fn exists(&self, reference: Reference, id: i32) -> Result<bool, RepositoryError> {
        // table names come from a closed enum, never from input
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)",
            reference.table()
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to look up {} {id}: {e:?}", reference.table());
                RepositoryError::from(e)
            })
    }
}
