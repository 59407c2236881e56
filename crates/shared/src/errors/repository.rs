use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[source] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists(db.constraint().unwrap_or_default().to_string())
            }
            SqlxError::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::ForeignKey(db.constraint().unwrap_or_default().to_string())
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}

impl RepositoryError {
    /// Constraint name carried by a unique violation, if this is one.
    pub fn unique_constraint(&self) -> Option<&str> {
        match self {
            RepositoryError::AlreadyExists(constraint) => Some(constraint),
            _ => None,
        }
    }

    /// Constraint name carried by a foreign key violation, if this is one.
    pub fn foreign_key(&self) -> Option<&str> {
        match self {
            RepositoryError::ForeignKey(constraint) => Some(constraint),
            _ => None,
        }
    }
}
