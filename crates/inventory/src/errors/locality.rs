use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalityError {
    #[error("locality not found")]
    NotFound,

    #[error("locality already exists")]
    AlreadyExists,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
