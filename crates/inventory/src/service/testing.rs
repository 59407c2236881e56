use crate::abstract_trait::reference::{
    DynReferenceRepository, Reference, ReferenceRepositoryTrait,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::{collections::HashSet, sync::Arc};

/// Reference lookup that only knows the ids it was built with.
pub struct KnownIds(HashSet<(Reference, i32)>);

#[async_trait]
impl ReferenceRepositoryTrait for KnownIds {
    async fn exists(&self, reference: Reference, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.0.contains(&(reference, id)))
    }
}

pub fn known(ids: &[(Reference, i32)]) -> DynReferenceRepository {
    Arc::new(KnownIds(ids.iter().copied().collect()))
}

pub fn unique(constraint: &str) -> RepositoryError {
    RepositoryError::AlreadyExists(constraint.into())
}

pub fn foreign_key(constraint: &str) -> RepositoryError {
    RepositoryError::ForeignKey(constraint.into())
}
