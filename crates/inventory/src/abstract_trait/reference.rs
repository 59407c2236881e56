use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

/// Tables other records point at by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    Locality,
    Seller,
    Warehouse,
    ProductType,
    Section,
    Product,
    ProductRecord,
    ProductBatch,
    Employee,
    Buyer,
    OrderStatus,
}

impl Reference {
    pub fn table(self) -> &'static str {
        match self {
            Reference::Locality => "localities",
            Reference::Seller => "sellers",
            Reference::Warehouse => "warehouses",
            Reference::ProductType => "product_types",
            Reference::Section => "sections",
            Reference::Product => "products",
            Reference::ProductRecord => "product_records",
            Reference::ProductBatch => "product_batches",
            Reference::Employee => "employees",
            Reference::Buyer => "buyers",
            Reference::OrderStatus => "order_status",
        }
    }
}

pub type DynReferenceRepository = Arc<dyn ReferenceRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ReferenceRepositoryTrait {
    async fn exists(&self, reference: Reference, id: i32) -> Result<bool, RepositoryError>;
}
