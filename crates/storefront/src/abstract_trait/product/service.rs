use crate::domain::{requests::CreateProductRecordRequest, response::ProductResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    /// Inserts `products` only when the catalog is empty; returns how many were inserted.
    async fn seed_catalog(
        &self,
        products: &[CreateProductRecordRequest],
    ) -> Result<usize, ServiceError>;
}
