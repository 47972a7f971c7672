use crate::model::{Receipt as ReceiptModel, ReceiptLine};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynReceiptQueryRepository = Arc<dyn ReceiptQueryRepositoryTrait + Send + Sync>;
pub type DynReceiptCommandRepository = Arc<dyn ReceiptCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ReceiptQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ReceiptModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ReceiptModel>, RepositoryError>;
    async fn find_lines(&self, receipt_ids: &[i32]) -> Result<Vec<ReceiptLine>, RepositoryError>;
}

#[async_trait]
pub trait ReceiptCommandRepositoryTrait {
    /// Snapshots the locked cart into a receipt and removes the consumed lines, all or nothing.
    ///
    /// Returns `None` without writing anything when the cart is empty.
    async fn create_from_cart(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Option<ReceiptModel>, RepositoryError>;
}
