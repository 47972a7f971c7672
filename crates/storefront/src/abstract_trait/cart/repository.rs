use crate::model::{CartItem as CartItemModel, CartLine};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;
pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_lines(&self) -> Result<Vec<CartLine>, RepositoryError>;
}

#[async_trait]
pub trait CartCommandRepositoryTrait {
    /// Creates the line for `product_id` or overwrites its quantity.
    async fn upsert_item(&self, product_id: i32, qty: i32)
    -> Result<CartItemModel, RepositoryError>;
    /// Returns whether a line was actually removed.
    async fn delete_item(&self, id: i32) -> Result<bool, RepositoryError>;
}
