use crate::domain::{
    requests::AddToCartRequest,
    response::{CartLineResponse, CartResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCartQueryService = Arc<dyn CartQueryServiceTrait + Send + Sync>;
pub type DynCartCommandService = Arc<dyn CartCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryServiceTrait {
    async fn get_cart(&self) -> Result<CartResponse, ServiceError>;
}

#[async_trait]
pub trait CartCommandServiceTrait {
    async fn upsert_item(&self, req: &AddToCartRequest) -> Result<CartLineResponse, ServiceError>;
    async fn remove_item(&self, id: i32) -> Result<(), ServiceError>;
}
