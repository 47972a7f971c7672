use crate::domain::{requests::CheckoutRequest, response::ReceiptResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynReceiptQueryService = Arc<dyn ReceiptQueryServiceTrait + Send + Sync>;
pub type DynCheckoutService = Arc<dyn CheckoutServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReceiptQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ReceiptResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ReceiptResponse, ServiceError>;
}

#[async_trait]
pub trait CheckoutServiceTrait {
    async fn checkout(&self, req: &CheckoutRequest) -> Result<ReceiptResponse, ServiceError>;
}
