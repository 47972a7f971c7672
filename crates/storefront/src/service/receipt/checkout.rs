use crate::{
    abstract_trait::receipt::{
        CheckoutServiceTrait, DynReceiptCommandRepository, DynReceiptQueryRepository,
    },
    domain::{requests::CheckoutRequest, response::ReceiptResponse},
    middleware::validation_messages,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use tracing::{error, info, warn};
use validator::Validate;

/// Turns the current cart into a receipt.
#[derive(Clone)]
pub struct CheckoutService {
    receipt_query: DynReceiptQueryRepository,
    receipt_command: DynReceiptCommandRepository,
    tracer: ServiceTracer,
}

pub struct CheckoutServiceDeps {
    pub receipt_query: DynReceiptQueryRepository,
    pub receipt_command: DynReceiptCommandRepository,
}

impl CheckoutService {
    pub fn new(deps: CheckoutServiceDeps, registry: &mut Registry) -> Self {
        let CheckoutServiceDeps {
            receipt_query,
            receipt_command,
        } = deps;

        let tracer = ServiceTracer::new("checkout-service", "checkout_service", registry);

        Self {
            receipt_query,
            receipt_command,
            tracer,
        }
    }
}

#[async_trait]
impl CheckoutServiceTrait for CheckoutService {
    async fn checkout(&self, req: &CheckoutRequest) -> Result<ReceiptResponse, ServiceError> {
        info!("💳 Checking out for {}", req.email);

        let method = Method::Post;

        let tracing_ctx = self.tracer.start_tracing(
            "checkout",
            vec![
                KeyValue::new("component", "checkout"),
                KeyValue::new("operation", "create_receipt"),
            ],
        );

        let mut problems = match req.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation_messages(&errors),
        };
        if !req.name.is_empty() && req.name.trim().is_empty() {
            problems.push("name: name is required".to_string());
        }
        if !problems.is_empty() {
            warn!("⚠️ Rejected checkout request: {}", problems.join("; "));
            self.tracer
                .complete_tracing_error(&tracing_ctx, method, "Invalid checkout request");
            return Err(ServiceError::Validation(problems));
        }

        let receipt = match self
            .receipt_command
            .create_from_cart(&req.name, &req.email)
            .await
        {
            Ok(Some(receipt)) => receipt,
            Ok(None) => {
                info!("ℹ️ Checkout attempted with an empty cart");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Cart is empty");
                return Err(ServiceError::EmptyCart);
            }
            Err(err) => {
                error!("❌ Failed to persist receipt: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to create receipt");
                return Err(ServiceError::Repo(err));
            }
        };

        match self.receipt_query.find_lines(&[receipt.receipt_id]).await {
            Ok(items) => {
                info!(
                    "✅ Receipt {} created, total {}",
                    receipt.receipt_id, receipt.total
                );
                self.tracer
                    .complete_tracing_success(&tracing_ctx, method, "Checkout completed");
                Ok(ReceiptResponse::from_parts(receipt, items))
            }
            Err(err) => {
                error!(
                    "❌ Receipt {} saved but items could not be read back: {err:?}",
                    receipt.receipt_id
                );
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    "Failed to read receipt items",
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
