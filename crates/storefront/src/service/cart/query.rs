use crate::{
    abstract_trait::cart::{CartQueryServiceTrait, DynCartQueryRepository},
    domain::response::CartResponse,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct CartQueryService {
    query: DynCartQueryRepository,
    tracer: ServiceTracer,
}

impl CartQueryService {
    pub fn new(query: DynCartQueryRepository, registry: &mut Registry) -> Self {
        let tracer = ServiceTracer::new("cart-query-service", "cart_query_service", registry);

        Self { query, tracer }
    }
}

#[async_trait]
impl CartQueryServiceTrait for CartQueryService {
    async fn get_cart(&self) -> Result<CartResponse, ServiceError> {
        info!("🛒 Reading cart");

        let tracing_ctx = self.tracer.start_tracing(
            "get_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "get"),
            ],
        );

        match self.query.find_lines().await {
            Ok(lines) => {
                let cart = CartResponse::from(lines);
                info!(
                    "✅ Cart has {} lines, total {}",
                    cart.items.len(),
                    cart.total
                );
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Cart retrieved successfully",
                );
                Ok(cart)
            }
            Err(err) => {
                error!("❌ Failed to read cart: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, "Failed to read cart");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
