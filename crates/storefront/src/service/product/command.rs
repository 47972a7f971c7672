use crate::{
    abstract_trait::product::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::requests::CreateProductRecordRequest,
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
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    tracer: ServiceTracer,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let tracer = ServiceTracer::new(
            "product-command-service",
            "product_command_service",
            registry,
        );

        Self { command, tracer }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn seed_catalog(
        &self,
        products: &[CreateProductRecordRequest],
    ) -> Result<usize, ServiceError> {
        let tracing_ctx = self.tracer.start_tracing(
            "seed_catalog",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "seed"),
                KeyValue::new("product.count", products.len() as i64),
            ],
        );

        let existing = match self.command.count_products().await {
            Ok(count) => count,
            Err(err) => {
                error!("❌ Failed to count products: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Post,
                    "Failed to count products",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        if existing > 0 {
            info!("📦 Catalog already holds {existing} products, skipping seed");
            self.tracer
                .complete_tracing_success(&tracing_ctx, Method::Post, "Catalog already seeded");
            return Ok(0);
        }

        for product in products {
            if let Err(err) = self.command.create_product(product).await {
                error!("❌ Failed to seed product {}: {err:?}", product.name);
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Post,
                    "Failed to seed catalog",
                );
                return Err(ServiceError::Repo(err));
            }
        }

        self.tracer
            .complete_tracing_success(&tracing_ctx, Method::Post, "Catalog seeded");

        info!("🌱 Seeded {} products", products.len());
        Ok(products.len())
    }
}
