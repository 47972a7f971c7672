use crate::{
    abstract_trait::product::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::response::ProductResponse,
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
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracer: ServiceTracer,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let tracer = ServiceTracer::new("product-query-service", "product_query_service", registry);

        Self { query, tracer }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Listing catalog");

        let tracing_ctx = self.tracer.start_tracing(
            "find_all_products",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let products = match self.query.find_all().await {
            Ok(products) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Products retrieved successfully",
                );
                products
            }
            Err(err) => {
                error!("❌ Failed to fetch products: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    "Failed to fetch products",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
