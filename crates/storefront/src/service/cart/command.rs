use crate::{
    abstract_trait::{
        cart::{CartCommandServiceTrait, DynCartCommandRepository},
        product::DynProductQueryRepository,
    },
    domain::{requests::AddToCartRequest, response::CartLineResponse},
    middleware::validation_messages,
    model::CartLine,
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

#[derive(Clone)]
pub struct CartCommandService {
    product_query: DynProductQueryRepository,
    command: DynCartCommandRepository,
    tracer: ServiceTracer,
}

pub struct CartCommandServiceDeps {
    pub product_query: DynProductQueryRepository,
    pub command: DynCartCommandRepository,
}

impl CartCommandService {
    pub fn new(deps: CartCommandServiceDeps, registry: &mut Registry) -> Self {
        let CartCommandServiceDeps {
            product_query,
            command,
        } = deps;

        let tracer = ServiceTracer::new("cart-command-service", "cart_command_service", registry);

        Self {
            product_query,
            command,
            tracer,
        }
    }
}

#[async_trait]
impl CartCommandServiceTrait for CartCommandService {
    async fn upsert_item(&self, req: &AddToCartRequest) -> Result<CartLineResponse, ServiceError> {
        info!(
            "➕ Setting cart quantity product_id={} qty={}",
            req.product_id, req.qty
        );

        let method = Method::Post;

        let tracing_ctx = self.tracer.start_tracing(
            "upsert_cart_item",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "upsert"),
                KeyValue::new("product.id", req.product_id as i64),
                KeyValue::new("cart.qty", req.qty as i64),
            ],
        );

        if let Err(errors) = req.validate() {
            warn!("⚠️ Rejected cart request: {errors}");
            self.tracer
                .complete_tracing_error(&tracing_ctx, method, "Invalid cart request");
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        let product = match self.product_query.find_by_id(req.product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                info!("ℹ️ Product {} does not exist", req.product_id);
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Product not found");
                return Err(ServiceError::NotFound("Product not found".into()));
            }
            Err(err) => {
                error!("❌ Failed to look up product {}: {err:?}", req.product_id);
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to look up product");
                return Err(ServiceError::Repo(err));
            }
        };

        let item = match self.command.upsert_item(product.product_id, req.qty).await {
            Ok(item) => item,
            Err(err) => {
                error!("❌ Failed to upsert cart line: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to update cart");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracer
            .complete_tracing_success(&tracing_ctx, method, "Cart updated successfully");

        Ok(CartLineResponse::from(CartLine {
            cart_item_id: item.cart_item_id,
            qty: item.qty,
            product,
        }))
    }

    async fn remove_item(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Removing cart line id={id}");

        let method = Method::Delete;

        let tracing_ctx = self.tracer.start_tracing(
            "remove_cart_item",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("cart_item.id", id as i64),
            ],
        );

        match self.command.delete_item(id).await {
            Ok(removed) => {
                if !removed {
                    info!("ℹ️ Cart line {id} was already gone");
                }
                self.tracer
                    .complete_tracing_success(&tracing_ctx, method, "Cart line removed");
                Ok(())
            }
            Err(err) => {
                error!("❌ Failed to remove cart line {id}: {err:?}");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, "Failed to remove cart line");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
