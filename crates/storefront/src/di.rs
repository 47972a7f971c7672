use crate::{
    abstract_trait::{
        cart::{DynCartCommandService, DynCartQueryService},
        product::{DynProductCommandService, DynProductQueryService},
        receipt::{DynCheckoutService, DynReceiptQueryService},
    },
    repository::{CartRepository, ProductRepository, ReceiptRepository},
    service::{
        CartCommandService, CartCommandServiceDeps, CartQueryService, CheckoutService,
        CheckoutServiceDeps, ProductCommandService, ProductQueryService, ReceiptQueryService,
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub cart_query: DynCartQueryService,
    pub cart_command: DynCartCommandService,
    pub receipt_query: DynReceiptQueryService,
    pub checkout: DynCheckoutService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("cart_query", &"DynCartQueryService")
            .field("cart_command", &"DynCartCommandService")
            .field("receipt_query", &"DynReceiptQueryService")
            .field("checkout", &"DynCheckoutService")
            .finish()
    }
}

/// Repositories the services are built on.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub product: ProductRepository,
    pub cart: CartRepository,
    pub receipt: ReceiptRepository,
}

impl DependenciesInjectDeps {
    pub fn from_pool(pool: ConnectionPool) -> Self {
        Self {
            product: ProductRepository::new(pool.clone()),
            cart: CartRepository::new(pool.clone()),
            receipt: ReceiptRepository::new(pool),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            product,
            cart,
            receipt,
        } = deps;

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product.query.clone(), registry));

        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product.command, registry));

        let cart_query: DynCartQueryService =
            Arc::new(CartQueryService::new(cart.query, registry));

        let cart_command: DynCartCommandService = Arc::new(CartCommandService::new(
            CartCommandServiceDeps {
                product_query: product.query,
                command: cart.command,
            },
            registry,
        ));

        let receipt_query: DynReceiptQueryService =
            Arc::new(ReceiptQueryService::new(receipt.query.clone(), registry));

        let checkout: DynCheckoutService = Arc::new(CheckoutService::new(
            CheckoutServiceDeps {
                receipt_query: receipt.query,
                receipt_command: receipt.command,
            },
            registry,
        ));

        Self {
            product_query,
            product_command,
            cart_query,
            cart_command,
            receipt_query,
            checkout,
        }
    }
}
