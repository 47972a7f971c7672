mod repository;
mod service;

pub use self::repository::{
    DynReceiptCommandRepository, DynReceiptQueryRepository, ReceiptCommandRepositoryTrait,
    ReceiptQueryRepositoryTrait,
};
pub use self::service::{
    CheckoutServiceTrait, DynCheckoutService, DynReceiptQueryService, ReceiptQueryServiceTrait,
};
