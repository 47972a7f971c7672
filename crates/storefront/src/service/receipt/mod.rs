mod checkout;
mod query;

pub use self::checkout::{CheckoutService, CheckoutServiceDeps};
pub use self::query::ReceiptQueryService;
