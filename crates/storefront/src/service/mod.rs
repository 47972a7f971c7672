mod cart;
mod product;
mod receipt;

pub use self::cart::{CartCommandService, CartCommandServiceDeps, CartQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::receipt::{CheckoutService, CheckoutServiceDeps, ReceiptQueryService};
