mod api;
mod cart;
mod product;
mod receipt;

pub use self::api::{DeleteResponse, HealthResponse};
pub use self::cart::{CartLineResponse, CartResponse};
pub use self::product::ProductResponse;
pub use self::receipt::{CheckoutResponse, ReceiptItemResponse, ReceiptResponse};
