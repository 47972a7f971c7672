mod cart;
mod checkout;
mod product;
mod receipt;

pub use self::cart::AddToCartRequest;
pub use self::checkout::CheckoutRequest;
pub use self::product::CreateProductRecordRequest;
pub use self::receipt::{CreateReceiptItemRecordRequest, CreateReceiptRecordRequest};
