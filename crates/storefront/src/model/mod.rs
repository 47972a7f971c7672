mod cart_item;
mod product;
mod receipt;

pub use self::cart_item::{CartItem, CartLine};
pub use self::product::Product;
pub use self::receipt::{Receipt, ReceiptLine};
