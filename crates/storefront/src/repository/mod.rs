mod cart;
mod product;
mod receipt;

pub use self::cart::CartRepository;
pub use self::product::ProductRepository;
pub use self::receipt::ReceiptRepository;
