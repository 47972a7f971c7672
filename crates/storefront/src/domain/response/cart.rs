use crate::{domain::response::ProductResponse, model::CartLine};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartLineResponse {
    pub id: i32,
    pub product: ProductResponse,
    pub qty: i32,
    /// `product.price * qty`, in cents.
    pub line: i64,
}

impl From<CartLine> for CartLineResponse {
    fn from(value: CartLine) -> Self {
        let line = value.line_total();
        CartLineResponse {
            id: value.cart_item_id,
            product: ProductResponse::from(value.product),
            qty: value.qty,
            line,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub total: i64,
}

impl From<Vec<CartLine>> for CartResponse {
    fn from(lines: Vec<CartLine>) -> Self {
        let items: Vec<CartLineResponse> = lines.into_iter().map(CartLineResponse::from).collect();
        let total = items.iter().map(|item| item.line).sum();

        CartResponse { items, total }
    }
}
