use crate::{
    domain::response::ProductResponse,
    model::{Receipt as ReceiptModel, ReceiptLine},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReceiptItemResponse {
    pub product: ProductResponse,
    pub qty: i32,
    /// Unit price frozen at checkout, in cents.
    pub price: i64,
}

impl From<ReceiptLine> for ReceiptItemResponse {
    fn from(value: ReceiptLine) -> Self {
        ReceiptItemResponse {
            product: ProductResponse::from(value.product),
            qty: value.qty,
            price: value.price_at_checkout,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ReceiptResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub total: i64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    pub items: Vec<ReceiptItemResponse>,
}

impl ReceiptResponse {
    /// Pairs a receipt with its own lines; lines of other receipts are ignored.
    pub fn from_parts(receipt: ReceiptModel, lines: Vec<ReceiptLine>) -> Self {
        let items = lines
            .into_iter()
            .filter(|line| line.receipt_id == receipt.receipt_id)
            .map(ReceiptItemResponse::from)
            .collect();

        ReceiptResponse {
            id: receipt.receipt_id,
            name: receipt.name,
            email: receipt.email,
            total: receipt.total,
            created_at: receipt.created_at.map(|dt| dt.to_string()),
            items,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CheckoutResponse {
    pub receipt: ReceiptResponse,
}
