use crate::model::Product;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Receipt {
    pub receipt_id: i32,
    pub name: String,
    pub email: String,
    pub total: i64,
    pub created_at: Option<NaiveDateTime>,
}

/// A receipt item joined with its product; `price_at_checkout` is the frozen unit price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReceiptLine {
    pub receipt_item_id: i32,
    pub receipt_id: i32,
    pub qty: i32,
    pub price_at_checkout: i64,
    #[sqlx(flatten)]
    pub product: Product,
}
