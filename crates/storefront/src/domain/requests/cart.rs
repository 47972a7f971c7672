use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    #[serde(rename = "productId", default)]
    #[validate(range(min = 1, message = "productId is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[serde(default)]
    #[validate(range(min = 1, message = "qty must be a positive integer"))]
    #[schema(example = 2)]
    pub qty: i32,
}
