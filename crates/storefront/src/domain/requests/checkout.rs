use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckoutRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}
