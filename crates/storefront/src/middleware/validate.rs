use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON body extractor that runs `validator` rules before the handler sees the value.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let payload = json!({
                        "error": "Invalid JSON",
                        "message": rejection.body_text(),
                    });
                    (rejection.status(), axum::Json(payload))
                })?;

        json_value.validate().map_err(|validation_errors| {
            let messages = validation_messages(&validation_errors);
            let payload = json!({
                "error": "Validation failed",
                "message": if messages.is_empty() {
                    "Validation failed".to_string()
                } else {
                    messages.join("; ")
                },
                "details": format_validation_errors_detailed(&validation_errors)
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(json_value))
    }
}

/// Flattens field errors into `field: message` strings, sorted by field name.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |error| format!("{field}: {}", describe(&field, error)))
        })
        .collect()
}

fn describe(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "email" => "Invalid email format".to_string(),
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            _ => format!("Invalid {field}"),
        })
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    json!(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{AddToCartRequest, CheckoutRequest};

    #[test]
    fn messages_name_the_offending_fields() {
        let req = AddToCartRequest {
            product_id: 0,
            qty: 0,
        };
        let errors = req.validate().unwrap_err();
        let messages = validation_messages(&errors);

        assert_eq!(
            messages,
            vec![
                "product_id: productId is required".to_string(),
                "qty: qty must be a positive integer".to_string(),
            ]
        );
    }

    #[test]
    fn malformed_email_is_reported() {
        let req = CheckoutRequest {
            name: "Ada".into(),
            email: "not-an-email".into(),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["email: email must be a valid address".to_string()]
        );
    }

    #[test]
    fn valid_request_passes() {
        let req = CheckoutRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        assert!(req.validate().is_ok());
    }
}
