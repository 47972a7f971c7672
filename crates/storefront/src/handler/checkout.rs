use crate::{
    abstract_trait::receipt::DynCheckoutService,
    domain::{requests::CheckoutRequest, response::CheckoutResponse},
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/checkout",
    tag = "Checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Receipt created and cart emptied", body = CheckoutResponse),
        (status = 400, description = "Invalid request or empty cart"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn checkout(
    Extension(service): Extension<DynCheckoutService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let receipt = service.checkout(&body).await?;
    Ok((StatusCode::OK, Json(CheckoutResponse { receipt })))
}

pub fn checkout_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/checkout", post(checkout))
        .layer(Extension(app_state.di_container.checkout.clone()))
}
