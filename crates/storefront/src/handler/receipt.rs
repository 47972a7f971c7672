use crate::{
    abstract_trait::receipt::DynReceiptQueryService, domain::response::ReceiptResponse,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/receipts",
    tag = "Receipt",
    responses(
        (status = 200, description = "All receipts, newest first", body = Vec<ReceiptResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_receipts(
    Extension(service): Extension<DynReceiptQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/receipts/{id}",
    tag = "Receipt",
    params(("id" = i32, Path, description = "Receipt id")),
    responses(
        (status = 200, description = "Receipt with its items", body = ReceiptResponse),
        (status = 404, description = "Receipt not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_receipt(
    Extension(service): Extension<DynReceiptQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn receipt_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/receipts", get(get_receipts))
        .route("/api/receipts/{id}", get(get_receipt))
        .layer(Extension(app_state.di_container.receipt_query.clone()))
}
