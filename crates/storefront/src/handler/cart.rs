use crate::{
    abstract_trait::cart::{DynCartCommandService, DynCartQueryService},
    domain::{
        requests::AddToCartRequest,
        response::{CartLineResponse, CartResponse, DeleteResponse},
    },
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "Cart",
    responses(
        (status = 200, description = "Cart lines with their totals", body = CartResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    tag = "Cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Line created or quantity replaced", body = CartLineResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.upsert_item(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    tag = "Cart",
    params(("id" = i32, Path, description = "Cart line id")),
    responses(
        (status = 200, description = "Line removed, or was already absent", body = DeleteResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn remove_from_cart(
    Extension(service): Extension<DynCartCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.remove_item(id).await?;
    Ok((StatusCode::OK, Json(DeleteResponse { success: true })))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart", post(add_to_cart))
        .route("/api/cart/{id}", delete(remove_from_cart))
        .layer(Extension(app_state.di_container.cart_query.clone()))
        .layer(Extension(app_state.di_container.cart_command.clone()))
}
