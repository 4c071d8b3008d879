use axum::extract::State;
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::ProductService;
use crate::validation::product::ProductPayload;

/// POST /api/products - create a product owned by the authenticated user
pub async fn create(
    State(service): State<ProductService>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Value>, ApiError> {
    let product = service.create(&user, payload).await?;
    Ok(Json(json!({ "data": product })))
}
