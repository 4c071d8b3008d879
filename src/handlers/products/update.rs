use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::ProductService;
use crate::validation::product::ProductPayload;

/// PUT /api/products/:productId - replace all mutable fields of an owned product
pub async fn update(
    State(service): State<ProductService>,
    Extension(user): Extension<AuthUser>,
    Path(product_id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Value>, ApiError> {
    let product = service.update(&user, &product_id, payload).await?;
    Ok(Json(json!({ "data": product })))
}
