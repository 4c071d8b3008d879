use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::ProductService;

/// DELETE /api/products/:productId - hard-delete an owned product
pub async fn remove(
    State(service): State<ProductService>,
    Extension(user): Extension<AuthUser>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    service.remove(&user, &product_id).await?;
    Ok(Json(json!({ "data": "OK" })))
}
