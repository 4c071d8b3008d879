use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::ProductService;

/// GET /api/products/:productId - fetch a single owned product
pub async fn get(
    State(service): State<ProductService>,
    Extension(user): Extension<AuthUser>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let product = service.get(&user, &product_id).await?;
    Ok(Json(json!({ "data": product })))
}
