use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::services::ProductService;
use crate::validation::product::SearchParams;

/// GET /api/products - paginated, filterable search over owned products
pub async fn search(
    State(service): State<ProductService>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let result = service.search(&user, params).await?;
    Ok(Json(json!({ "data": result.data, "paging": result.paging })))
}
