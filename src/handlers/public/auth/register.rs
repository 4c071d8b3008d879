use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::UserService;
use crate::validation::user::CredentialsPayload;

/// POST /auth/register - create a new account
pub async fn register_post(
    State(service): State<UserService>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Json<Value>, ApiError> {
    let username = service.register(payload).await?;
    Ok(Json(json!({ "data": { "username": username } })))
}
