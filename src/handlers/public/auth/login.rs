use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::UserService;
use crate::validation::user::CredentialsPayload;

/// POST /auth/login - exchange credentials for a bearer token
pub async fn login_post(
    State(service): State<UserService>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Json<Value>, ApiError> {
    let token = service.login(payload).await?;
    Ok(Json(json!({ "data": { "token": token } })))
}
