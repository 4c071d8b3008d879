use serde::Deserialize;

use super::require_string;
use crate::error::ApiError;

pub const USERNAME_MAX_CHARS: usize = 100;
pub const PASSWORD_MAX_CHARS: usize = 100;

/// Raw register/login body; both endpoints take the same credential pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub fn validate_credentials(payload: CredentialsPayload) -> Result<Credentials, ApiError> {
    let mut violations = Vec::new();

    let username = require_string("username", payload.username, USERNAME_MAX_CHARS, &mut violations);
    let password = require_string("password", payload.password, PASSWORD_MAX_CHARS, &mut violations);

    match (username, password) {
        (Some(username), Some(password)) => Ok(Credentials { username, password }),
        _ => Err(ApiError::validation(violations)),
    }
}
