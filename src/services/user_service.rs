use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::info;

use crate::auth::{generate_jwt, Claims};
use crate::database::repository::UserRepository;
use crate::error::ApiError;
use crate::validation::user::{validate_credentials, CredentialsPayload};

/// Account use-cases backing the token-acquisition endpoints
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: UserRepository::new(pool),
        }
    }

    pub async fn register(&self, payload: CredentialsPayload) -> Result<String, ApiError> {
        let creds = validate_credentials(payload)?;

        if self.repo.username_taken(&creds.username).await? {
            return Err(ApiError::bad_request("username already registered"));
        }

        let user = self.repo.insert(&creds.username, &digest(&creds.password)).await?;
        info!(username = %user.username, "registered user");
        Ok(user.username)
    }

    pub async fn login(&self, payload: CredentialsPayload) -> Result<String, ApiError> {
        let creds = validate_credentials(payload)?;

        let user = self
            .repo
            .find_by_username(&creds.username)
            .await?
            .ok_or_else(|| ApiError::unauthorized("username or password wrong"))?;

        if digest(&creds.password) != user.auth {
            return Err(ApiError::unauthorized("username or password wrong"));
        }

        let token = generate_jwt(Claims::new(user.id, user.username)).map_err(|e| {
            tracing::error!("JWT generation failed: {}", e);
            ApiError::internal(e.to_string())
        })?;
        Ok(token)
    }
}

fn digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
