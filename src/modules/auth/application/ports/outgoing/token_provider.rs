use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user_repository::UserResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Session token claims. Everything a handler needs to authorise a call
/// travels in the token so no lookup is required per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub username: String,
    pub is_vip: bool,
    #[serde(default)]
    pub is_operator: bool,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

/// Identity a token is issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSubject {
    pub user_id: Uuid,
    pub username: String,
    pub is_vip: bool,
    pub is_operator: bool,
}

impl From<&UserResult> for TokenSubject {
    fn from(user: &UserResult) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            is_vip: user.is_vip,
            is_operator: user.is_operator,
        }
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_token(&self, subject: &TokenSubject) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
