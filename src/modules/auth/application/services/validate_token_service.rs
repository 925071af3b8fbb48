use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserInfo,
    ports::{
        incoming::use_cases::{ValidateTokenError, ValidateTokenUseCase},
        outgoing::{TokenProvider, UserQuery},
    },
};

#[derive(Clone)]
pub struct ValidateTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> ValidateTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { query, tokens }
    }
}

#[async_trait]
impl<Q> ValidateTokenUseCase for ValidateTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<UserInfo, ValidateTokenError> {
        let claims = self.tokens.verify_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected during validation");
            ValidateTokenError::InvalidToken
        })?;

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| ValidateTokenError::QueryError(e.to_string()))?
            .ok_or(ValidateTokenError::UserNotFound)?;

        Ok(user.to_user_info())
    }
}
