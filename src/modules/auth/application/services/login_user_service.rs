use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::AuthSession,
    ports::{
        incoming::use_cases::{LoginCommand, LoginError, LoginUserUseCase},
        outgoing::{PasswordHasher, TokenProvider, TokenSubject, UserQuery},
    },
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .hasher
            .verify(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.clone(),
            is_vip: user.is_vip,
            is_operator: user.is_operator,
        };

        let token = self
            .tokens
            .generate_token(&subject)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            token,
            user: user.to_user_info(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{
        HashError, TokenClaims, TokenError, UserConflicts, UserQueryError, UserQueryResult,
    };
    use chrono::Utc;
    use uuid::Uuid;

    // ──────────────────────────────────────────────────────────
    // Test doubles
    // ──────────────────────────────────────────────────────────

    #[derive(Clone)]
    struct MockUserQuery {
        result: Result<Option<UserQueryResult>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!("Not used in login tests")
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            self.result.clone()
        }

        async fn find_conflicts(
            &self,
            _username: &str,
            _email: &str,
        ) -> Result<UserConflicts, UserQueryError> {
            unimplemented!("Not used in login tests")
        }
    }

    struct FixedHasher {
        matches: Result<bool, HashError>,
    }

    #[async_trait]
    impl PasswordHasher for FixedHasher {
        async fn hash(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!("Not used in login tests")
        }

        async fn verify(&self, _password: &str, _stored_hash: &str) -> Result<bool, HashError> {
            self.matches.clone()
        }
    }

    struct EchoTokens;

    impl TokenProvider for EchoTokens {
        fn generate_token(&self, subject: &TokenSubject) -> Result<String, TokenError> {
            Ok(format!("token-for-{}", subject.username))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("Not used in login tests")
        }
    }

    fn stored_user(is_vip: bool) -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_vip,
            is_operator: false,
            profile_picture: None,
            banner: None,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        result: Result<Option<UserQueryResult>, UserQueryError>,
        matches: Result<bool, HashError>,
    ) -> LoginUserService<MockUserQuery> {
        LoginUserService::new(
            MockUserQuery { result },
            Arc::new(FixedHasher { matches }),
            Arc::new(EchoTokens),
        )
    }

    fn command() -> LoginCommand {
        LoginCommand::new("alice".to_string(), "secret".to_string()).unwrap()
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn login_success_returns_token_and_user() {
        let user = stored_user(true);
        let svc = service(Ok(Some(user.clone())), Ok(true));

        let session = svc.execute(command()).await.unwrap();

        assert_eq!(session.token, "token-for-alice");
        assert_eq!(session.user.id, user.id);
        assert!(session.user.is_vip);
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let svc = service(Ok(None), Ok(true));

        let result = svc.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let svc = service(Ok(Some(stored_user(false))), Ok(false));

        let result = svc.execute(command()).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn hasher_failure_is_surfaced() {
        let svc = service(Ok(Some(stored_user(false))), Err(HashError::MalformedHash));

        let result = svc.execute(command()).await;

        assert!(matches!(result, Err(LoginError::PasswordVerificationFailed(_))));
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let svc = service(
            Err(UserQueryError::DatabaseError("connection reset".into())),
            Ok(true),
        );

        match svc.execute(command()).await {
            Err(LoginError::QueryError(msg)) => assert!(msg.contains("connection reset")),
            other => panic!("Expected QueryError, got {:?}", other),
        }
    }
}
