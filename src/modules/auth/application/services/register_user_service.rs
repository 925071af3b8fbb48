use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::AuthSession,
    ports::{
        incoming::use_cases::{RegisterCommand, RegisterError, RegisterUserUseCase},
        outgoing::{
            CreateUserData, PasswordHasher, TokenProvider, TokenSubject, UserConflicts, UserQuery,
            UserRepository, UserRepositoryError,
        },
    },
};

#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            tokens,
        }
    }

    fn already_exists(conflicts: UserConflicts) -> RegisterError {
        RegisterError::UserAlreadyExists {
            is_email_taken: conflicts.is_email_taken,
            is_username_taken: conflicts.is_username_taken,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterCommand) -> Result<AuthSession, RegisterError> {
        let conflicts = self
            .query
            .find_conflicts(command.username(), command.email())
            .await
            .map_err(|e| RegisterError::RepositoryError(e.to_string()))?;

        if conflicts.any() {
            return Err(Self::already_exists(conflicts));
        }

        let password_hash = self
            .hasher
            .hash(command.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            username: command.username().to_string(),
            email: command.email().to_string(),
            password_hash,
        };

        let user = match self.repository.create_user(data).await {
            Ok(user) => user,
            // Lost a race with a concurrent registration
            Err(UserRepositoryError::UserAlreadyExists) => {
                let conflicts = self
                    .query
                    .find_conflicts(command.username(), command.email())
                    .await
                    .unwrap_or(UserConflicts {
                        is_email_taken: true,
                        is_username_taken: true,
                    });
                return Err(Self::already_exists(conflicts));
            }
            Err(e) => return Err(RegisterError::RepositoryError(e.to_string())),
        };

        let token = self
            .tokens
            .generate_token(&TokenSubject::from(&user))
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthSession {
            token,
            user: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{
        HashError, TokenClaims, TokenError, UserQueryError, UserQueryResult, UserResult,
    };
    use std::sync::Mutex;
    use uuid::Uuid;

    // ──────────────────────────────────────────────────────────
    // Test doubles
    // ──────────────────────────────────────────────────────────

    struct ConflictQuery {
        conflicts: UserConflicts,
    }

    #[async_trait]
    impl UserQuery for ConflictQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!()
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!()
        }

        async fn find_conflicts(
            &self,
            _username: &str,
            _email: &str,
        ) -> Result<UserConflicts, UserQueryError> {
            Ok(self.conflicts)
        }
    }

    #[derive(Default)]
    struct RecordingRepository {
        fail_with: Option<UserRepositoryError>,
        created: Mutex<Vec<CreateUserData>>,
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn create_user(
            &self,
            data: CreateUserData,
        ) -> Result<UserResult, UserRepositoryError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.created.lock().unwrap().push(data.clone());
            Ok(UserResult {
                id: Uuid::new_v4(),
                username: data.username,
                email: data.email,
                is_vip: false,
                is_operator: false,
            })
        }
    }

    struct PrefixHasher;

    #[async_trait]
    impl PasswordHasher for PrefixHasher {
        async fn hash(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{}", password))
        }

        async fn verify(&self, _password: &str, _stored_hash: &str) -> Result<bool, HashError> {
            unimplemented!()
        }
    }

    struct StaticTokens;

    impl TokenProvider for StaticTokens {
        fn generate_token(&self, _subject: &TokenSubject) -> Result<String, TokenError> {
            Ok("issued-token".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!()
        }
    }

    fn command() -> RegisterCommand {
        RegisterCommand::new(
            "carol".to_string(),
            "carol@example.com".to_string(),
            "pw".to_string(),
        )
        .unwrap()
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn registers_with_hashed_password() {
        let repo = RecordingRepository::default();
        let svc = RegisterUserService::new(
            ConflictQuery {
                conflicts: UserConflicts::default(),
            },
            repo,
            Arc::new(PrefixHasher),
            Arc::new(StaticTokens),
        );

        let session = svc.execute(command()).await.unwrap();

        assert_eq!(session.token, "issued-token");
        assert_eq!(session.user.username, "carol");
        assert!(!session.user.is_vip);

        let created = svc.repository.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].password_hash, "hashed:pw");
    }

    #[tokio::test]
    async fn conflicts_are_reported_per_field() {
        let svc = RegisterUserService::new(
            ConflictQuery {
                conflicts: UserConflicts {
                    is_email_taken: true,
                    is_username_taken: false,
                },
            },
            RecordingRepository::default(),
            Arc::new(PrefixHasher),
            Arc::new(StaticTokens),
        );

        let result = svc.execute(command()).await;

        match result {
            Err(RegisterError::UserAlreadyExists {
                is_email_taken,
                is_username_taken,
            }) => {
                assert!(is_email_taken);
                assert!(!is_username_taken);
            }
            other => panic!("Expected UserAlreadyExists, got {:?}", other),
        }
        assert!(svc.repository.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repository_error_is_mapped() {
        let svc = RegisterUserService::new(
            ConflictQuery {
                conflicts: UserConflicts::default(),
            },
            RecordingRepository {
                fail_with: Some(UserRepositoryError::DatabaseError("disk full".into())),
                ..Default::default()
            },
            Arc::new(PrefixHasher),
            Arc::new(StaticTokens),
        );

        assert!(matches!(
            svc.execute(command()).await,
            Err(RegisterError::RepositoryError(_))
        ));
    }
}
