use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::AuthSession;

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

pub const MAX_USERNAME_LEN: usize = 50;

#[derive(Debug, Clone)]
pub struct RegisterCommand {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("Username, password, and email are required")]
    MissingFields,

    #[error("Username must not exceed 50 characters")]
    UsernameTooLong,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl RegisterCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterCommandError> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(RegisterCommandError::MissingFields);
        }

        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(RegisterCommandError::UsernameTooLong);
        }

        if !EmailAddress::is_valid(email) {
            return Err(RegisterCommandError::InvalidEmail);
        }

        Ok(Self {
            username: username.to_string(),
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Username or email already exists")]
    UserAlreadyExists {
        is_email_taken: bool,
        is_username_taken: bool,
    },

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Also used by request submission to register anonymous clients inline.
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterCommand) -> Result<AuthSession, RegisterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email() {
        let cmd = RegisterCommand::new(
            " bob ".to_string(),
            " Bob@Example.COM ".to_string(),
            "pw".to_string(),
        )
        .unwrap();

        assert_eq!(cmd.username(), "bob");
        assert_eq!(cmd.email(), "bob@example.com");
    }

    #[test]
    fn rejects_missing_fields() {
        let err = RegisterCommand::new("bob".into(), "".into(), "pw".into()).unwrap_err();
        assert_eq!(err, RegisterCommandError::MissingFields);
    }

    #[test]
    fn rejects_invalid_email() {
        let err = RegisterCommand::new("bob".into(), "not-an-email".into(), "pw".into())
            .unwrap_err();
        assert_eq!(err, RegisterCommandError::InvalidEmail);
    }

    #[test]
    fn rejects_long_username() {
        let err = RegisterCommand::new("a".repeat(51), "a@b.com".into(), "pw".into()).unwrap_err();
        assert_eq!(err, RegisterCommandError::UsernameTooLong);
    }
}
