use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::MAX_USERNAME_LEN;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    username: String,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Username cannot exceed 50 characters")]
    UsernameTooLong,
}

impl UpdateProfileCommand {
    /// Blank descriptions clear the field.
    pub fn new(
        user_id: UserId,
        username: Option<String>,
        description: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        let username = username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(UpdateProfileCommandError::MissingUsername)?;

        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(UpdateProfileCommandError::UsernameTooLong);
        }

        Ok(Self {
            user_id,
            username,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Username is already taken")]
    UsernameTaken,

    #[error("User not found")]
    NotFound,

    #[error("Failed to update profile: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<(), UpdateProfileError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[test]
    fn trims_fields() {
        let cmd =
            UpdateProfileCommand::new(user(), Some("  ink ".into()), Some("  hi ".into())).unwrap();
        assert_eq!(cmd.username(), "ink");
        assert_eq!(cmd.description(), Some("hi"));
    }

    #[test]
    fn blank_description_clears() {
        let cmd = UpdateProfileCommand::new(user(), Some("ink".into()), Some("   ".into())).unwrap();
        assert!(cmd.description().is_none());
    }

    #[test]
    fn username_is_required() {
        assert_eq!(
            UpdateProfileCommand::new(user(), Some("  ".into()), None),
            Err(UpdateProfileCommandError::MissingUsername)
        );
        assert_eq!(
            UpdateProfileCommand::new(user(), None, None),
            Err(UpdateProfileCommandError::MissingUsername)
        );
    }

    #[test]
    fn long_username_is_rejected() {
        assert_eq!(
            UpdateProfileCommand::new(user(), Some("x".repeat(51)), None),
            Err(UpdateProfileCommandError::UsernameTooLong)
        );
    }
}
