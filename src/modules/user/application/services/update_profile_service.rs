use async_trait::async_trait;

use crate::user::application::ports::{
    incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
    outgoing::{ProfileRepository, ProfileRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProfileCommand) -> Result<(), UpdateProfileError> {
        self.repository
            .update_details(command.user_id(), command.username(), command.description())
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::UsernameTaken => UpdateProfileError::UsernameTaken,
                ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg) => {
                    UpdateProfileError::RepositoryError(msg)
                }
            })
    }
}
