use async_trait::async_trait;

use crate::commission::application::{
    domain::entities::Tag,
    ports::{
        incoming::use_cases::{TagCommissionCommand, TagCommissionError, TagCommissionUseCase},
        outgoing::{CommissionRepository, CommissionRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct TagCommissionService<R>
where
    R: CommissionRepository + Send + Sync,
{
    repository: R,
}

impl<R> TagCommissionService<R>
where
    R: CommissionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TagCommissionUseCase for TagCommissionService<R>
where
    R: CommissionRepository + Send + Sync,
{
    async fn execute(&self, command: TagCommissionCommand) -> Result<Tag, TagCommissionError> {
        self.repository
            .attach_tag(command.commission_id(), command.name())
            .await
            .map_err(|e| match e {
                CommissionRepositoryError::NotFound => TagCommissionError::NotFound,
                CommissionRepositoryError::DatabaseError(msg) => {
                    TagCommissionError::RepositoryError(msg)
                }
            })
    }
}
