use async_trait::async_trait;
use uuid::Uuid;

use crate::commission::application::domain::entities::Tag;

const MAX_TAG_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct TagCommissionCommand {
    commission_id: Uuid,
    name: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TagCommissionCommandError {
    #[error("Tag name is required")]
    EmptyName,

    #[error("Tag name cannot exceed 50 characters")]
    NameTooLong,
}

impl TagCommissionCommand {
    pub fn new(commission_id: Uuid, name: &str) -> Result<Self, TagCommissionCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(TagCommissionCommandError::EmptyName);
        }
        if name.chars().count() > MAX_TAG_CHARS {
            return Err(TagCommissionCommandError::NameTooLong);
        }

        Ok(Self {
            commission_id,
            name: name.to_string(),
        })
    }

    pub fn commission_id(&self) -> Uuid {
        self.commission_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagCommissionError {
    #[error("Commission not found")]
    NotFound,

    #[error("Failed to tag commission: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TagCommissionUseCase: Send + Sync {
    async fn execute(&self, command: TagCommissionCommand) -> Result<Tag, TagCommissionError>;
}
