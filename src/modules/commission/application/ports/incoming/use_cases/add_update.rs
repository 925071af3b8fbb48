use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::storage::{UploadPolicy, UploadRejection, UploadedFile};

const MAX_TITLE_CHARS: usize = 200;

/// A progress post with an optional image or video.
#[derive(Debug, Clone)]
pub struct AddUpdateCommand {
    commission_id: Uuid,
    title: String,
    description: Option<String>,
    media: Option<UploadedFile>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddUpdateCommandError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Title cannot exceed 200 characters")]
    TitleTooLong,

    #[error(transparent)]
    InvalidMedia(#[from] UploadRejection),
}

impl AddUpdateCommand {
    pub fn new(
        commission_id: Uuid,
        title: Option<String>,
        description: Option<String>,
        media: Option<UploadedFile>,
    ) -> Result<Self, AddUpdateCommandError> {
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(AddUpdateCommandError::MissingTitle)?;

        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(AddUpdateCommandError::TitleTooLong);
        }

        if let Some(file) = &media {
            UploadPolicy::commission_media().check(file)?;
        }

        Ok(Self {
            commission_id,
            title,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            media,
        })
    }

    pub fn commission_id(&self) -> Uuid {
        self.commission_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn media(&self) -> Option<&UploadedFile> {
        self.media.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AddedUpdate {
    pub update_id: Uuid,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddUpdateError {
    #[error("Commission not found")]
    NotFound,

    #[error("Failed to store media: {0}")]
    StorageFailed(String),

    #[error("Failed to read commission: {0}")]
    QueryFailed(String),

    #[error("Failed to save update: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddUpdateUseCase: Send + Sync {
    async fn execute(&self, command: AddUpdateCommand) -> Result<AddedUpdate, AddUpdateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(name: &str) -> UploadedFile {
        UploadedFile {
            field_name: "image".to_string(),
            original_name: name.to_string(),
            content_type: None,
            bytes: vec![0; 8],
        }
    }

    #[test]
    fn title_is_trimmed_and_required() {
        let cmd = AddUpdateCommand::new(Uuid::new_v4(), Some("  Sketch ".into()), None, None)
            .unwrap();
        assert_eq!(cmd.title(), "Sketch");

        assert_eq!(
            AddUpdateCommand::new(Uuid::new_v4(), Some("   ".into()), None, None).unwrap_err(),
            AddUpdateCommandError::MissingTitle
        );
    }

    #[test]
    fn blank_description_is_dropped() {
        let cmd = AddUpdateCommand::new(
            Uuid::new_v4(),
            Some("Sketch".into()),
            Some("  ".into()),
            None,
        )
        .unwrap();
        assert_eq!(cmd.description(), None);
    }

    #[test]
    fn media_must_match_policy() {
        assert!(AddUpdateCommand::new(
            Uuid::new_v4(),
            Some("Timelapse".into()),
            None,
            Some(media("clip.mp4"))
        )
        .is_ok());

        assert!(matches!(
            AddUpdateCommand::new(
                Uuid::new_v4(),
                Some("Source".into()),
                None,
                Some(media("layers.psd"))
            ),
            Err(AddUpdateCommandError::InvalidMedia(UploadRejection::UnsupportedType(_)))
        ));
    }
}
