use super::file_storage::{UploadDirectory, UploadedFile};

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_files: usize,
    pub allowed_extensions: &'static [&'static str],
    pub directory: UploadDirectory,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadRejection {
    #[error("File type .{0} is not allowed")]
    UnsupportedType(String),

    #[error("File exceeds the {limit_mb}MB limit")]
    TooLarge { limit_mb: usize },

    #[error("At most {0} files may be uploaded")]
    TooManyFiles(usize),
}

impl UploadPolicy {
    pub const IMAGE_EXTENSIONS: &'static [&'static str] = &["jpg", "jpeg", "png", "gif"];
    pub const MEDIA_EXTENSIONS: &'static [&'static str] =
        &["jpg", "jpeg", "png", "gif", "mp4", "webm"];

    /// Profile pictures and banners.
    pub fn profile_image() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024,
            max_files: 1,
            allowed_extensions: Self::IMAGE_EXTENSIONS,
            directory: UploadDirectory::Users,
        }
    }

    /// Reference images attached to a commission request.
    pub fn reference_image() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
            max_files: 10,
            allowed_extensions: Self::IMAGE_EXTENSIONS,
            directory: UploadDirectory::References,
        }
    }

    /// Progress images or videos posted on a commission.
    pub fn commission_media() -> Self {
        Self {
            max_file_size_bytes: 20 * 1024 * 1024,
            max_files: 1,
            allowed_extensions: Self::MEDIA_EXTENSIONS,
            directory: UploadDirectory::Commissions,
        }
    }

    pub fn check(&self, file: &UploadedFile) -> Result<(), UploadRejection> {
        let ext = file.extension().unwrap_or_default();
        if !self.allowed_extensions.contains(&ext.as_str()) {
            return Err(UploadRejection::UnsupportedType(ext));
        }

        if file.len() > self.max_file_size_bytes {
            return Err(UploadRejection::TooLarge {
                limit_mb: self.max_file_size_bytes / (1024 * 1024),
            });
        }

        Ok(())
    }

    pub fn check_all(&self, files: &[UploadedFile]) -> Result<(), UploadRejection> {
        if files.len() > self.max_files {
            return Err(UploadRejection::TooManyFiles(self.max_files));
        }

        files.iter().try_for_each(|f| self.check(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, size: usize) -> UploadedFile {
        UploadedFile {
            field_name: "file".to_string(),
            original_name: name.to_string(),
            content_type: None,
            bytes: vec![0; size],
        }
    }

    #[test]
    fn profile_image_rejects_video() {
        let policy = UploadPolicy::profile_image();
        assert_eq!(
            policy.check(&upload("clip.mp4", 10)),
            Err(UploadRejection::UnsupportedType("mp4".to_string()))
        );
    }

    #[test]
    fn commission_media_accepts_video() {
        assert!(UploadPolicy::commission_media()
            .check(&upload("clip.webm", 10))
            .is_ok());
    }

    #[test]
    fn oversized_file_is_rejected() {
        let policy = UploadPolicy::profile_image();
        let result = policy.check(&upload("big.png", 5 * 1024 * 1024 + 1));
        assert_eq!(result, Err(UploadRejection::TooLarge { limit_mb: 5 }));
    }

    #[test]
    fn reference_batch_is_capped_at_ten() {
        let policy = UploadPolicy::reference_image();
        let files: Vec<_> = (0..11).map(|i| upload(&format!("{}.png", i), 1)).collect();
        assert_eq!(policy.check_all(&files), Err(UploadRejection::TooManyFiles(10)));
    }
}
