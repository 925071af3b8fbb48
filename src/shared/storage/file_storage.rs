use async_trait::async_trait;
use uuid::Uuid;

/// A file received from a multipart form, fully buffered in memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Lowercased extension of the client-supplied file name, if any.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    pub fn is_video(&self) -> bool {
        if let Some(ct) = &self.content_type {
            if ct.starts_with("video/") {
                return true;
            }
        }

        matches!(self.extension().as_deref(), Some("mp4") | Some("webm"))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `{prefix}-{uuid}.{ext}`; the client name never reaches the disk.
    pub fn stored_name(&self, prefix: &str) -> String {
        match self.extension() {
            Some(ext) => format!("{}-{}.{}", prefix, Uuid::new_v4(), ext),
            None => format!("{}-{}", prefix, Uuid::new_v4()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDirectory {
    Users,
    References,
    Commissions,
}

impl UploadDirectory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadDirectory::Users => "users",
            UploadDirectory::References => "references",
            UploadDirectory::Commissions => "commissions",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to write file: {0}")]
    WriteFailed(String),
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persists the bytes and returns the public URL path (`/uploads/...`).
    async fn store(
        &self,
        directory: UploadDirectory,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: Option<&str>) -> UploadedFile {
        UploadedFile {
            field_name: "image".to_string(),
            original_name: name.to_string(),
            content_type: content_type.map(|c| c.to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file("Photo.PNG", None).extension().as_deref(), Some("png"));
        assert_eq!(file("noext", None).extension(), None);
    }

    #[test]
    fn video_detected_by_mime_or_extension() {
        assert!(file("clip.bin", Some("video/mp4")).is_video());
        assert!(file("clip.webm", Some("application/octet-stream")).is_video());
        assert!(!file("still.png", Some("image/png")).is_video());
    }

    #[test]
    fn stored_name_keeps_extension_and_prefix() {
        let name = file("ref.jpeg", None).stored_name("reference");
        assert!(name.starts_with("reference-"));
        assert!(name.ends_with(".jpeg"));
    }
}
