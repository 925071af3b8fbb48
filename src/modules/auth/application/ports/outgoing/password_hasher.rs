use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash password: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Hashing worker failed: {0}")]
    Worker(String),
}

/// Password hashing runs off the async executor; implementations decide how.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Returns a self-describing hash string (PHC format) for storage.
    async fn hash(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` means a wrong password, `Err` means the stored hash is unusable.
    async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, HashError>;
}
