use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    #[error("Could not build message: {0}")]
    Message(String),

    #[error("Transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Delivers one HTML message to a single recipient.
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError>;
}
