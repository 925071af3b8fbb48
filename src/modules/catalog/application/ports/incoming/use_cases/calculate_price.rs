use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::{entities::OptionSelection, pricing::PriceQuote};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CalculatePriceCommand {
    service_id: Uuid,
    selections: Vec<OptionSelection>,
    is_vip: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatePriceCommandError {
    #[error("Service ID is required")]
    MissingServiceId,
}

impl CalculatePriceCommand {
    pub fn new(
        service_id: Option<Uuid>,
        selections: Vec<OptionSelection>,
        is_vip: bool,
    ) -> Result<Self, CalculatePriceCommandError> {
        let service_id = service_id.ok_or(CalculatePriceCommandError::MissingServiceId)?;

        Ok(Self {
            service_id,
            selections,
            is_vip,
        })
    }

    pub fn service_id(&self) -> Uuid {
        self.service_id
    }

    pub fn selections(&self) -> &[OptionSelection] {
        &self.selections
    }

    pub fn is_vip(&self) -> bool {
        self.is_vip
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CalculatePriceError {
    #[error("Service not found")]
    ServiceNotFound,

    #[error("Failed to load service: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait CalculatePriceUseCase: Send + Sync {
    async fn execute(&self, command: CalculatePriceCommand)
        -> Result<PriceQuote, CalculatePriceError>;
}
