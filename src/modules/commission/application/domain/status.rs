use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Stage of an accepted commission. Variants are declared in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum CommissionStatus {
    Accepted,
    Working,
    Waiting,
    Finished,
}

impl CommissionStatus {
    pub const ALL: [CommissionStatus; 4] = [
        CommissionStatus::Accepted,
        CommissionStatus::Working,
        CommissionStatus::Waiting,
        CommissionStatus::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionStatus::Accepted => "Accepted",
            CommissionStatus::Working => "Working",
            CommissionStatus::Waiting => "Waiting",
            CommissionStatus::Finished => "Finished",
        }
    }

    /// Status only ever moves forward along the pipeline.
    pub fn can_transition_to(&self, next: CommissionStatus) -> bool {
        next > *self
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, CommissionStatus::Finished)
    }
}

impl fmt::Display for CommissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown commission status '{0}'")]
pub struct UnknownCommissionStatus(pub String);

impl FromStr for CommissionStatus {
    type Err = UnknownCommissionStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommissionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownCommissionStatus(s.to_string()))
    }
}
