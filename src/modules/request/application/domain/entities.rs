use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::pricing::{count_based_estimate, Complexity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    Requested,
    Accepted,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Requested => "Requested",
            RequestStatus::Accepted => "Accepted",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown request status '{0}'")]
pub struct UnknownRequestStatus(pub String);

impl FromStr for RequestStatus {
    type Err = UnknownRequestStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Requested" => Ok(RequestStatus::Requested),
            "Accepted" => Ok(RequestStatus::Accepted),
            other => Err(UnknownRequestStatus(other.to_string())),
        }
    }
}

/// How many characters, alternatives and poses a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RequestCounts {
    pub character_count: i32,
    pub alternative_count: i32,
    pub pose_count: i32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCounts {
    #[error("At least one character is required")]
    NoCharacters,

    #[error("Alternative count cannot be negative")]
    NegativeAlternatives,

    #[error("At least one pose is required")]
    NoPoses,
}

impl Default for RequestCounts {
    fn default() -> Self {
        Self {
            character_count: 1,
            alternative_count: 0,
            pose_count: 1,
        }
    }
}

impl RequestCounts {
    pub fn new(characters: i32, alternatives: i32, poses: i32) -> Result<Self, InvalidCounts> {
        if characters < 1 {
            return Err(InvalidCounts::NoCharacters);
        }
        if alternatives < 0 {
            return Err(InvalidCounts::NegativeAlternatives);
        }
        if poses < 1 {
            return Err(InvalidCounts::NoPoses);
        }

        Ok(Self {
            character_count: characters,
            alternative_count: alternatives,
            pose_count: poses,
        })
    }

    pub fn estimated_total(&self) -> f64 {
        count_based_estimate(self.character_count, self.alternative_count, self.pose_count)
    }

    pub fn estimated_complexity(&self) -> Complexity {
        Complexity::from_total(self.estimated_total())
    }
}

/// Row of the caller's own request list.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RequestSummary {
    pub id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub description: String,
    #[serde(flatten)]
    pub counts: RequestCounts,
    pub is_nsfw: bool,
    pub total_price: Option<f64>,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RequestDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub description: String,
    #[serde(flatten)]
    pub counts: RequestCounts,
    pub references: Vec<String>,
    pub is_nsfw: bool,
    pub total_price: Option<f64>,
    /// Tier fixed when the request was priced.
    #[serde(skip)]
    pub stored_complexity: Option<Complexity>,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
}

impl RequestDetail {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user_id == user.value()
    }

    /// The tier recorded at submission. Rows without one fall back to their
    /// stored price, then to the count-based estimate.
    pub fn complexity(&self) -> Complexity {
        if let Some(complexity) = self.stored_complexity {
            return complexity;
        }

        match self.total_price {
            Some(total) => Complexity::from_total(total),
            None => self.counts.estimated_complexity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts_match_a_single_figure() {
        let counts = RequestCounts::default();
        assert_eq!(counts, RequestCounts::new(1, 0, 1).unwrap());
        assert_eq!(counts.estimated_total(), 35.0);
        assert_eq!(counts.estimated_complexity(), Complexity::Low);
    }

    #[test]
    fn counts_reject_out_of_range_values() {
        assert_eq!(RequestCounts::new(0, 0, 1), Err(InvalidCounts::NoCharacters));
        assert_eq!(
            RequestCounts::new(1, -1, 1),
            Err(InvalidCounts::NegativeAlternatives)
        );
        assert_eq!(RequestCounts::new(1, 0, 0), Err(InvalidCounts::NoPoses));
    }

    #[test]
    fn estimate_follows_count_rules() {
        // 35 + (3 + 2*2) + 3*2 + (5 + 1) = 61
        let counts = RequestCounts::new(3, 2, 2).unwrap();
        assert_eq!(counts.estimated_total(), 61.0);
        assert_eq!(counts.estimated_complexity(), Complexity::Mid);
    }

    #[test]
    fn status_round_trips_through_str() {
        assert_eq!("Requested".parse(), Ok(RequestStatus::Requested));
        assert_eq!(RequestStatus::Accepted.to_string(), "Accepted");
        assert!("Working".parse::<RequestStatus>().is_err());
    }
}
