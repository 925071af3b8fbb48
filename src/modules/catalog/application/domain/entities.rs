use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A priced option of a service, e.g. "Additional characters".
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceOption {
    pub id: Uuid,
    #[schema(example = "Additional Characters")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "+3+([value]*2)")]
    pub price_formula: String,
    pub min_value: i32,
    pub max_value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Service {
    pub id: Uuid,
    #[schema(example = "Character Illustration")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 35.0)]
    pub base_price: f64,
    pub options: Vec<ServiceOption>,
}

/// One client choice for an option.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, ToSchema)]
pub struct OptionSelection {
    pub option_id: Uuid,
    #[schema(example = 2)]
    pub value: f64,
}
