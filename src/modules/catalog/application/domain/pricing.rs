use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::entities::{OptionSelection, ServiceOption};
use super::formula::PriceFormula;

/// Price-derived workload label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Complexity {
    Low,
    Mid,
    High,
    #[serde(rename = "Ultra High")]
    UltraHigh,
    #[serde(rename = "Sistine Chapel")]
    SistineChapel,
}

impl Complexity {
    pub fn from_total(total: f64) -> Self {
        if total > 150.0 {
            Complexity::SistineChapel
        } else if total > 100.0 {
            Complexity::UltraHigh
        } else if total > 70.0 {
            Complexity::High
        } else if total > 45.0 {
            Complexity::Mid
        } else {
            Complexity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Mid => "Mid",
            Complexity::High => "High",
            Complexity::UltraHigh => "Ultra High",
            Complexity::SistineChapel => "Sistine Chapel",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown complexity '{0}'")]
pub struct UnknownComplexity(pub String);

impl FromStr for Complexity {
    type Err = UnknownComplexity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Complexity::Low),
            "Mid" => Ok(Complexity::Mid),
            "High" => Ok(Complexity::High),
            "Ultra High" => Ok(Complexity::UltraHigh),
            "Sistine Chapel" => Ok(Complexity::SistineChapel),
            other => Err(UnknownComplexity(other.to_string())),
        }
    }
}

pub const VIP_DISCOUNT_RATE: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PriceQuote {
    pub base_price: f64,
    pub total_price: f64,
    pub discount: f64,
    pub complexity: Complexity,
}

impl PriceQuote {
    /// Tier comes from the pre-discount total; the VIP discount never changes it.
    pub fn from_total(base_price: f64, total: f64, is_vip: bool) -> Self {
        let complexity = Complexity::from_total(total);
        let discount = if is_vip { total * VIP_DISCOUNT_RATE } else { 0.0 };

        Self {
            base_price,
            total_price: total - discount,
            discount,
            complexity,
        }
    }
}

/// Table-driven pricing over a service's option formulas.
pub struct PriceCalculator<'a> {
    base_price: f64,
    options: &'a [ServiceOption],
}

impl<'a> PriceCalculator<'a> {
    pub fn new(base_price: f64, options: &'a [ServiceOption]) -> Self {
        Self {
            base_price,
            options,
        }
    }

    /// Unknown option ids are skipped. A formula that fails to parse or
    /// evaluate contributes nothing.
    pub fn quote(&self, selections: &[OptionSelection], is_vip: bool) -> PriceQuote {
        let total = selections
            .iter()
            .filter_map(|selection| {
                self.options
                    .iter()
                    .find(|o| o.id == selection.option_id)
                    .map(|option| option_contribution(option, selection.value))
            })
            .fold(self.base_price, |acc, amount| acc + amount);

        PriceQuote::from_total(self.base_price, total, is_vip)
    }
}

fn clamp_value(option: &ServiceOption, value: f64) -> f64 {
    let (min, max) = (f64::from(option.min_value), f64::from(option.max_value));
    value.max(min).min(max)
}

fn option_contribution(option: &ServiceOption, raw_value: f64) -> f64 {
    let value = clamp_value(option, raw_value);

    match PriceFormula::parse(&option.price_formula).and_then(|f| f.evaluate(value)) {
        Ok(amount) => amount,
        Err(e) => {
            tracing::warn!(
                option_id = %option.id,
                formula = %option.price_formula,
                error = %e,
                "Price formula failed, option ignored"
            );
            0.0
        }
    }
}

/// Base price of the hard-coded count-based estimate.
pub const COUNT_ESTIMATE_BASE: f64 = 35.0;

/// Fixed-rule estimate from request counts, used when a request carries no
/// option selections and for the public queue.
pub fn count_based_estimate(characters: i32, alternatives: i32, poses: i32) -> f64 {
    let mut total = COUNT_ESTIMATE_BASE;

    if characters > 1 {
        total += 3.0 + f64::from(characters - 1) * 2.0;
    }
    if alternatives > 0 {
        total += 3.0 * f64::from(alternatives);
    }
    if poses > 1 {
        total += 5.0 + f64::from(poses - 1);
    }

    total
}
