//! Candidate records and optimization outcomes.

use serde::{Deserialize, Serialize};

/// A candidate supply item. Ids are expected to be unique within one
/// optimization call; the optimizer never deduplicates or mutates items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(id: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            value,
        }
    }

    /// Value delivered per unit of weight carried.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && self.weight.is_finite()
            && self.weight > 0.0
            && self.value.is_finite()
            && self.value > 0.0
    }
}

/// Per-call thresholds: the value floor a selection must reach and the
/// weight ceiling it may not exceed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub min_value: f64,
    pub max_weight: f64,
}

impl Constraints {
    #[must_use]
    pub const fn new(min_value: f64, max_weight: f64) -> Self {
        Self {
            min_value,
            max_weight,
        }
    }
}

/// Outcome of one optimization call. Numeric fields are zeroed on failure;
/// `total_weight` is rounded to two decimals, `total_value` is the exact sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionResult {
    pub success: bool,
    pub selected_items: Vec<Item>,
    pub total_weight: f64,
    pub total_value: f64,
    pub message: String,
}

impl SolutionResult {
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            selected_items: Vec::new(),
            total_weight: 0.0,
            total_value: 0.0,
            message: message.into(),
        }
    }

    pub(crate) fn solved(selected_items: Vec<Item>, weight: f64, value: f64, message: &str) -> Self {
        Self {
            success: true,
            selected_items,
            total_weight: round2(weight),
            total_value: value,
            message: message.to_string(),
        }
    }
}

/// Round to two decimal places, matching the presentation precision of
/// result weights and stat means.
#[must_use]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
