//! Descriptive aggregates over a candidate set.

use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::model::{Item, round2};

/// Summary of a candidate set: means are rounded to two decimals, extrema
/// are exact. All zeros for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemStats {
    pub count: usize,
    pub mean_weight: f64,
    pub mean_value: f64,
    pub mean_ratio: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub min_value: f64,
    pub max_value: f64,
}

/// Pure and stateless; independent of the search pipeline.
#[must_use]
pub fn statistics(items: &[Item]) -> ItemStats {
    if items.is_empty() {
        return ItemStats::default();
    }

    let count = items.len();
    let (min_weight, max_weight) = extrema(items.iter().map(|item| item.weight));
    let (min_value, max_value) = extrema(items.iter().map(|item| item.value));

    ItemStats {
        count,
        mean_weight: round2(mean(items.iter().map(|item| item.weight), count)),
        mean_value: round2(mean(items.iter().map(|item| item.value), count)),
        mean_ratio: round2(mean(items.iter().map(Item::ratio), count)),
        min_weight,
        max_weight,
        min_value,
        max_value,
    }
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count as f64
}

fn extrema(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .minmax_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .into_option()
        .unwrap_or((0.0, 0.0))
}
