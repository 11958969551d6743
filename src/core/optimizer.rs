//! Input validation and search dispatch.

use thiserror::Error;
use tracing::debug;

use super::exact;
use super::heuristic;
use super::model::{Constraints, Item, SolutionResult};

/// Largest candidate count handed to exhaustive search. 2^20 masks is about
/// a million subset evaluations; past that the exponential cost wins and we
/// trade optimality for tractability.
pub const EXACT_SEARCH_LIMIT: usize = 20;

pub const MSG_NO_ITEMS: &str = "no candidate items available";
pub const MSG_INFEASIBLE: &str =
    "no solution satisfies the constraints; widen the weight ceiling or lower the value floor";

/// Reasons a request is rejected before any search runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("value floor must be positive")]
    NonPositiveFloor,

    #[error("weight ceiling must be positive")]
    NonPositiveCeiling,

    #[error("invalid item list")]
    MalformedItems,

    #[error("no item fits within the weight ceiling")]
    NoViableItem,
}

/// Reject degenerate inputs. Rules are checked in order; the first violated
/// rule wins. Pure predicate, no side effects.
///
/// An empty item list passes validation so the dispatcher can report the
/// dedicated no-candidates outcome.
pub fn validate(constraints: &Constraints, items: &[Item]) -> Result<(), ValidationError> {
    if constraints.min_value <= 0.0 {
        return Err(ValidationError::NonPositiveFloor);
    }
    if constraints.max_weight <= 0.0 {
        return Err(ValidationError::NonPositiveCeiling);
    }
    if items.iter().any(|item| !item.is_well_formed()) {
        return Err(ValidationError::MalformedItems);
    }
    if !items.is_empty()
        && !items
            .iter()
            .any(|item| item.weight <= constraints.max_weight)
    {
        return Err(ValidationError::NoViableItem);
    }
    Ok(())
}

/// Find the lightest selection of `items` whose value clears the floor
/// without the weight breaking the ceiling.
///
/// Exhaustive search for small candidate sets, ratio-greedy with a backward
/// pruning pass for large ones. Validation failures and infeasible instances
/// come back as failure results, never as errors.
#[must_use]
pub fn optimize(constraints: &Constraints, items: &[Item]) -> SolutionResult {
    if let Err(reason) = validate(constraints, items) {
        return SolutionResult::failure(reason.to_string());
    }

    if items.is_empty() {
        return SolutionResult::failure(MSG_NO_ITEMS);
    }

    if items.len() <= EXACT_SEARCH_LIMIT {
        debug!(candidates = items.len(), "dispatching to exhaustive search");
        exact::exact_search(constraints, items)
    } else {
        debug!(candidates = items.len(), "dispatching to ratio-greedy search");
        heuristic::heuristic_search(constraints, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exact::MSG_OPTIMAL;
    use crate::core::heuristic::MSG_HEURISTIC;

    fn default_items() -> Vec<Item> {
        vec![
            Item::new("E1", 5.0, 3.0),
            Item::new("E2", 3.0, 5.0),
            Item::new("E3", 5.0, 2.0),
            Item::new("E4", 1.0, 8.0),
            Item::new("E5", 2.0, 3.0),
        ]
    }

    #[test]
    fn validate_rule_order_floor_first() {
        let items = default_items();
        assert_eq!(
            validate(&Constraints::new(0.0, 0.0), &items),
            Err(ValidationError::NonPositiveFloor)
        );
        assert_eq!(
            validate(&Constraints::new(10.0, -1.0), &items),
            Err(ValidationError::NonPositiveCeiling)
        );
    }

    #[test]
    fn validate_rejects_malformed_items() {
        let mut items = default_items();
        items.push(Item::new("", 1.0, 1.0));
        assert_eq!(
            validate(&Constraints::new(10.0, 10.0), &items),
            Err(ValidationError::MalformedItems)
        );
    }

    #[test]
    fn validate_rejects_nothing_viable() {
        let items = vec![Item::new("anvil", 50.0, 100.0)];
        assert_eq!(
            validate(&Constraints::new(10.0, 10.0), &items),
            Err(ValidationError::NoViableItem)
        );
    }

    #[test]
    fn validate_accepts_empty_list() {
        assert_eq!(validate(&Constraints::new(10.0, 10.0), &[]), Ok(()));
    }

    #[test]
    fn zero_floor_fails_before_any_search() {
        let result = optimize(&Constraints::new(0.0, 10.0), &default_items());
        assert!(!result.success);
        assert_eq!(result.message, "value floor must be positive");
        assert_eq!(result.total_weight, 0.0);
        assert_eq!(result.total_value, 0.0);
    }

    #[test]
    fn empty_items_report_no_candidates() {
        let result = optimize(&Constraints::new(15.0, 10.0), &[]);
        assert!(!result.success);
        assert_eq!(result.message, MSG_NO_ITEMS);
    }

    #[test]
    fn small_sets_route_to_exact_search() {
        let items: Vec<Item> = (0..20)
            .map(|i| Item::new(format!("I{i}"), 1.0, 2.0))
            .collect();
        let result = optimize(&Constraints::new(4.0, 10.0), &items);
        assert!(result.success);
        assert_eq!(result.message, MSG_OPTIMAL);
    }

    #[test]
    fn large_sets_route_to_heuristic_search() {
        let items: Vec<Item> = (0..21)
            .map(|i| Item::new(format!("I{i}"), 1.0, 2.0))
            .collect();
        let result = optimize(&Constraints::new(4.0, 10.0), &items);
        assert!(result.success);
        assert_eq!(result.message, MSG_HEURISTIC);
    }

    #[test]
    fn optimizer_is_deterministic() {
        let items = default_items();
        let constraints = Constraints::new(15.0, 10.0);
        let first = optimize(&constraints, &items);
        let second = optimize(&constraints, &items);
        assert_eq!(first, second);
    }

    #[test]
    fn caller_items_are_untouched() {
        let items = default_items();
        let before = items.clone();
        let _ = optimize(&Constraints::new(15.0, 10.0), &items);
        assert_eq!(items, before);
    }
}
