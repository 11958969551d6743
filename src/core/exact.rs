//! Exhaustive bitmask search over candidate subsets.
//!
//! Every integer mask in `0..2^n` names a subset: bit `i` set means item `i`
//! (input order) is included. Masks are visited in increasing numeric order,
//! which is what makes the tie-break deterministic.

use super::model::{Constraints, Item, SolutionResult};
use super::optimizer::MSG_INFEASIBLE;

pub const MSG_OPTIMAL: &str = "optimal solution found";

/// Optimal search for small candidate sets. The caller guarantees
/// `items.len() <= EXACT_SEARCH_LIMIT`, so a `u32` mask always suffices.
#[must_use]
pub fn exact_search(constraints: &Constraints, items: &[Item]) -> SolutionResult {
    let n = items.len();
    let total_masks = 1u32 << n;

    let mut best_mask: Option<u32> = None;
    let mut best_weight = f64::INFINITY;
    let mut best_value = 0.0;

    for mask in 0..total_masks {
        let mut weight = 0.0;
        let mut value = 0.0;

        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                weight += item.weight;
                value += item.value;
                // A partial sum already over the ceiling can only grow, and
                // the feasibility check below rejects it either way.
                if weight > constraints.max_weight {
                    break;
                }
            }
        }

        // Strict less-than: equal-weight ties go to the first (smallest)
        // mask encountered.
        if weight <= constraints.max_weight
            && value >= constraints.min_value
            && weight < best_weight
        {
            best_mask = Some(mask);
            best_weight = weight;
            best_value = value;
        }
    }

    match best_mask {
        None => SolutionResult::failure(MSG_INFEASIBLE),
        Some(mask) => {
            let selected: Vec<Item> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| item.clone())
                .collect();
            SolutionResult::solved(selected, best_weight, best_value, MSG_OPTIMAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, weight: f64, value: f64) -> Item {
        Item::new(id, weight, value)
    }

    fn default_items() -> Vec<Item> {
        vec![
            item("E1", 5.0, 3.0),
            item("E2", 3.0, 5.0),
            item("E3", 5.0, 2.0),
            item("E4", 1.0, 8.0),
            item("E5", 2.0, 3.0),
        ]
    }

    #[test]
    fn finds_lightest_feasible_subset() {
        let result = exact_search(&Constraints::new(15.0, 10.0), &default_items());
        assert!(result.success);
        let ids: Vec<&str> = result.selected_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["E2", "E4", "E5"]);
        assert_eq!(result.total_weight, 6.0);
        assert_eq!(result.total_value, 16.0);
        assert_eq!(result.message, MSG_OPTIMAL);
    }

    #[test]
    fn unreachable_floor_is_infeasible() {
        // All values together sum to 21, far short of 100.
        let result = exact_search(&Constraints::new(100.0, 10.0), &default_items());
        assert!(!result.success);
        assert_eq!(result.message, MSG_INFEASIBLE);
        assert!(result.selected_items.is_empty());
        assert_eq!(result.total_weight, 0.0);
        assert_eq!(result.total_value, 0.0);
    }

    #[test]
    fn selection_preserves_input_order() {
        let items = vec![
            item("c", 2.0, 5.0),
            item("a", 2.0, 5.0),
            item("b", 2.0, 5.0),
        ];
        let result = exact_search(&Constraints::new(15.0, 10.0), &items);
        assert!(result.success);
        let ids: Vec<&str> = result.selected_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn equal_weight_tie_goes_to_smallest_mask() {
        // Both single-item subsets weigh 4 and clear the floor; mask 0b01
        // (first item) is visited before mask 0b10.
        let items = vec![item("first", 4.0, 10.0), item("second", 4.0, 12.0)];
        let result = exact_search(&Constraints::new(10.0, 10.0), &items);
        assert!(result.success);
        let ids: Vec<&str> = result.selected_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["first"]);
    }

    #[test]
    fn no_feasible_subset_under_tight_ceiling() {
        let items = vec![item("a", 6.0, 10.0), item("b", 7.0, 10.0)];
        // Either item alone fits, but neither clears the floor; together
        // they break the ceiling.
        let result = exact_search(&Constraints::new(15.0, 8.0), &items);
        assert!(!result.success);
        assert_eq!(result.message, MSG_INFEASIBLE);
    }

    #[test]
    fn optimal_against_brute_recheck() {
        let items = vec![
            item("a", 2.5, 4.0),
            item("b", 1.5, 3.0),
            item("c", 4.0, 9.0),
            item("d", 3.0, 2.0),
            item("e", 0.5, 1.0),
            item("f", 2.0, 6.0),
        ];
        let constraints = Constraints::new(12.0, 7.0);
        let result = exact_search(&constraints, &items);
        assert!(result.success);

        // Independent enumeration: no feasible subset may be strictly
        // lighter than the returned one.
        let n = items.len();
        for mask in 0u32..(1 << n) {
            let weight: f64 = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, it)| it.weight)
                .sum();
            let value: f64 = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, it)| it.value)
                .sum();
            if weight <= constraints.max_weight && value >= constraints.min_value {
                assert!(weight >= result.total_weight - 1e-9);
            }
        }
    }

    #[test]
    fn twenty_items_complete_quickly() {
        let items: Vec<Item> = (0..20)
            .map(|i| item(&format!("I{i}"), f64::from(i % 5 + 1), f64::from(i % 7 + 1)))
            .collect();
        let result = exact_search(&Constraints::new(20.0, 15.0), &items);
        assert!(result.success);
        assert!(result.total_value >= 20.0);
        assert!(result.total_weight <= 15.0);
    }
}
