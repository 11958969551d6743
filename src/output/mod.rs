//! Console rendering: the candidate table, the result panel, statistics and
//! history listings.
//!
//! Renderers return plain `String`s so they stay testable; color is applied
//! via `console::style`, which drops ANSI codes when stdout is not a tty.

use std::fmt::Write as _;

use console::style;

use crate::core::{Item, ItemStats, SolutionResult};
use crate::storage::HistoryRecord;

/// Candidate items as an aligned table.
#[must_use]
pub fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return format!("{}\n", style("no candidate items").dim());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>8}",
        style("ID").bold(),
        style("WEIGHT").bold(),
        style("VALUE").bold(),
        style("RATIO").bold(),
    );
    for item in items {
        let _ = writeln!(
            out,
            "{:<12} {:>10.2} {:>10.2} {:>8.2}",
            item.id,
            item.weight,
            item.value,
            item.ratio()
        );
    }
    let _ = writeln!(out, "{} item(s)", items.len());
    out
}

/// The outcome panel for one optimization run.
#[must_use]
pub fn render_result(result: &SolutionResult) -> String {
    let mut out = String::new();
    if result.success {
        let _ = writeln!(out, "{} {}", style("✓").green().bold(), result.message);
        for item in &result.selected_items {
            let _ = writeln!(
                out,
                "  {:<12} {:>8.2} kg {:>8.2} kcal",
                item.id, item.weight, item.value
            );
        }
        let _ = writeln!(
            out,
            "total weight: {}  total value: {}",
            style(format!("{:.2}", result.total_weight)).bold(),
            style(format!("{:.2}", result.total_value)).bold(),
        );
    } else {
        let _ = writeln!(out, "{} {}", style("✗").red().bold(), result.message);
    }
    out
}

/// Descriptive statistics block.
#[must_use]
pub fn render_stats(stats: &ItemStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "count:       {}", stats.count);
    let _ = writeln!(
        out,
        "weight:      mean {:.2}  min {:.2}  max {:.2}",
        stats.mean_weight, stats.min_weight, stats.max_weight
    );
    let _ = writeln!(
        out,
        "value:       mean {:.2}  min {:.2}  max {:.2}",
        stats.mean_value, stats.min_value, stats.max_value
    );
    let _ = writeln!(out, "mean ratio:  {:.2}", stats.mean_ratio);
    out
}

/// Archived results, newest first.
#[must_use]
pub fn render_history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", style("history is empty").dim());
    }

    let mut out = String::new();
    for record in records {
        let ids: Vec<&str> = record
            .selected_items
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        let _ = writeln!(
            out,
            "{}  floor {:.2}  ceiling {:.2}  ->  weight {:.2}  value {:.2}  [{}]",
            style(record.saved_at.format("%Y-%m-%d %H:%M:%S")).dim(),
            record.constraints.min_value,
            record.constraints.max_weight,
            record.total_weight,
            record.total_value,
            ids.join(", "),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Constraints, optimize, statistics};
    use crate::storage::default_items;

    #[test]
    fn items_table_lists_every_row() {
        let rendered = render_items(&default_items());
        assert!(rendered.contains("E1"));
        assert!(rendered.contains("E5"));
        assert!(rendered.contains("5 item(s)"));
    }

    #[test]
    fn empty_items_render_placeholder() {
        assert!(render_items(&[]).contains("no candidate items"));
    }

    #[test]
    fn success_panel_shows_totals_and_selection() {
        let result = optimize(&Constraints::new(15.0, 10.0), &default_items());
        let rendered = render_result(&result);
        assert!(rendered.contains("optimal solution found"));
        assert!(rendered.contains("E2"));
        assert!(rendered.contains("6.00"));
        assert!(rendered.contains("16.00"));
    }

    #[test]
    fn failure_panel_shows_message_only() {
        let result = optimize(&Constraints::new(100.0, 10.0), &default_items());
        let rendered = render_result(&result);
        assert!(rendered.contains("no solution satisfies the constraints"));
        assert!(!rendered.contains("total weight"));
    }

    #[test]
    fn stats_block_has_all_aggregates() {
        let rendered = render_stats(&statistics(&default_items()));
        assert!(rendered.contains("count:       5"));
        assert!(rendered.contains("mean 3.20"));
        assert!(rendered.contains("mean ratio:  2.43"));
    }
}
