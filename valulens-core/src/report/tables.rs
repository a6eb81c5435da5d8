//! Generic table builders.
//!
//! These are the only places payload values become display strings, and
//! each cell goes through the formatting contract exactly once.

use crate::format::{self, NOT_MEANINGFUL};
use crate::model::{LineItems, SensitivityRow};

use super::{Cell, Section};

/// Fixed terminal-growth column headers: low / base / high scenarios.
const TERMINAL_GROWTH_COLUMNS: [&str; 3] = ["1%", "2%", "3%"];

/// Key/value table from a name → value mapping, in insertion order.
pub fn key_value_table(title: &str, items: &LineItems) -> Section {
    let rows = items
        .iter()
        .map(|(key, value)| (key.clone(), Cell::Text(format::format_cell(key, value))))
        .collect();
    Section::KeyValue { title: title.to_string(), rows }
}

/// Historical table: columns come from the first row's keys, in that
/// row's key order. Later rows render under those same columns — a
/// missing key shows the sentinel, extra keys are dropped.
pub fn historical_table(title: &str, rows: &[LineItems]) -> Section {
    let Some(first) = rows.first() else {
        return Section::Placeholder {
            title: title.to_string(),
            message: NOT_MEANINGFUL.to_string(),
        };
    };

    let columns: Vec<String> = first.keys().cloned().collect();
    let data = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|col| match row.get(col) {
                    Some(value) => format::format_historical_cell(col, value),
                    None => NOT_MEANINGFUL.to_string(),
                })
                .collect()
        })
        .collect();

    Section::Grid { title: title.to_string(), columns, rows: data }
}

/// DCF sensitivity grid: one row per WACC scenario (row header = that
/// scenario's WACC as a percentage), three value columns under the fixed
/// terminal-growth headers. Values are plain grouped numbers.
pub fn sensitivity_grid(title: &str, scenarios: &[SensitivityRow]) -> Section {
    let mut columns = vec!["WACC".to_string()];
    columns.extend(TERMINAL_GROWTH_COLUMNS.iter().map(|c| c.to_string()));

    let rows = scenarios
        .iter()
        .map(|scenario| {
            let mut row = Vec::with_capacity(1 + TERMINAL_GROWTH_COLUMNS.len());
            row.push(match scenario.wacc {
                Some(w) => format::format_percent(w),
                None => NOT_MEANINGFUL.to_string(),
            });
            for i in 0..TERMINAL_GROWTH_COLUMNS.len() {
                row.push(match scenario.values.get(i).copied().flatten() {
                    Some(v) => format::format_number(v),
                    None => NOT_MEANINGFUL.to_string(),
                });
            }
            row
        })
        .collect();

    Section::Grid { title: title.to_string(), columns, rows }
}
