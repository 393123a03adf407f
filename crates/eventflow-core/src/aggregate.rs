//! Intent-driven aggregation over the full record set.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::classifier::Intent;
use crate::document::{Document, str_field};

/// Message returned for every intent when no records are stored.
pub const NO_DATA_MESSAGE: &str = "No data available for analysis.";

/// Computes a deterministic summary of `records` for a classified intent.
///
/// Pure and read-only: missing fields exclude a record from the relevant
/// aggregate, never raise. The empty-set check runs before any
/// intent-specific logic.
#[must_use]
pub fn aggregate(records: &[Document], intent: Intent) -> String {
    if records.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let total = records.len();
    match intent {
        Intent::SalesCount => sales_count(records, total),
        Intent::ProductActivity => product_activity(records),
        Intent::DateRange => date_range(records, total),
        Intent::GeneralSummary => format!(
            "Found {total} total records in the database. \
             Ask about sales, products, or dates for more specific analysis."
        ),
    }
}

fn sales_count(records: &[Document], total: usize) -> String {
    let sales = records
        .iter()
        .filter(|doc| str_field(doc, "event_type") == Some("sale"))
        .count();
    format!("Found {sales} sales out of {total} total records.")
}

fn product_activity(records: &[Document]) -> String {
    // Any present `product_id` participates, whatever its JSON type;
    // grouping keys on the rendered value. BTreeMap iteration is ordered by
    // key, so scanning for the maximum and keeping the first hit yields the
    // lexicographically smallest id among tied products.
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for doc in records {
        if let Some(product_id) = doc.get("product_id") {
            *counts.entry(display_value(product_id)).or_insert(0) += 1;
        }
    }

    let Some(max) = counts.values().copied().max() else {
        return "No product data found.".to_string();
    };
    let top = counts
        .iter()
        .find(|(_, count)| **count == max)
        .map(|(id, _)| id.as_str())
        .unwrap_or_default();

    format!("Product {top} has the most activity with {max} events.")
}

fn date_range(records: &[Document], total: usize) -> String {
    let timestamps: Vec<&Value> = records
        .iter()
        .filter_map(|doc| doc.get("timestamp"))
        .collect();

    if timestamps.is_empty() {
        return format!("Found {total} records but no timestamp information.");
    }

    // compare_values is total, so min/max over a non-empty set always exist.
    let min = timestamps
        .iter()
        .copied()
        .min_by(|a, b| compare_values(a, b))
        .unwrap_or(&Value::Null);
    let max = timestamps
        .iter()
        .copied()
        .max_by(|a, b| compare_values(a, b))
        .unwrap_or(&Value::Null);

    format!(
        "Data spans from {} to {} with {total} total records.",
        display_value(min),
        display_value(max)
    )
}

/// Total order over timestamp values: numbers compare numerically, strings
/// lexicographically. Heterogeneous sets rank numbers before strings and
/// everything else last, keeping min/max deterministic.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Number(_) => 0,
            Value::String(_) => 1,
            _ => 2,
        }
    }

    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .unwrap_or(f64::NAN)
            .total_cmp(&y.as_f64().unwrap_or(f64::NAN)),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)).then_with(|| a.to_string().cmp(&b.to_string())),
    }
}

/// Renders a field value for a summary message or grouping key, without
/// JSON quoting around strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
