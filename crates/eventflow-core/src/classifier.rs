//! Rule-based question classification.

/// The analysis intent derived from a free-text question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Count of records whose `event_type` is `"sale"`.
    SalesCount,
    /// Most active product by `product_id` occurrence.
    ProductActivity,
    /// Minimum and maximum `timestamp` across records.
    DateRange,
    /// Fallback: total record count plus a usage hint.
    GeneralSummary,
}

/// Classifies a question by case-insensitive keyword containment.
///
/// First match wins, evaluated in this exact order: sale(s), product,
/// date/time, then the general fallback. Reordering these checks changes
/// observable behavior, so the sequence is load-bearing.
#[must_use]
pub fn classify(question: &str) -> Intent {
    let lowered = question.to_lowercase();

    if lowered.contains("sale") {
        Intent::SalesCount
    } else if lowered.contains("product") {
        Intent::ProductActivity
    } else if lowered.contains("date") || lowered.contains("time") {
        Intent::DateRange
    } else {
        Intent::GeneralSummary
    }
}
