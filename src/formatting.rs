//! Human-readable number formatting for terminal and markdown reports.
//!
//! The engine exposes unrounded values; everything here is presentation.

/// Format a dollar amount with magnitude suffixes: $11.00M, $756.0K, $147.21.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{sign}${:.2}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{sign}${:.1}K", magnitude / 1_000.0)
    } else {
        format!("{sign}${magnitude:.2}")
    }
}

/// Format a breakeven month count; `None` renders as "n/a".
pub fn format_months(months: Option<f64>) -> String {
    match months {
        Some(m) => format!("{m:.0} mo"),
        None => "n/a".to_string(),
    }
}

/// Format a percentage with one decimal.
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}
