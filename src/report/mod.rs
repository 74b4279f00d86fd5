//! Output adapters over the shared pivot: results table and CSV export.
//!
//! Both adapters consume the same [`crate::aggregator::PivotTable`] and emit
//! the same three logical rows per store. Their zero-revenue ratio fallbacks
//! differ on purpose ("N/A" on screen, "0.00%" in the CSV) and must stay
//! independent.

pub mod csv;
pub mod table;

/// Indicator labels, kept from the Skello report.
pub const INDICATOR_REVENUE: &str = "Chiffre d'affaires HT";
pub const INDICATOR_COSTS: &str = "MS chargée";
pub const INDICATOR_COST_RATIO: &str = "% MS";

/// Plain decimal with exactly 2 fraction digits.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Ratio as a fixed 2-decimal percentage ("0.3" -> "30.00%").
pub(crate) fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Euro amount for the on-screen table.
pub(crate) fn format_eur(value: f64) -> String {
    format!("{:.2}€", value)
}
