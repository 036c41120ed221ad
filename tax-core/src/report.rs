//! Fixed-format text rendering of a computed return.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::TaxSummary;

/// Formats a monetary value as `$` plus exactly two decimal places,
/// rounding half up. Negative values render as `$-123.45`.
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_half_up(value))
}

/// Renders the multi-line summary report.
///
/// Field order is fixed: total income, net income, taxable income, federal
/// tax, provincial tax, total tax payable, final refund/owing. An
/// unidentified taxpayer renders with an empty name.
pub fn render(summary: &TaxSummary) -> String {
    let totals = &summary.totals;
    format!(
        "Tax Summary Report for {}\n\
         -----------------------------------\n\
         Total Income: {}\n\
         Net Income: {}\n\
         Taxable Income: {}\n\
         Federal Tax: {}\n\
         Provincial Tax: {}\n\
         Total Tax Payable: {}\n\
         Final Refund or Balance Owing: {}\n",
        summary.name.as_deref().unwrap_or(""),
        format_money(totals.total_income),
        format_money(totals.net_income),
        format_money(totals.taxable_income),
        format_money(totals.federal_tax),
        format_money(totals.provincial_tax),
        format_money(totals.total_tax_payable),
        format_money(totals.refund_or_owing),
    )
}
