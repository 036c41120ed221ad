use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived totals of a computed return.
///
/// Written only by [`crate::TaxReturn::compute_taxes`], which overwrites the
/// whole struct at once; all values are zero until the first computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTotals {
    pub total_income: Decimal,
    pub net_income: Decimal,
    /// Net income floored at zero; the base both schedules are applied to.
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub provincial_tax: Decimal,
    pub total_tax_payable: Decimal,
    /// Withholding minus total tax payable. Positive means a refund,
    /// negative a balance owing; callers distinguish the cases by sign only.
    pub refund_or_owing: Decimal,
}

/// Read-only snapshot of a return: identity plus derived totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub name: Option<String>,
    pub sin: Option<String>,
    #[serde(flatten)]
    pub totals: TaxTotals,
}

/// One accumulated ledger line: a field name and its current total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub field: &'static str,
    pub amount: Decimal,
}
