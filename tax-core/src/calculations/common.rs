//! Shared helpers for monetary calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to exactly two decimal places, half up
/// (away from zero at the midpoint).
///
/// Used at the presentation boundary only; the bracket walk itself keeps
/// full precision so boundary amounts compare exactly.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(6125.714)), dec!(6125.71));
/// assert_eq!(round_half_up(dec!(8380.255)), dec!(8380.26));
/// assert_eq!(round_half_up(dec!(-11503.029)), dec!(-11503.03));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
