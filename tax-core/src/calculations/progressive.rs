//! Generic marginal-bracket tax computation.
//!
//! A progressive schedule taxes only the portion of income falling inside
//! each bracket at that bracket's rate; lower portions are never re-taxed at
//! a higher rate. An amount exactly equal to a bracket ceiling falls in the
//! lower bracket.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::models::TaxSchedule;
//! use tax_core::progressive_tax;
//!
//! let federal = TaxSchedule::from_rates(
//!     "Federal",
//!     vec![dec!(55867), dec!(111733), dec!(173205)],
//!     vec![dec!(0.15), dec!(0.205), dec!(0.26), dec!(0.29)],
//! )
//! .unwrap();
//!
//! // Exactly at the first ceiling: the whole amount stays in the 15% bracket.
//! assert_eq!(progressive_tax(dec!(55867), &federal).unwrap(), dec!(8380.05));
//!
//! // One dollar above: only that dollar is taxed at the next rate.
//! assert_eq!(progressive_tax(dec!(55868), &federal).unwrap(), dec!(8380.255));
//! ```

use rust_decimal::Decimal;

use crate::models::{ScheduleError, TaxSchedule};

/// Computes the tax owed on `amount` under a progressive `schedule`.
///
/// The walk keeps full decimal precision; rounding to cents is left to the
/// report layer. Amounts at or below zero owe nothing.
///
/// # Errors
///
/// Returns [`ScheduleError`] if the schedule fails
/// [`TaxSchedule::validate`].
pub fn progressive_tax(amount: Decimal, schedule: &TaxSchedule) -> Result<Decimal, ScheduleError> {
    schedule.validate()?;

    if amount <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let mut tax = Decimal::ZERO;
    let mut floor = Decimal::ZERO;

    for bracket in &schedule.brackets {
        match bracket.ceiling {
            Some(ceiling) if amount > ceiling => {
                tax += bracket.rate * (ceiling - floor);
                floor = ceiling;
            }
            // Amount falls in this bracket (or the unbounded top one).
            _ => {
                tax += bracket.rate * (amount - floor);
                break;
            }
        }
    }

    Ok(tax)
}
