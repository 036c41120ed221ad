//! Progressive tax schedule definitions.
//!
//! A schedule is an ordered list of marginal brackets for one jurisdiction.
//! Schedules are configuration data, not user input; the bracket-walking
//! algorithm in [`crate::calculations::progressive`] is generic over them so
//! additional jurisdictions or years can be added without duplicating logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors describing a structurally invalid tax schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule contains no brackets.
    #[error("schedule has no brackets")]
    Empty,

    /// Only the final bracket of a schedule may omit its ceiling.
    #[error("only the last bracket may be unbounded")]
    UnboundedBeforeLast,

    /// The final bracket must cover all remaining income.
    #[error("last bracket must be unbounded, got ceiling {0}")]
    BoundedLast(Decimal),

    /// A bracket ceiling must be positive.
    #[error("bracket ceiling must be positive, got {0}")]
    NonPositiveCeiling(Decimal),

    /// Bracket ceilings must be strictly increasing.
    #[error("bracket ceilings must be strictly increasing, got {ceiling} after {previous}")]
    NonIncreasingCeiling { ceiling: Decimal, previous: Decimal },

    /// A marginal rate must be between 0 and 1.
    #[error("marginal rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// A schedule needs exactly one more rate than it has ceilings.
    #[error("expected {expected} rates for {ceilings} ceilings, got {rates}")]
    RateCountMismatch {
        ceilings: usize,
        expected: usize,
        rates: usize,
    },
}

/// One marginal bracket: income up to `ceiling` (inclusive) is taxed at
/// `rate` for the portion falling inside the bracket. A `None` ceiling marks
/// the unbounded top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,
}

/// An ordered progressive tax schedule for a single jurisdiction.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::models::TaxSchedule;
///
/// let schedule = TaxSchedule::from_rates(
///     "Federal",
///     vec![dec!(55867), dec!(111733), dec!(173205)],
///     vec![dec!(0.15), dec!(0.205), dec!(0.26), dec!(0.29)],
/// )
/// .unwrap();
///
/// assert_eq!(schedule.brackets.len(), 4);
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    pub jurisdiction: String,
    pub brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Builds a schedule from parallel ceiling and rate lists.
    ///
    /// `ceilings` are the upper bounds of every bracket except the last;
    /// `rates` must therefore contain exactly one more entry than `ceilings`.
    /// The resulting schedule is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the rate count does not line up or the
    /// resulting schedule fails [`TaxSchedule::validate`].
    pub fn from_rates(
        jurisdiction: impl Into<String>,
        ceilings: Vec<Decimal>,
        rates: Vec<Decimal>,
    ) -> Result<Self, ScheduleError> {
        if rates.len() != ceilings.len() + 1 {
            return Err(ScheduleError::RateCountMismatch {
                ceilings: ceilings.len(),
                expected: ceilings.len() + 1,
                rates: rates.len(),
            });
        }

        let mut brackets: Vec<TaxBracket> = ceilings
            .into_iter()
            .zip(rates.iter().copied())
            .map(|(ceiling, rate)| TaxBracket {
                ceiling: Some(ceiling),
                rate,
            })
            .collect();
        brackets.push(TaxBracket {
            ceiling: None,
            rate: *rates.last().unwrap_or(&Decimal::ZERO),
        });

        let schedule = Self {
            jurisdiction: jurisdiction.into(),
            brackets,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Validates the structural invariants of the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if:
    /// - the schedule has no brackets
    /// - any bracket other than the last is unbounded, or the last is bounded
    /// - a ceiling is non-positive or not strictly greater than its predecessor
    /// - a rate lies outside [0, 1]
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let last_index = self.brackets.len() - 1;
        let mut previous: Option<Decimal> = None;

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate(bracket.rate));
            }

            match bracket.ceiling {
                Some(ceiling) => {
                    if index == last_index {
                        return Err(ScheduleError::BoundedLast(ceiling));
                    }
                    if ceiling <= Decimal::ZERO {
                        return Err(ScheduleError::NonPositiveCeiling(ceiling));
                    }
                    if let Some(previous) = previous
                        && ceiling <= previous
                    {
                        return Err(ScheduleError::NonIncreasingCeiling { ceiling, previous });
                    }
                    previous = Some(ceiling);
                }
                None => {
                    if index != last_index {
                        return Err(ScheduleError::UnboundedBeforeLast);
                    }
                }
            }
        }

        Ok(())
    }
}

/// The pair of independent schedules a return is computed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSet {
    pub federal: TaxSchedule,
    pub provincial: TaxSchedule,
}
