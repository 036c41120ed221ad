//! Built-in tax schedule data for the 2024 Canadian tax year.
//!
//! The engine in `tax-core` is jurisdiction-agnostic; this crate supplies
//! the concrete federal and Ontario provincial schedules as fixed
//! configuration data. Additional years or provinces are added here, not in
//! the bracket-walking code.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::TaxReturn;
//!
//! let mut tax_return = TaxReturn::new();
//! tax_return.add_employment_income(dec!(55000), dec!(5000)).unwrap();
//! tax_return.compute_taxes(&tax_data::schedules()).unwrap();
//!
//! assert_eq!(tax_return.totals().total_income, dec!(55000));
//! ```

use rust_decimal_macros::dec;
use tax_core::models::{ScheduleSet, TaxBracket, TaxSchedule};

/// Tax year the built-in schedules apply to.
pub const TAX_YEAR: i32 = 2024;

/// The 2024 federal schedule.
pub fn federal_schedule() -> TaxSchedule {
    TaxSchedule {
        jurisdiction: "Federal".to_string(),
        brackets: vec![
            TaxBracket {
                ceiling: Some(dec!(55867)),
                rate: dec!(0.15),
            },
            TaxBracket {
                ceiling: Some(dec!(111733)),
                rate: dec!(0.205),
            },
            TaxBracket {
                ceiling: Some(dec!(173205)),
                rate: dec!(0.26),
            },
            TaxBracket {
                ceiling: None,
                rate: dec!(0.29),
            },
        ],
    }
}

/// The 2024 Ontario provincial schedule.
pub fn provincial_schedule() -> TaxSchedule {
    TaxSchedule {
        jurisdiction: "Ontario".to_string(),
        brackets: vec![
            TaxBracket {
                ceiling: Some(dec!(51446)),
                rate: dec!(0.0505),
            },
            TaxBracket {
                ceiling: Some(dec!(102894)),
                rate: dec!(0.0915),
            },
            TaxBracket {
                ceiling: Some(dec!(150000)),
                rate: dec!(0.1116),
            },
            TaxBracket {
                ceiling: None,
                rate: dec!(0.1216),
            },
        ],
    }
}

/// Both 2024 schedules, ready to hand to
/// [`tax_core::TaxReturn::compute_taxes`].
pub fn schedules() -> ScheduleSet {
    ScheduleSet {
        federal: federal_schedule(),
        provincial: provincial_schedule(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn federal_schedule_is_structurally_valid() {
        assert_eq!(federal_schedule().validate(), Ok(()));
    }

    #[test]
    fn provincial_schedule_is_structurally_valid() {
        assert_eq!(provincial_schedule().validate(), Ok(()));
    }

    #[test]
    fn both_schedules_have_four_brackets() {
        assert_eq!(federal_schedule().brackets.len(), 4);
        assert_eq!(provincial_schedule().brackets.len(), 4);
    }

    #[test]
    fn federal_first_bracket_boundary() {
        let schedule = federal_schedule();

        assert_eq!(schedule.brackets[0].ceiling, Some(dec!(55867)));
        assert_eq!(schedule.brackets[0].rate, dec!(0.15));
    }

    #[test]
    fn provincial_top_bracket_is_unbounded() {
        let schedule = provincial_schedule();

        assert_eq!(schedule.brackets[3].ceiling, None);
        assert_eq!(schedule.brackets[3].rate, dec!(0.1216));
    }
}
