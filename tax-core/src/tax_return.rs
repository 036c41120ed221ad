//! Single-taxpayer return accumulator and tax computation.
//!
//! A [`TaxReturn`] is constructed empty, populated through any number of
//! accumulation calls in any order, then finalized by one
//! [`TaxReturn::compute_taxes`] call; after that, the summary and report
//! accessors are pure reads. One instance per computation — the type is a
//! plain mutable value with no internal locking.
//!
//! Every mutating operation validates all of its arguments before touching
//! any field, so a failed call leaves the return exactly as it was.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::TaxReturn;
//! use tax_core::models::{ScheduleSet, TaxSchedule};
//!
//! let schedules = ScheduleSet {
//!     federal: TaxSchedule::from_rates(
//!         "Federal",
//!         vec![dec!(55867), dec!(111733), dec!(173205)],
//!         vec![dec!(0.15), dec!(0.205), dec!(0.26), dec!(0.29)],
//!     )
//!     .unwrap(),
//!     provincial: TaxSchedule::from_rates(
//!         "Ontario",
//!         vec![dec!(51446), dec!(102894), dec!(150000)],
//!         vec![dec!(0.0505), dec!(0.0915), dec!(0.1116), dec!(0.1216)],
//!     )
//!     .unwrap(),
//! };
//!
//! let mut tax_return = TaxReturn::new();
//! tax_return.set_identity("John Doe", "123-456-789").unwrap();
//! tax_return.add_employment_income(dec!(60000), dec!(10000)).unwrap();
//! tax_return.add_self_employment_income(dec!(30000)).unwrap();
//! tax_return.compute_taxes(&schedules).unwrap();
//!
//! let totals = tax_return.totals();
//! assert_eq!(totals.taxable_income, dec!(90000));
//! assert_eq!(totals.federal_tax, dec!(15377.315));
//! assert_eq!(totals.provincial_tax, dec!(6125.714));
//! // Negative: a balance owing.
//! assert_eq!(totals.refund_or_owing, dec!(-11503.029));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::progressive_tax;
use crate::models::{LedgerEntry, ScheduleError, ScheduleSet, TaxSummary, TaxTotals};
use crate::report;

/// Three groups of exactly three digits separated by hyphens.
static SIN_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{3}$").expect("valid SIN pattern"));

/// Errors raised by the return operations.
///
/// Raised synchronously by the operation that detects the violation and
/// never caught inside the engine; the front end is expected to present the
/// message to the user verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The social insurance number does not match `NNN-NNN-NNN`.
    #[error("invalid SIN '{0}': expected format NNN-NNN-NNN")]
    InvalidSin(String),

    /// A monetary amount was negative.
    #[error("invalid {field} amount {value}: must be non-negative")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// Identity was required by configuration but never set.
    #[error("identity must be set before taxes can be computed")]
    MissingIdentity,

    /// A supplied schedule is structurally invalid.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Behavioral configuration for a return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnConfig {
    /// When set, [`TaxReturn::compute_taxes`] fails unless an identity has
    /// been stored. Off by default: computing a return for an unidentified
    /// taxpayer is permitted and reports an empty name.
    pub require_identity: bool,
}

/// One taxpayer's financial inputs and derived tax outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReturn {
    config: ReturnConfig,
    name: Option<String>,
    sin: Option<String>,
    employment_income: Decimal,
    employment_tax_withheld: Decimal,
    self_employment_income: Decimal,
    rrsp_deduction: Decimal,
    donation_deduction: Decimal,
    totals: TaxTotals,
}

impl TaxReturn {
    /// Creates an empty return with the default (permissive) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty return with an explicit configuration.
    pub fn with_config(config: ReturnConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Stores the taxpayer's name and social insurance number.
    ///
    /// The SIN must be three groups of exactly three digits separated by
    /// hyphens, e.g. `"123-456-789"`. The format is checked here, not
    /// deferred to compute time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSin`] without storing either value
    /// if the SIN does not match the expected format.
    pub fn set_identity(
        &mut self,
        name: impl Into<String>,
        sin: &str,
    ) -> Result<(), ValidationError> {
        if !SIN_FORMAT.is_match(sin) {
            return Err(ValidationError::InvalidSin(sin.to_string()));
        }
        self.name = Some(name.into());
        self.sin = Some(sin.to_string());
        Ok(())
    }

    /// Accumulates one employment income slip.
    ///
    /// Both the income and the tax withheld at source are added to their
    /// running totals, supporting multiple employers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeAmount`] without mutating either
    /// total if either value is negative.
    pub fn add_employment_income(
        &mut self,
        income: Decimal,
        tax_withheld: Decimal,
    ) -> Result<(), ValidationError> {
        ensure_non_negative("employment income", income)?;
        ensure_non_negative("employment tax withheld", tax_withheld)?;
        self.employment_income += income;
        self.employment_tax_withheld += tax_withheld;
        Ok(())
    }

    /// Accumulates self-employment income.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeAmount`] if the value is negative.
    pub fn add_self_employment_income(&mut self, income: Decimal) -> Result<(), ValidationError> {
        ensure_non_negative("self-employment income", income)?;
        self.self_employment_income += income;
        Ok(())
    }

    /// Accumulates RRSP and/or charitable donation deductions.
    ///
    /// Each argument is an explicit absent-marker: `None` leaves the field
    /// untouched, while any supplied value — including an explicit zero — is
    /// validated and accumulated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeAmount`] if a supplied value is
    /// negative; neither field mutates in that case.
    pub fn add_deduction(
        &mut self,
        rrsp: Option<Decimal>,
        donation: Option<Decimal>,
    ) -> Result<(), ValidationError> {
        if let Some(amount) = rrsp {
            ensure_non_negative("RRSP deduction", amount)?;
        }
        if let Some(amount) = donation {
            ensure_non_negative("donation deduction", amount)?;
        }
        if let Some(amount) = rrsp {
            self.rrsp_deduction += amount;
        }
        if let Some(amount) = donation {
            self.donation_deduction += amount;
        }
        Ok(())
    }

    /// Derives the tax outcome from the accumulated inputs.
    ///
    /// Taxable income is net income floored at zero, then taxed
    /// independently under the federal and provincial schedules. The
    /// refund/owing figure is withholding minus total tax payable: positive
    /// means a refund, negative a balance owing.
    ///
    /// All derived totals are overwritten together; on error none of them
    /// change. Recomputing after further accumulation is permitted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingIdentity`] when the configuration
    /// requires identity and none was set, or
    /// [`ValidationError::Schedule`] when a schedule is structurally
    /// invalid.
    pub fn compute_taxes(&mut self, schedules: &ScheduleSet) -> Result<(), ValidationError> {
        if self.config.require_identity && self.sin.is_none() {
            return Err(ValidationError::MissingIdentity);
        }

        let total_income = self.employment_income + self.self_employment_income;
        let total_deductions = self.rrsp_deduction + self.donation_deduction;
        let net_income = total_income - total_deductions;
        if net_income < Decimal::ZERO {
            warn!(
                %total_income,
                %total_deductions,
                "deductions exceed total income; taxable income floored at zero"
            );
        }
        let taxable_income = net_income.max(Decimal::ZERO);

        let federal_tax = progressive_tax(taxable_income, &schedules.federal)?;
        let provincial_tax = progressive_tax(taxable_income, &schedules.provincial)?;
        let total_tax_payable = federal_tax + provincial_tax;
        let refund_or_owing = self.employment_tax_withheld - total_tax_payable;

        debug!(
            %taxable_income,
            %federal_tax,
            %provincial_tax,
            %refund_or_owing,
            "computed return totals"
        );

        self.totals = TaxTotals {
            total_income,
            net_income,
            taxable_income,
            federal_tax,
            provincial_tax,
            total_tax_payable,
            refund_or_owing,
        };
        Ok(())
    }

    /// Read-only snapshot of identity and derived totals.
    ///
    /// Safe to call before [`TaxReturn::compute_taxes`]; the totals are then
    /// all zero and the identity fields `None`.
    pub fn summary(&self) -> TaxSummary {
        TaxSummary {
            name: self.name.clone(),
            sin: self.sin.clone(),
            totals: self.totals.clone(),
        }
    }

    /// Accumulated income totals, one entry per field.
    pub fn income_entries(&self) -> Vec<LedgerEntry> {
        vec![
            LedgerEntry {
                field: "employment_income",
                amount: self.employment_income,
            },
            LedgerEntry {
                field: "employment_tax_withheld",
                amount: self.employment_tax_withheld,
            },
            LedgerEntry {
                field: "self_employment_income",
                amount: self.self_employment_income,
            },
        ]
    }

    /// Accumulated deduction totals, one entry per field.
    pub fn deduction_entries(&self) -> Vec<LedgerEntry> {
        vec![
            LedgerEntry {
                field: "rrsp_deduction",
                amount: self.rrsp_deduction,
            },
            LedgerEntry {
                field: "donation_deduction",
                amount: self.donation_deduction,
            },
        ]
    }

    /// Renders the fixed-format text report for the current summary.
    pub fn generate_report(&self) -> String {
        report::render(&self.summary())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn sin(&self) -> Option<&str> {
        self.sin.as_deref()
    }

    pub fn employment_income(&self) -> Decimal {
        self.employment_income
    }

    pub fn employment_tax_withheld(&self) -> Decimal {
        self.employment_tax_withheld
    }

    pub fn self_employment_income(&self) -> Decimal {
        self.self_employment_income
    }

    pub fn rrsp_deduction(&self) -> Decimal {
        self.rrsp_deduction
    }

    pub fn donation_deduction(&self) -> Decimal {
        self.donation_deduction
    }

    /// Derived totals of the most recent computation (zeros before one).
    pub fn totals(&self) -> &TaxTotals {
        &self.totals
    }
}

fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}
