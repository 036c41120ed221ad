//! End-to-end tests running the tax-core engine against the built-in 2024
//! federal and Ontario schedules.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{ReturnConfig, TaxReturn, ValidationError, progressive_tax};

#[test]
fn federal_boundary_amount_stays_in_first_bracket() {
    let federal = tax_data::federal_schedule();

    // Exactly at the first ceiling: 55867 × 0.15
    assert_eq!(progressive_tax(dec!(55867), &federal), Ok(dec!(8380.05)));
}

#[test]
fn federal_amount_one_above_boundary_taxes_only_the_excess_higher() {
    let federal = tax_data::federal_schedule();

    // 55867 × 0.15 + 1 × 0.205
    assert_eq!(progressive_tax(dec!(55868), &federal), Ok(dec!(8380.255)));
}

#[test]
fn federal_top_bracket_amount() {
    let federal = tax_data::federal_schedule();

    // 8380.05 + 55866 × 0.205 + 61472 × 0.26 + 26795 × 0.29
    assert_eq!(progressive_tax(dec!(200000), &federal), Ok(dec!(43585.85)));
}

#[test]
fn provincial_boundary_amount_stays_in_first_bracket() {
    let provincial = tax_data::provincial_schedule();

    assert_eq!(progressive_tax(dec!(51446), &provincial), Ok(dec!(2598.023)));
}

#[test]
fn provincial_top_bracket_amount() {
    let provincial = tax_data::provincial_schedule();

    // 2598.023 + 51448 × 0.0915 + 47106 × 0.1116 + 50000 × 0.1216
    assert_eq!(
        progressive_tax(dec!(200000), &provincial),
        Ok(dec!(18642.5446))
    );
}

#[test]
fn balance_owing_scenario() {
    // Employment 60 000 with 10 000 withheld plus 30 000 self-employment,
    // no deductions: the withholding falls well short of the tax payable.
    let mut tax_return = TaxReturn::new();
    tax_return.set_identity("John Smith", "234-567-890").unwrap();
    tax_return
        .add_employment_income(dec!(60000), dec!(10000))
        .unwrap();
    tax_return.add_self_employment_income(dec!(30000)).unwrap();

    tax_return.compute_taxes(&tax_data::schedules()).unwrap();

    let totals = tax_return.totals();
    assert_eq!(totals.total_income, dec!(90000));
    assert_eq!(totals.net_income, dec!(90000));
    assert_eq!(totals.taxable_income, dec!(90000));
    // 8380.05 + 34133 × 0.205
    assert_eq!(totals.federal_tax, dec!(15377.315));
    // 2598.023 + 38554 × 0.0915
    assert_eq!(totals.provincial_tax, dec!(6125.714));
    assert_eq!(totals.total_tax_payable, dec!(21503.029));
    // Negative sign: balance owing.
    assert_eq!(totals.refund_or_owing, dec!(-11503.029));
}

#[test]
fn refund_scenario() {
    // Heavy withholding plus deductions tips the outcome into a refund.
    let mut tax_return = TaxReturn::new();
    tax_return
        .set_identity("Alice Johnson", "345-678-901")
        .unwrap();
    tax_return
        .add_employment_income(dec!(70000), dec!(20000))
        .unwrap();
    tax_return.add_self_employment_income(dec!(20000)).unwrap();
    tax_return
        .add_deduction(Some(dec!(5000)), Some(dec!(1000)))
        .unwrap();

    tax_return.compute_taxes(&tax_data::schedules()).unwrap();

    let totals = tax_return.totals();
    assert_eq!(totals.total_income, dec!(90000));
    assert_eq!(totals.net_income, dec!(84000));
    assert_eq!(totals.federal_tax, dec!(14147.315));
    assert_eq!(totals.provincial_tax, dec!(5576.714));
    assert_eq!(totals.total_tax_payable, dec!(19724.029));
    // Positive sign: refund.
    assert_eq!(totals.refund_or_owing, dec!(275.971));
}

#[test]
fn multiple_slips_and_deductions_accumulate_before_compute() {
    let mut tax_return = TaxReturn::new();
    tax_return.set_identity("John Doe", "123-456-789").unwrap();
    tax_return
        .add_employment_income(dec!(40000), dec!(4000))
        .unwrap();
    tax_return
        .add_employment_income(dec!(15000), dec!(1000))
        .unwrap();
    tax_return.add_self_employment_income(dec!(20000)).unwrap();
    tax_return.add_deduction(Some(dec!(2000)), None).unwrap();
    tax_return.add_deduction(None, Some(dec!(500))).unwrap();

    tax_return.compute_taxes(&tax_data::schedules()).unwrap();

    let totals = tax_return.totals();
    assert_eq!(totals.total_income, dec!(75000));
    assert_eq!(totals.net_income, dec!(72500));
    // 8380.05 + 16633 × 0.205
    assert_eq!(totals.federal_tax, dec!(11789.815));
    // 2598.023 + 21054 × 0.0915
    assert_eq!(totals.provincial_tax, dec!(4524.464));
    assert_eq!(totals.refund_or_owing, dec!(-11314.279));
}

#[test]
fn deductions_exceeding_income_floor_taxable_income_at_zero() {
    let mut tax_return = TaxReturn::new();
    tax_return
        .add_employment_income(dec!(30000), dec!(3000))
        .unwrap();
    tax_return
        .add_deduction(Some(dec!(25000)), Some(dec!(10000)))
        .unwrap();

    tax_return.compute_taxes(&tax_data::schedules()).unwrap();

    let totals = tax_return.totals();
    assert_eq!(totals.net_income, dec!(-5000));
    assert_eq!(totals.taxable_income, dec!(0));
    assert_eq!(totals.federal_tax, dec!(0));
    assert_eq!(totals.provincial_tax, dec!(0));
    // All withholding comes back.
    assert_eq!(totals.refund_or_owing, dec!(3000));
}

#[test]
fn report_matches_summary_to_two_decimals() {
    let mut tax_return = TaxReturn::new();
    tax_return.set_identity("John Smith", "234-567-890").unwrap();
    tax_return
        .add_employment_income(dec!(60000), dec!(10000))
        .unwrap();
    tax_return.add_self_employment_income(dec!(30000)).unwrap();
    tax_return.compute_taxes(&tax_data::schedules()).unwrap();

    let report = tax_return.generate_report();

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Tax Summary Report for John Smith");
    assert_eq!(lines[2], "Total Income: $90000.00");
    assert_eq!(lines[3], "Net Income: $90000.00");
    assert_eq!(lines[4], "Taxable Income: $90000.00");
    assert_eq!(lines[5], "Federal Tax: $15377.32");
    assert_eq!(lines[6], "Provincial Tax: $6125.71");
    assert_eq!(lines[7], "Total Tax Payable: $21503.03");
    assert_eq!(lines[8], "Final Refund or Balance Owing: $-11503.03");
}

#[test]
fn unidentified_return_computes_with_empty_name_by_default() {
    let mut tax_return = TaxReturn::new();
    tax_return
        .add_employment_income(dec!(50000), dec!(8000))
        .unwrap();

    tax_return.compute_taxes(&tax_data::schedules()).unwrap();

    let report = tax_return.generate_report();
    assert!(report.starts_with("Tax Summary Report for \n"));
}

#[test]
fn strict_config_requires_identity_before_compute() {
    let mut tax_return = TaxReturn::with_config(ReturnConfig {
        require_identity: true,
    });
    tax_return
        .add_employment_income(dec!(50000), dec!(8000))
        .unwrap();

    let result = tax_return.compute_taxes(&tax_data::schedules());

    assert_eq!(result, Err(ValidationError::MissingIdentity));

    tax_return.set_identity("Jane Doe", "123-456-789").unwrap();
    assert!(tax_return.compute_taxes(&tax_data::schedules()).is_ok());
}
