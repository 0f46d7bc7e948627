use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use scop_finance_core::financing::{structure, vendor_loan};
use scop_finance_core::tax::corporate;

// ===========================================================================
// IS regime comparison
// ===========================================================================

#[test]
fn test_tax_comparison_worked_scop_case() {
    // Reference: 250k profit, 50% to employees, 15% to reserves, agreement on.
    // Cooperative base 87 500 -> tax 17 625; standard tax on 250k -> 58 250.
    let input = corporate::TaxComparisonInput {
        total_profit: dec!(250_000),
        employee_share_pct: dec!(50),
        reserve_allocation_pct: dec!(15),
        has_derogatory_agreement: true,
        schedule: None,
    };
    let result = corporate::compare_tax_regimes(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.tax_cooperative, dec!(17_625.00));
    assert_eq!(out.tax_standard, dec!(58_250.00));
    assert_eq!(out.tax_savings, dec!(40_625.00));
    assert_eq!(result.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_tax_comparison_json_round_trip() {
    // The bindings and the CLI exchange inputs as JSON; Decimal fields
    // serialize as strings (serde-with-str).
    let json = r#"{
        "total_profit": "250000",
        "employee_share_pct": "50",
        "reserve_allocation_pct": "15",
        "has_derogatory_agreement": true
    }"#;
    let input: corporate::TaxComparisonInput = serde_json::from_str(json).unwrap();
    let result = corporate::compare_tax_regimes(&input).unwrap();

    let serialized = serde_json::to_value(&result).unwrap();
    assert_eq!(
        serialized["result"]["tax_savings"].as_str(),
        Some("40625.00")
    );
    assert!(serialized["methodology"].is_string());
}

#[test]
fn test_tax_comparison_small_profit_stays_in_reduced_bracket() {
    let input = corporate::TaxComparisonInput {
        total_profit: dec!(40_000),
        employee_share_pct: dec!(25),
        reserve_allocation_pct: dec!(0),
        has_derogatory_agreement: true,
        schedule: None,
    };
    let out = corporate::compare_tax_regimes(&input).unwrap().result;

    // Both bases sit below 42 500: everything at 15%
    assert_eq!(out.tax_standard, dec!(6_000.00));
    assert_eq!(out.taxable_income_cooperative, dec!(30_000));
    assert_eq!(out.tax_cooperative, dec!(4_500.00));
}

// ===========================================================================
// Vendor-loan amortization
// ===========================================================================

#[test]
fn test_amortization_full_schedule_consistency() {
    let input = vendor_loan::VendorLoanInput {
        principal: dec!(500_000),
        annual_rate_pct: dec!(2.5),
        term_years: 7,
        balance_tolerance: None,
    };
    let out = vendor_loan::build_amortization_schedule(&input).unwrap().result;

    assert_eq!(out.schedule.len(), 7);
    assert_eq!(out.schedule[0].interest_portion, dec!(12_500));
    assert_eq!(out.schedule.last().unwrap().remaining_balance, dec!(0));

    // Each row's split must reconstruct the constant payment, and each balance
    // must chain from the previous one.
    let mut balance = input.principal;
    for row in &out.schedule {
        assert_eq!(row.principal_portion + row.interest_portion, row.total_payment);
        let expected = balance - row.principal_portion;
        if row.remaining_balance.is_zero() {
            assert!(expected.abs() < dec!(0.01));
        } else {
            assert_eq!(row.remaining_balance, expected);
        }
        balance = row.remaining_balance;
    }

    assert_eq!(out.total_paid, dec!(500_000) + out.total_interest);
}

#[test]
fn test_amortization_zero_rate_is_straight_line() {
    let input = vendor_loan::VendorLoanInput {
        principal: dec!(100_000),
        annual_rate_pct: dec!(0),
        term_years: 5,
        balance_tolerance: None,
    };
    let out = vendor_loan::build_amortization_schedule(&input).unwrap().result;

    for row in &out.schedule {
        assert_eq!(row.interest_portion, Decimal::ZERO);
        assert_eq!(row.total_payment, dec!(20_000));
    }
}

// ===========================================================================
// Funding structure
// ===========================================================================

#[test]
fn test_financing_structure_totals() {
    let input = structure::FinancingStructureInput {
        vendor_loan_principal: dec!(500_000),
        employee_contribution: dec!(150_000),
    };
    let out = structure::financing_structure(&input).unwrap().result;

    assert_eq!(out.total_financing, dec!(650_000));
    assert!(out.vendor_loan_pct > out.employee_contribution_pct);
}
