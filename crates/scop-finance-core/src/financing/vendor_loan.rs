//! Vendor-loan amortization for seller-financed SCOP acquisitions.
//!
//! Standard annuity method: the total annual payment is constant and the split
//! between interest and principal shifts as the balance declines. All math uses
//! `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ScopFinanceError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::ScopFinanceResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Absolute balance below which the final remaining balance snaps to zero.
pub const BALANCE_TOLERANCE: Decimal = dec!(0.01);

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Input for a vendor-loan amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorLoanInput {
    /// Loan principal.
    pub principal: Money,
    /// Annual interest rate as a percentage (2.5 = 2.5%).
    pub annual_rate_pct: Percent,
    /// Loan term in whole years.
    pub term_years: u32,
    /// Override the final-balance snap tolerance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_tolerance: Option<Decimal>,
}

/// One year of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-indexed year.
    pub year: u32,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub total_payment: Money,
    pub remaining_balance: Money,
}

/// Output of the amortization simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorLoanOutput {
    /// Constant annual payment (annuity).
    pub annual_payment: Money,
    /// Interest paid over the life of the loan.
    pub total_interest: Money,
    /// Principal plus total interest.
    pub total_paid: Money,
    /// One row per year, ascending.
    pub schedule: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the full year-by-year amortization schedule for a vendor loan.
pub fn build_amortization_schedule(
    input: &VendorLoanInput,
) -> ScopFinanceResult<ComputationOutput<VendorLoanOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_vendor_loan_input(input)?;

    let principal = input.principal;
    let rate = input.annual_rate_pct / HUNDRED;
    let years = input.term_years;
    let tolerance = input.balance_tolerance.unwrap_or(BALANCE_TOLERANCE);

    // (1 + r)^n by repeated multiplication; n is a small whole number of years.
    let one_plus_r = Decimal::ONE + rate;
    let mut compound = Decimal::ONE;
    for _ in 0..years {
        compound *= one_plus_r;
    }

    let annual_payment = if rate.is_zero() {
        // Straight-line; the annuity denominator would be zero.
        principal / Decimal::from(years)
    } else {
        let denominator = compound - Decimal::ONE;
        if denominator.is_zero() {
            return Err(ScopFinanceError::DivisionByZero {
                context: "annuity factor".into(),
            });
        }
        principal * rate * compound / denominator
    };

    let mut schedule: Vec<AmortizationRow> = Vec::with_capacity(years as usize);
    let mut remaining_balance = principal;
    let mut total_interest = Decimal::ZERO;

    for year in 1..=years {
        let interest_portion = remaining_balance * rate;
        let principal_portion = annual_payment - interest_portion;
        remaining_balance -= principal_portion;

        if remaining_balance.abs() < tolerance {
            remaining_balance = Decimal::ZERO;
        }

        total_interest += interest_portion;

        schedule.push(AmortizationRow {
            year,
            principal_portion,
            interest_portion,
            total_payment: annual_payment,
            remaining_balance,
        });
    }

    let output = VendorLoanOutput {
        annual_payment,
        total_interest,
        total_paid: principal + total_interest,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Constant-payment annuity amortization, annual periods",
        &serde_json::json!({
            "principal": principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "term_years": years,
            "balance_tolerance": tolerance.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_vendor_loan_input(input: &VendorLoanInput) -> ScopFinanceResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(ScopFinanceError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(ScopFinanceError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if input.term_years == 0 {
        return Err(ScopFinanceError::InvalidInput {
            field: "term_years".into(),
            reason: "Term must be at least 1 year".into(),
        });
    }
    if let Some(tolerance) = input.balance_tolerance {
        if tolerance < Decimal::ZERO {
            return Err(ScopFinanceError::InvalidInput {
                field: "balance_tolerance".into(),
                reason: "Tolerance cannot be negative".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Helper: the worked vendor-loan scenario (500k at 2.5% over 7 years).
    fn vendor_loan() -> VendorLoanInput {
        VendorLoanInput {
            principal: dec!(500_000),
            annual_rate_pct: dec!(2.5),
            term_years: 7,
            balance_tolerance: None,
        }
    }

    fn close(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
        (a - b).abs() < tolerance
    }

    // -----------------------------------------------------------------------
    // 1. Worked scenario: annuity payment and first-year split
    // -----------------------------------------------------------------------
    #[test]
    fn test_vendor_loan_annuity_payment() {
        let result = build_amortization_schedule(&vendor_loan()).unwrap();
        let out = &result.result;

        // 500000 * 0.025 * 1.025^7 / (1.025^7 - 1)
        assert!(
            close(out.annual_payment, dec!(78_747.71), dec!(0.01)),
            "Annual payment {} should be ~78747.71",
            out.annual_payment
        );

        let first = &out.schedule[0];
        assert_eq!(first.year, 1);
        assert_eq!(first.interest_portion, dec!(12_500.000));
        assert!(close(
            first.principal_portion,
            out.annual_payment - dec!(12_500),
            dec!(0.001)
        ));
    }

    // -----------------------------------------------------------------------
    // 2. Schedule shape: n rows, years ascending, final balance zero
    // -----------------------------------------------------------------------
    #[test]
    fn test_schedule_shape_and_final_balance() {
        let out = build_amortization_schedule(&vendor_loan()).unwrap().result;

        assert_eq!(out.schedule.len(), 7);
        for (i, row) in out.schedule.iter().enumerate() {
            assert_eq!(row.year as usize, i + 1);
        }
        assert_eq!(out.schedule.last().unwrap().remaining_balance, dec!(0));
    }

    // -----------------------------------------------------------------------
    // 3. Annuity invariants: constant payment, principal sums to the loan
    // -----------------------------------------------------------------------
    #[test]
    fn test_payment_constant_across_rows() {
        let out = build_amortization_schedule(&vendor_loan()).unwrap().result;
        for row in &out.schedule {
            assert_eq!(row.total_payment, out.annual_payment);
        }
    }

    #[test]
    fn test_principal_portions_sum_to_principal() {
        let out = build_amortization_schedule(&vendor_loan()).unwrap().result;
        let repaid: Decimal = out.schedule.iter().map(|r| r.principal_portion).sum();
        assert!(
            close(repaid, dec!(500_000), dec!(0.01)),
            "Principal portions sum to {repaid}, expected ~500000"
        );
    }

    #[test]
    fn test_principal_grows_and_interest_shrinks() {
        let out = build_amortization_schedule(&vendor_loan()).unwrap().result;
        for pair in out.schedule.windows(2) {
            assert!(pair[1].principal_portion > pair[0].principal_portion);
            assert!(pair[1].interest_portion < pair[0].interest_portion);
        }
    }

    // -----------------------------------------------------------------------
    // 4. Zero-rate loans amortize straight-line
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_rate_straight_line() {
        let input = VendorLoanInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(0),
            term_years: 5,
            balance_tolerance: None,
        };
        let out = build_amortization_schedule(&input).unwrap().result;

        assert_eq!(out.annual_payment, dec!(20_000));
        assert_eq!(out.total_interest, dec!(0));
        assert_eq!(out.total_paid, dec!(100_000));
        for row in &out.schedule {
            assert_eq!(row.interest_portion, dec!(0));
            assert_eq!(row.principal_portion, dec!(20_000));
            assert_eq!(row.total_payment, dec!(20_000));
        }
        assert_eq!(out.schedule.last().unwrap().remaining_balance, dec!(0));
    }

    // -----------------------------------------------------------------------
    // 5. Single-year loan repays everything at once
    // -----------------------------------------------------------------------
    #[test]
    fn test_single_year_term() {
        let input = VendorLoanInput {
            principal: dec!(50_000),
            annual_rate_pct: dec!(4),
            term_years: 1,
            balance_tolerance: None,
        };
        let out = build_amortization_schedule(&input).unwrap().result;

        assert_eq!(out.schedule.len(), 1);
        // One payment of principal plus one year of interest
        assert_eq!(out.annual_payment, dec!(52_000));
        assert_eq!(out.schedule[0].interest_portion, dec!(2_000.0));
        assert_eq!(out.schedule[0].remaining_balance, dec!(0));
    }

    // -----------------------------------------------------------------------
    // 6. Tolerance override controls the final snap
    // -----------------------------------------------------------------------
    #[test]
    fn test_tolerance_override() {
        // 100000 / 3 rounds to 33333.33…33 at 28 significant digits, so three
        // payments leave exactly 1e-23 outstanding. Zero tolerance must let
        // that residual through; the default tolerance must snap it to zero.
        let input = VendorLoanInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(0),
            term_years: 3,
            balance_tolerance: Some(dec!(0)),
        };
        let out = build_amortization_schedule(&input).unwrap().result;
        let residual = out.schedule.last().unwrap().remaining_balance;
        assert!(
            !residual.is_zero(),
            "Zero tolerance must not snap the residual"
        );
        assert!(
            residual.abs() < BALANCE_TOLERANCE,
            "Residual {residual} should be tiny even unsnapped"
        );

        let mut snapped = input.clone();
        snapped.balance_tolerance = None;
        let out = build_amortization_schedule(&snapped).unwrap().result;
        assert_eq!(out.schedule.last().unwrap().remaining_balance, dec!(0));
    }

    // -----------------------------------------------------------------------
    // 7. Validation rejections
    // -----------------------------------------------------------------------
    #[test]
    fn test_rejects_invalid_inputs() {
        let mut input = vendor_loan();
        input.principal = dec!(0);
        assert!(build_amortization_schedule(&input).is_err());

        let mut input = vendor_loan();
        input.annual_rate_pct = dec!(-1);
        assert!(build_amortization_schedule(&input).is_err());

        let mut input = vendor_loan();
        input.term_years = 0;
        assert!(build_amortization_schedule(&input).is_err());

        let mut input = vendor_loan();
        input.balance_tolerance = Some(dec!(-0.01));
        assert!(build_amortization_schedule(&input).is_err());
    }
}
