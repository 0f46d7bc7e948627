//! Funding-structure breakdown for a SCOP acquisition: vendor loan vs employee
//! capital contribution.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ScopFinanceError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::ScopFinanceResult;

const HUNDRED: Decimal = dec!(100);

/// Input for the financing-structure breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingStructureInput {
    pub vendor_loan_principal: Money,
    pub employee_contribution: Money,
}

/// Output of the financing-structure breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingStructureOutput {
    /// Vendor loan plus employee contribution.
    pub total_financing: Money,
    /// Vendor loan share of the total, as a percentage. Zero when the total is zero.
    pub vendor_loan_pct: Percent,
    /// Employee contribution share of the total, as a percentage.
    pub employee_contribution_pct: Percent,
}

/// Break the acquisition funding down between the vendor loan and the
/// employee contribution.
pub fn financing_structure(
    input: &FinancingStructureInput,
) -> ScopFinanceResult<ComputationOutput<FinancingStructureOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_financing_structure_input(input)?;

    let total_financing = input.vendor_loan_principal + input.employee_contribution;

    let (vendor_loan_pct, employee_contribution_pct) = if total_financing.is_zero() {
        warnings.push("Total financing is zero; shares reported as 0%".into());
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            input.vendor_loan_principal / total_financing * HUNDRED,
            input.employee_contribution / total_financing * HUNDRED,
        )
    };

    let output = FinancingStructureOutput {
        total_financing,
        vendor_loan_pct,
        employee_contribution_pct,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Acquisition funding split — vendor loan vs employee contribution",
        &serde_json::json!({
            "vendor_loan_principal": input.vendor_loan_principal.to_string(),
            "employee_contribution": input.employee_contribution.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn validate_financing_structure_input(
    input: &FinancingStructureInput,
) -> ScopFinanceResult<()> {
    if input.vendor_loan_principal < Decimal::ZERO {
        return Err(ScopFinanceError::InvalidInput {
            field: "vendor_loan_principal".into(),
            reason: "Vendor loan principal cannot be negative".into(),
        });
    }
    if input.employee_contribution < Decimal::ZERO {
        return Err(ScopFinanceError::InvalidInput {
            field: "employee_contribution".into(),
            reason: "Employee contribution cannot be negative".into(),
        });
    }
    Ok(())
}
