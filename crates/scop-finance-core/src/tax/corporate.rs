//! Corporate tax (IS) comparison between the SCOP cooperative regime and the
//! standard regime.
//!
//! Under a derogatory participation agreement, profit shared with employees and
//! profit allocated to the legal reserve are exempt from the taxable base. The
//! same two-bracket progressive schedule is then applied to both regimes. All
//! math uses `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ScopFinanceError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::ScopFinanceResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Taxable income threshold below which the reduced IS rate applies.
pub const TAX_BRACKET_LIMIT: Decimal = dec!(42500);
/// Reduced IS rate on the first bracket.
pub const REDUCED_TAX_RATE: Decimal = dec!(0.15);
/// Standard IS rate above the bracket limit.
pub const STANDARD_TAX_RATE: Decimal = dec!(0.25);

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// The two-bracket progressive IS schedule. Defaults to the current statutory
/// parameters; overridable so a rate change does not require a logic change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Upper bound of the reduced-rate bracket.
    pub bracket_limit: Money,
    /// Rate applied up to `bracket_limit`.
    pub reduced_rate: Rate,
    /// Rate applied to income above `bracket_limit`.
    pub standard_rate: Rate,
}

impl Default for TaxSchedule {
    fn default() -> Self {
        TaxSchedule {
            bracket_limit: TAX_BRACKET_LIMIT,
            reduced_rate: REDUCED_TAX_RATE,
            standard_rate: STANDARD_TAX_RATE,
        }
    }
}

/// Input for the SCOP vs standard-regime tax comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxComparisonInput {
    /// Accounting profit before tax.
    pub total_profit: Money,
    /// Share of profit distributed to employees, as a percentage of profit.
    pub employee_share_pct: Percent,
    /// Share of profit allocated to reserves, as a percentage of profit.
    pub reserve_allocation_pct: Percent,
    /// Whether a derogatory participation agreement is in force. Without it the
    /// cooperative taxable base is the full profit, same as the standard regime.
    pub has_derogatory_agreement: bool,
    /// Override the statutory schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<TaxSchedule>,
}

/// Output of the tax regime comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxComparisonOutput {
    /// IS due under the cooperative regime.
    pub tax_cooperative: Money,
    /// IS due under the standard regime.
    pub tax_standard: Money,
    /// Taxable base under the cooperative regime (exemptions deducted,
    /// floored at zero).
    pub taxable_income_cooperative: Money,
    /// Taxable base under the standard regime (always the full profit).
    pub taxable_income_standard: Money,
    /// Profit amount distributed to employees.
    pub employee_amount: Money,
    /// Profit amount allocated to reserves.
    pub reserve_amount: Money,
    /// Cooperative tax / total profit, as a ratio.
    pub effective_rate: Rate,
    /// Standard tax minus cooperative tax.
    pub tax_savings: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Tax due on `taxable_income` under the two-bracket progressive schedule.
pub fn progressive_tax(taxable_income: Money, schedule: &TaxSchedule) -> Money {
    if taxable_income > schedule.bracket_limit {
        schedule.bracket_limit * schedule.reduced_rate
            + (taxable_income - schedule.bracket_limit) * schedule.standard_rate
    } else {
        taxable_income * schedule.reduced_rate
    }
}

/// Compare IS due under the SCOP cooperative regime against the standard regime.
pub fn compare_tax_regimes(
    input: &TaxComparisonInput,
) -> ScopFinanceResult<ComputationOutput<TaxComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_tax_comparison_input(input)?;

    let schedule = input.schedule.clone().unwrap_or_default();
    let profit = input.total_profit;

    let employee_amount = profit * input.employee_share_pct / HUNDRED;
    let reserve_amount = profit * input.reserve_allocation_pct / HUNDRED;

    // The sum of the two shares is deliberately left unbounded; the base floors
    // at zero and the caller sees the warning.
    if input.employee_share_pct + input.reserve_allocation_pct > HUNDRED {
        warnings.push(format!(
            "Employee share {}% and reserve allocation {}% sum past 100%",
            input.employee_share_pct, input.reserve_allocation_pct
        ));
    }

    let taxable_income_cooperative = if input.has_derogatory_agreement {
        let base = profit - employee_amount - reserve_amount;
        if base < Decimal::ZERO {
            warnings.push(
                "Exemptions exceed profit; cooperative taxable base floored at zero".into(),
            );
            Decimal::ZERO
        } else {
            base
        }
    } else {
        warnings.push(
            "No derogatory participation agreement; cooperative base carries no exemption".into(),
        );
        profit
    };

    let taxable_income_standard = profit;

    let tax_cooperative = progressive_tax(taxable_income_cooperative, &schedule);
    let tax_standard = progressive_tax(taxable_income_standard, &schedule);

    let output = TaxComparisonOutput {
        tax_cooperative,
        tax_standard,
        taxable_income_cooperative,
        taxable_income_standard,
        employee_amount,
        reserve_amount,
        effective_rate: tax_cooperative / profit,
        tax_savings: tax_standard - tax_cooperative,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Two-bracket progressive IS — SCOP cooperative regime vs standard regime",
        &serde_json::json!({
            "total_profit": profit.to_string(),
            "employee_share_pct": input.employee_share_pct.to_string(),
            "reserve_allocation_pct": input.reserve_allocation_pct.to_string(),
            "has_derogatory_agreement": input.has_derogatory_agreement,
            "bracket_limit": schedule.bracket_limit.to_string(),
            "reduced_rate": schedule.reduced_rate.to_string(),
            "standard_rate": schedule.standard_rate.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_tax_comparison_input(input: &TaxComparisonInput) -> ScopFinanceResult<()> {
    if input.total_profit <= Decimal::ZERO {
        return Err(ScopFinanceError::InvalidInput {
            field: "total_profit".into(),
            reason: "Total profit must be positive".into(),
        });
    }
    if input.employee_share_pct < Decimal::ZERO || input.employee_share_pct > HUNDRED {
        return Err(ScopFinanceError::InvalidInput {
            field: "employee_share_pct".into(),
            reason: "Employee share must be between 0 and 100".into(),
        });
    }
    if input.reserve_allocation_pct < Decimal::ZERO || input.reserve_allocation_pct > HUNDRED {
        return Err(ScopFinanceError::InvalidInput {
            field: "reserve_allocation_pct".into(),
            reason: "Reserve allocation must be between 0 and 100".into(),
        });
    }
    if let Some(schedule) = &input.schedule {
        if schedule.bracket_limit < Decimal::ZERO {
            return Err(ScopFinanceError::InvalidInput {
                field: "schedule.bracket_limit".into(),
                reason: "Bracket limit cannot be negative".into(),
            });
        }
        if schedule.reduced_rate < Decimal::ZERO || schedule.reduced_rate > Decimal::ONE {
            return Err(ScopFinanceError::InvalidInput {
                field: "schedule.reduced_rate".into(),
                reason: "Reduced rate must be between 0 and 1".into(),
            });
        }
        if schedule.standard_rate < Decimal::ZERO || schedule.standard_rate > Decimal::ONE {
            return Err(ScopFinanceError::InvalidInput {
                field: "schedule.standard_rate".into(),
                reason: "Standard rate must be between 0 and 1".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
