use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use scop_finance_core::financing::structure::{financing_structure, FinancingStructureInput};
use scop_finance_core::financing::vendor_loan::{build_amortization_schedule, VendorLoanInput};

use crate::input;

/// Arguments for the vendor-loan amortization schedule
#[derive(Args)]
pub struct AmortizationArgs {
    /// Path to a JSON file with the full input record (flags are ignored)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 2.5)
    #[arg(long, default_value = "0")]
    pub rate_pct: Decimal,

    /// Loan term in whole years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Override the final-balance snap tolerance
    #[arg(long)]
    pub balance_tolerance: Option<Decimal>,
}

/// Arguments for the funding-structure breakdown
#[derive(Args)]
pub struct FinancingStructureArgs {
    /// Vendor loan principal
    #[arg(long)]
    pub vendor_loan: Decimal,

    /// Employee capital contribution
    #[arg(long, default_value = "0")]
    pub employee_contribution: Decimal,
}

pub fn run_amortization(args: AmortizationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: VendorLoanInput = match input::load_typed(&args.input)? {
        Some(record) => record,
        None => {
            let principal = args
                .principal
                .ok_or("--principal is required unless --input or piped JSON is given")?;
            let term_years = args
                .term_years
                .ok_or("--term-years is required unless --input or piped JSON is given")?;

            VendorLoanInput {
                principal,
                annual_rate_pct: args.rate_pct,
                term_years,
                balance_tolerance: args.balance_tolerance,
            }
        }
    };

    let output = build_amortization_schedule(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_financing_structure(
    args: FinancingStructureArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let input = FinancingStructureInput {
        vendor_loan_principal: args.vendor_loan,
        employee_contribution: args.employee_contribution,
    };

    let output = financing_structure(&input)?;
    Ok(serde_json::to_value(output)?)
}
