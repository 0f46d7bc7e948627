use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use scop_finance_core::tax::corporate::{
    compare_tax_regimes, TaxComparisonInput, TaxSchedule, REDUCED_TAX_RATE, STANDARD_TAX_RATE,
    TAX_BRACKET_LIMIT,
};

use crate::input;

/// Arguments for the IS regime comparison
#[derive(Args)]
pub struct TaxCompareArgs {
    /// Path to a JSON file with the full input record (flags are ignored)
    #[arg(long)]
    pub input: Option<String>,

    /// Accounting profit before tax
    #[arg(long)]
    pub total_profit: Option<Decimal>,

    /// Employee profit share (percent of profit)
    #[arg(long, default_value = "0")]
    pub employee_share_pct: Decimal,

    /// Reserve allocation (percent of profit)
    #[arg(long, default_value = "0")]
    pub reserve_allocation_pct: Decimal,

    /// Derogatory participation agreement in force (enables the exemption)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub agreement: bool,

    /// Override the reduced-rate bracket limit
    #[arg(long)]
    pub bracket_limit: Option<Decimal>,

    /// Override the reduced IS rate (as a decimal, e.g. 0.15)
    #[arg(long)]
    pub reduced_rate: Option<Decimal>,

    /// Override the standard IS rate (as a decimal, e.g. 0.25)
    #[arg(long)]
    pub standard_rate: Option<Decimal>,
}

pub fn run_tax_compare(args: TaxCompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: TaxComparisonInput = match input::load_typed(&args.input)? {
        Some(record) => record,
        None => {
            let total_profit = args
                .total_profit
                .ok_or("--total-profit is required unless --input or piped JSON is given")?;

            let schedule = if args.bracket_limit.is_some()
                || args.reduced_rate.is_some()
                || args.standard_rate.is_some()
            {
                Some(TaxSchedule {
                    bracket_limit: args.bracket_limit.unwrap_or(TAX_BRACKET_LIMIT),
                    reduced_rate: args.reduced_rate.unwrap_or(REDUCED_TAX_RATE),
                    standard_rate: args.standard_rate.unwrap_or(STANDARD_TAX_RATE),
                })
            } else {
                None
            };

            TaxComparisonInput {
                total_profit,
                employee_share_pct: args.employee_share_pct,
                reserve_allocation_pct: args.reserve_allocation_pct,
                has_derogatory_agreement: args.agreement,
                schedule,
            }
        }
    };

    let output = compare_tax_regimes(&input)?;
    Ok(serde_json::to_value(output)?)
}
