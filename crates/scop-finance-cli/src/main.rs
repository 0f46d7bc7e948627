mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::financing::{AmortizationArgs, FinancingStructureArgs};
use commands::tax::TaxCompareArgs;

/// SCOP financial calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "scopfi",
    version,
    about = "Financial calculations for French worker cooperatives (SCOP)",
    long_about = "A CLI for SCOP financial calculations with decimal precision. \
                  Compares corporate tax (IS) under the cooperative regime against \
                  the standard regime, builds vendor-loan amortization schedules, \
                  and breaks down acquisition funding structures."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare IS due under the SCOP regime vs the standard regime
    TaxCompare(TaxCompareArgs),
    /// Build a vendor-loan amortization schedule (constant-payment annuity)
    Amortization(AmortizationArgs),
    /// Break down acquisition funding between vendor loan and employee contribution
    FinancingStructure(FinancingStructureArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::TaxCompare(args) => commands::tax::run_tax_compare(args),
        Commands::Amortization(args) => commands::financing::run_amortization(args),
        Commands::FinancingStructure(args) => commands::financing::run_financing_structure(args),
        Commands::Version => {
            println!("scopfi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
