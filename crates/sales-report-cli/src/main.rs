mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analyze::AnalyzeArgs;

/// Per-seller sales performance reports from raw purchase data
#[derive(Parser)]
#[command(
    name = "sra",
    version,
    about = "Per-seller sales performance reports from raw purchase data",
    long_about = "Builds a per-seller sales performance report from a JSON bundle of \
                  sellers, products, purchase records and customers: total revenue, \
                  total profit, sales count, top-10 products, and a profit-rank bonus \
                  per seller, with decimal precision."
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
    /// Build the sales performance report from a JSON data bundle
    Analyze(AnalyzeArgs),
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

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Version => {
            println!("sra {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(report) => {
            output::format_output(&cli.output, &report);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
