use clap::Args;

use sales_report_core::analyzer::{analyze_sales, AnalyzerOptions};
use sales_report_core::types::{ComputationOutput, SalesData, SellerReport};

use crate::input;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a JSON file with sellers, products, purchase_records and
    /// customers; omit to read the bundle from stdin
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_analyze(
    args: AnalyzeArgs,
) -> Result<ComputationOutput<Vec<SellerReport>>, Box<dyn std::error::Error>> {
    let data: SalesData = input::load(args.input.as_deref())?;
    let report = analyze_sales(&data, &AnalyzerOptions::standard())?;
    Ok(report)
}
