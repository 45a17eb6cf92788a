pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use sales_report_core::types::{ComputationOutput, SellerReport};

use crate::OutputFormat;

/// The envelope every formatter renders.
pub type Report = ComputationOutput<Vec<SellerReport>>;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, report: &Report) {
    match format {
        OutputFormat::Json => json::print_json(report),
        OutputFormat::Table => table::print_table(report),
        OutputFormat::Csv => csv_out::print_csv(report),
        OutputFormat::Minimal => minimal::print_minimal(report),
    }
}
