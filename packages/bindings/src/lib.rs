use napi::Result as NapiResult;
use napi_derive::napi;

use sales_report_core::analyzer::{analyze_sales, AnalyzerOptions};
use sales_report_core::types::SalesData;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Build the per-seller sales performance report with the standard
/// strategies. Takes the JSON data bundle and returns the report
/// envelope, both as JSON strings.
#[napi]
pub fn analyze_sales_data(input_json: String) -> NapiResult<String> {
    let data: SalesData = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = analyze_sales(&data, &AnalyzerOptions::standard()).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
