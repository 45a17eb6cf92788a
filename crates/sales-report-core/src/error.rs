use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesReportError {
    #[error("Invalid input data: {field} — {reason}")]
    InvalidInputData { field: String, reason: String },

    #[error("Missing strategy: no {strategy} strategy supplied in the analyzer options")]
    MissingStrategy { strategy: String },

    #[error("Purchase record references unknown seller '{seller_id}'")]
    UnknownSeller { seller_id: String },

    #[error("Line item references unknown product '{sku}'")]
    UnknownProduct { sku: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SalesReportError {
    fn from(e: serde_json::Error) -> Self {
        SalesReportError::SerializationError(e.to_string())
    }
}
