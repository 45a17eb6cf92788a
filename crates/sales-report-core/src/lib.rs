pub mod analyzer;
pub mod bonus;
pub mod error;
pub mod revenue;
pub mod types;

pub use analyzer::{analyze_sales, AnalyzerOptions};
pub use bonus::{BonusStrategy, ProfitRankBonus};
pub use error::SalesReportError;
pub use revenue::{DiscountedRevenue, RevenueStrategy};
pub use types::*;

/// Standard result type for all sales-report operations
pub type SalesReportResult<T> = Result<T, SalesReportError>;
