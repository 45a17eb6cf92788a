use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages on a 0–100 scale (a 25% discount is 25). Never as fractions.
pub type Percent = Decimal;

/// Round a monetary value to 2 decimal places, half away from zero.
///
/// This is the single rounding rule of the crate; every monetary field in
/// the final report goes through it exactly once.
pub fn round_money(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Input entities
// ---------------------------------------------------------------------------

/// A seller on the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A catalog entry, keyed by SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Catalog category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cost of acquiring one unit
    pub purchase_price: Money,
}

/// One product line within a purchase record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    /// Discount applied to this line, in percent (0–100)
    pub discount: Percent,
    /// List price per unit before discount
    pub sale_price: Money,
    pub quantity: u64,
}

/// One receipt: a seller reference, a total, and its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub seller_id: String,
    /// Total amount of the receipt as charged
    pub total_amount: Money,
    pub items: Vec<LineItem>,
}

/// A customer. Required for a complete data bundle, never read during
/// aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// The four-collection input bundle for one analyzer run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
    pub customers: Vec<Customer>,
}

// ---------------------------------------------------------------------------
// Working state and output
// ---------------------------------------------------------------------------

/// Running totals for one seller during the aggregation pass.
///
/// `products_sold` is a BTreeMap so iteration order is ascending SKU,
/// which pins the tie order among equally sold products and keeps the
/// whole pipeline deterministic.
#[derive(Debug, Clone)]
pub struct SellerStats {
    pub seller_id: String,
    pub name: String,
    pub revenue: Money,
    pub profit: Money,
    pub sales_count: u64,
    pub products_sold: BTreeMap<String, u64>,
}

/// One entry in a seller's best-selling list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// The final per-seller report row. Monetary fields are rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: Money,
    pub profit: Money,
    pub sales_count: u64,
    /// Best-selling SKUs by cumulative quantity, at most 10
    pub top_products: Vec<TopProduct>,
    pub bonus: Money,
}

// ---------------------------------------------------------------------------
// Computation envelope
// ---------------------------------------------------------------------------

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(10.005)), dec!(10.01));
        assert_eq!(round_money(dec!(2.674)), dec!(2.67));
        assert_eq!(round_money(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_round_money_away_from_zero() {
        assert_eq!(round_money(dec!(-10.005)), dec!(-10.01));
        assert_eq!(round_money(dec!(-2.674)), dec!(-2.67));
    }

    #[test]
    fn test_round_money_already_exact() {
        assert_eq!(round_money(dec!(20)), dec!(20));
        assert_eq!(round_money(dec!(1.5)), dec!(1.5));
    }

    #[test]
    fn test_bundle_deserializes_from_json() {
        let json = r#"{
            "sellers": [
                {"id": "S1", "first_name": "Alice", "last_name": "Johnson"}
            ],
            "products": [
                {"sku": "SKU_A", "name": "Widget", "purchase_price": 5}
            ],
            "purchase_records": [
                {
                    "receipt_id": "R1",
                    "date": "2024-03-01",
                    "customer_id": "C1",
                    "seller_id": "S1",
                    "total_amount": 20.5,
                    "items": [
                        {"sku": "SKU_A", "discount": 10, "sale_price": 10.25, "quantity": 2}
                    ]
                }
            ],
            "customers": [
                {"id": "C1", "first_name": "Some", "last_name": "Customer"}
            ]
        }"#;

        let data: SalesData = serde_json::from_str(json).unwrap();

        assert_eq!(data.products[0].purchase_price, dec!(5));
        assert!(data.products[0].category.is_none());

        let record = &data.purchase_records[0];
        assert_eq!(record.total_amount, dec!(20.5));
        assert_eq!(record.receipt_id.as_deref(), Some("R1"));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(record.items[0].discount, dec!(10));
        assert_eq!(record.items[0].sale_price, dec!(10.25));
        assert_eq!(record.items[0].quantity, 2);
    }

    #[test]
    fn test_bundle_without_receipt_metadata_deserializes() {
        let json = r#"{
            "seller_id": "S1",
            "total_amount": 7,
            "items": []
        }"#;

        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert!(record.receipt_id.is_none());
        assert!(record.date.is_none());
        assert!(record.customer_id.is_none());
    }

    #[test]
    fn test_bundle_missing_collection_is_rejected_by_serde() {
        let json = r#"{
            "sellers": [],
            "purchase_records": [],
            "customers": []
        }"#;

        let err = serde_json::from_str::<SalesData>(json).unwrap_err();
        assert!(err.to_string().contains("products"), "got: {err}");
    }
}
