use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use rust_decimal::Decimal;
use serde_json::json;

use crate::bonus::{BonusStrategy, ProfitRankBonus};
use crate::error::SalesReportError;
use crate::revenue::{DiscountedRevenue, RevenueStrategy};
use crate::types::{
    round_money, with_metadata, ComputationOutput, Product, SalesData, SellerReport, SellerStats,
    TopProduct,
};
use crate::SalesReportResult;

/// Maximum number of entries in a seller's best-selling list.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Strategy bundle for one analyzer run.
///
/// Both strategies must be present; `analyze_sales` rejects a partial
/// bundle with [`SalesReportError::MissingStrategy`]. The fields are
/// optional because the CLI and the bindings assemble options at runtime.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions<R = DiscountedRevenue, B = ProfitRankBonus> {
    pub revenue: Option<R>,
    pub bonus: Option<B>,
}

impl AnalyzerOptions {
    /// The stock strategies: discounted list-price revenue and
    /// profit-rank bonuses.
    pub fn standard() -> Self {
        AnalyzerOptions {
            revenue: Some(DiscountedRevenue),
            bonus: Some(ProfitRankBonus),
        }
    }
}

impl<R, B> AnalyzerOptions<R, B> {
    /// Options with both strategies supplied by the caller.
    pub fn with_strategies(revenue: R, bonus: B) -> Self {
        AnalyzerOptions {
            revenue: Some(revenue),
            bonus: Some(bonus),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the per-seller sales performance report.
///
/// One pass over the purchase records folds revenue, profit and unit
/// counts into per-seller accumulators; sellers are then ranked by
/// descending profit and each receives a rank-based bonus and its
/// top-10 product list. Monetary outputs are rounded to 2 dp.
///
/// Fails fast: an empty input collection, a missing strategy, or a
/// dangling seller/product reference aborts the run with no partial
/// report.
pub fn analyze_sales<R, B>(
    data: &SalesData,
    options: &AnalyzerOptions<R, B>,
) -> SalesReportResult<ComputationOutput<Vec<SellerReport>>>
where
    R: RevenueStrategy,
    B: BonusStrategy,
{
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validate ---
    ensure_non_empty(data.sellers.len(), "sellers")?;
    ensure_non_empty(data.products.len(), "products")?;
    ensure_non_empty(data.purchase_records.len(), "purchase_records")?;
    ensure_non_empty(data.customers.len(), "customers")?;

    let revenue_strategy =
        options
            .revenue
            .as_ref()
            .ok_or_else(|| SalesReportError::MissingStrategy {
                strategy: "revenue".into(),
            })?;
    let bonus_strategy = options
        .bonus
        .as_ref()
        .ok_or_else(|| SalesReportError::MissingStrategy {
            strategy: "bonus".into(),
        })?;

    // --- Seed accumulators, one per seller in roster order ---
    let mut stats: Vec<SellerStats> = data
        .sellers
        .iter()
        .map(|seller| SellerStats {
            seller_id: seller.id.clone(),
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: BTreeMap::new(),
        })
        .collect();

    // --- Index sellers and products for O(1) lookup ---
    // Duplicate ids and SKUs keep the last entry, with a warning.
    let mut seller_slots: HashMap<&str, usize> = HashMap::with_capacity(data.sellers.len());
    for (slot, seller) in data.sellers.iter().enumerate() {
        if seller_slots.insert(seller.id.as_str(), slot).is_some() {
            warnings.push(format!(
                "Duplicate seller id '{}' in roster; the last entry wins",
                seller.id
            ));
        }
    }

    let mut product_index: HashMap<&str, &Product> = HashMap::with_capacity(data.products.len());
    for product in &data.products {
        if product_index.insert(product.sku.as_str(), product).is_some() {
            warnings.push(format!(
                "Duplicate SKU '{}' in catalog; the last entry wins",
                product.sku
            ));
        }
    }

    // --- Aggregate revenue, profit and unit counts ---
    for record in &data.purchase_records {
        let slot = *seller_slots.get(record.seller_id.as_str()).ok_or_else(|| {
            SalesReportError::UnknownSeller {
                seller_id: record.seller_id.clone(),
            }
        })?;
        let seller = &mut stats[slot];
        seller.sales_count += 1;
        seller.revenue += record.total_amount;

        for item in &record.items {
            let product = *product_index.get(item.sku.as_str()).ok_or_else(|| {
                SalesReportError::UnknownProduct {
                    sku: item.sku.clone(),
                }
            })?;
            let cost = product.purchase_price * Decimal::from(item.quantity);
            let revenue = revenue_strategy.revenue(item, product);
            seller.profit += revenue - cost;
            *seller.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity;
        }
    }

    // --- Rank by profit ---
    // Stable sort: sellers with equal profit keep roster order.
    stats.sort_by(|a, b| b.profit.cmp(&a.profit));

    // --- Bonuses, top products, projection ---
    let total = stats.len();
    let reports: Vec<SellerReport> = stats
        .iter()
        .enumerate()
        .map(|(rank, seller)| {
            let bonus = bonus_strategy.bonus(rank, total, seller);
            SellerReport {
                seller_id: seller.seller_id.clone(),
                name: seller.name.clone(),
                revenue: round_money(seller.revenue),
                profit: round_money(seller.profit),
                sales_count: seller.sales_count,
                top_products: top_products(seller),
                bonus: round_money(bonus),
            }
        })
        .collect();

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Per-Seller Sales Performance Report",
        &json!({
            "top_products_limit": TOP_PRODUCTS_LIMIT,
            "rounding": "2dp, half away from zero",
            "ranking": "descending profit, stable",
        }),
        warnings,
        elapsed,
        reports,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn ensure_non_empty(len: usize, field: &str) -> SalesReportResult<()> {
    if len == 0 {
        return Err(SalesReportError::InvalidInputData {
            field: field.into(),
            reason: "collection must be present and non-empty".into(),
        });
    }
    Ok(())
}

/// Best-selling SKUs by cumulative quantity, capped at the limit.
///
/// The sort is stable over ascending-SKU iteration, so equally sold
/// products come out in SKU order.
fn top_products(seller: &SellerStats) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = seller
        .products_sold
        .iter()
        .map(|(sku, &quantity)| TopProduct {
            sku: sku.clone(),
            quantity,
        })
        .collect();
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(TOP_PRODUCTS_LIMIT);
    products
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
