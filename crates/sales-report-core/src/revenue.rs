use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{LineItem, Money, Product};

/// Pricing strategy for a single line item.
///
/// Implementations must be pure: no side effects, no dependence on
/// anything but the two arguments.
pub trait RevenueStrategy {
    fn revenue(&self, item: &LineItem, product: &Product) -> Money;
}

/// Plain functions and closures work as pricing strategies directly.
impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Money,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> Money {
        self(item, product)
    }
}

/// Default pricing: list price times quantity, less the line discount.
///
/// The product argument is unused here; it is part of the contract so
/// that cost-aware strategies can be swapped in without changing the
/// analyzer. Discounts outside 0–100 are the caller's problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedRevenue;

impl RevenueStrategy for DiscountedRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> Money {
        let multiplier = Decimal::ONE - item.discount / dec!(100);
        item.sale_price * Decimal::from(item.quantity) * multiplier
    }
}
