use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, SellerStats};

/// Bonus strategy for one seller, given its position in the
/// profit-descending ranking.
pub trait BonusStrategy {
    /// `rank` is zero-based; `total_sellers` is the ranking length.
    fn bonus(&self, rank: usize, total_sellers: usize, stats: &SellerStats) -> Money;
}

/// Plain functions and closures work as bonus strategies directly.
impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> Money,
{
    fn bonus(&self, rank: usize, total_sellers: usize, stats: &SellerStats) -> Money {
        self(rank, total_sellers, stats)
    }
}

/// Default tiered policy: 15% of profit for the top seller, 10% for
/// second and third place, nothing for last place, 5% otherwise.
///
/// Rule order matters: with a single seller, rank 0 takes the
/// top-performer rate before the last-place rule is reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitRankBonus;

impl BonusStrategy for ProfitRankBonus {
    fn bonus(&self, rank: usize, total_sellers: usize, stats: &SellerStats) -> Money {
        if rank == 0 {
            stats.profit * dec!(0.15)
        } else if rank == 1 || rank == 2 {
            stats.profit * dec!(0.10)
        } else if rank + 1 == total_sellers {
            Decimal::ZERO
        } else {
            stats.profit * dec!(0.05)
        }
    }
}
