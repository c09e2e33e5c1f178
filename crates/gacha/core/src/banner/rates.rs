//! Published drop rates.
//!
//! Rates are computed from authored weights (with the non-positive weight
//! fallback applied) and ignore pity, pickup boost, and stock. They describe
//! what a fresh banner advertises, not the odds of any particular draw.

use std::fmt;

use crate::banner::BannerConfig;

/// Percentage of the banner's total weight held by entries of `rarity`.
///
/// Returns `0.0` for an empty pool.
pub fn rarity_rate(banner: &BannerConfig, rarity: u8) -> f64 {
    let total = banner.total_weight();
    if total <= 0.0 {
        return 0.0;
    }

    let rarity_weight: f64 = banner
        .pool
        .iter()
        .filter(|entry| entry.rarity == rarity)
        .map(|entry| entry.base_weight())
        .sum();

    rarity_weight / total * 100.0
}

/// Per-rarity rates of a banner, highest rarity first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateTable {
    pub rows: Vec<(u8, f64)>,
}

impl RateTable {
    pub fn for_banner(banner: &BannerConfig) -> Self {
        let mut rarities: Vec<u8> = banner.pool.iter().map(|entry| entry.rarity).collect();
        rarities.sort_unstable_by(|a, b| b.cmp(a));
        rarities.dedup();

        let rows = rarities
            .into_iter()
            .map(|rarity| (rarity, rarity_rate(banner, rarity)))
            .filter(|(_, rate)| *rate > 0.0)
            .collect();

        Self { rows }
    }
}

impl fmt::Display for RateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rarity, rate) in &self.rows {
            writeln!(f, "★{rarity}: {rate:.2}%")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::PoolEntry;

    fn banner() -> BannerConfig {
        BannerConfig::new(
            "b",
            vec![
                PoolEntry::new("a", 70.0, 3),
                PoolEntry::new("b", 0.0, 4),
                PoolEntry::new("c", 20.0, 4),
                PoolEntry::new("d", 9.0, 6),
            ],
        )
    }

    #[test]
    fn rates_use_fallback_weight_and_sum_to_hundred() {
        let banner = banner();
        assert!((rarity_rate(&banner, 4) - 21.0).abs() < 1e-9);
        assert!((rarity_rate(&banner, 6) - 9.0).abs() < 1e-9);
        assert_eq!(rarity_rate(&banner, 5), 0.0);

        let table = RateTable::for_banner(&banner);
        let sum: f64 = table.rows.iter().map(|(_, r)| r).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn table_lists_highest_rarity_first() {
        let table = RateTable::for_banner(&banner());
        let rarities: Vec<u8> = table.rows.iter().map(|(r, _)| *r).collect();
        assert_eq!(rarities, [6, 4, 3]);
        assert_eq!(table.to_string().lines().next(), Some("★6: 9.00%"));
    }

    #[test]
    fn empty_pool_has_no_rates() {
        let banner = BannerConfig::new("empty", Vec::new());
        assert_eq!(rarity_rate(&banner, 3), 0.0);
        assert!(RateTable::for_banner(&banner).rows.is_empty());
    }
}
