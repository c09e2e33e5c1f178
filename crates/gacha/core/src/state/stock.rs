use std::collections::BTreeMap;

use crate::banner::{BannerConfig, BannerId, ItemId};

/// Remaining stock per banner and item.
///
/// # Lifecycle
///
/// - A banner's ledger is seeded the first time the banner is touched, all
///   stock-limited entries at once, from [`crate::PoolEntry::stock_limit`].
/// - Seeded counts are never re-seeded, even if the authored limit changes.
///   Stock-limited entries added to the banner later are seeded on the next
///   touch without disturbing existing counts.
/// - Counts only go down, one per consumption, clamped at zero.
/// - [`StockStore::reset_banner`] clears a banner's ledger so the next touch
///   seeds it afresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StockStore {
    ledgers: BTreeMap<BannerId, BTreeMap<ItemId, u32>>,
}

impl StockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds any stock-limited entry of the banner missing from the ledger.
    ///
    /// Banners without stock-limited entries never get a ledger.
    pub fn ensure_seeded(&mut self, banner: &BannerConfig) {
        if !banner.has_limited_stock() {
            return;
        }

        let ledger = self.ledgers.entry(banner.id.clone()).or_default();
        for entry in &banner.pool {
            if let Some(limit) = entry.stock_limit {
                ledger.entry(entry.item_id.clone()).or_insert(limit);
            }
        }
    }

    /// Remaining count for a seeded entry, `None` if never seeded.
    pub fn remaining(&self, banner: &BannerId, item: &ItemId) -> Option<u32> {
        self.ledgers.get(banner)?.get(item).copied()
    }

    /// Remaining count for an entry of `banner`, seeding on first touch.
    ///
    /// Returns `None` for unlimited entries and items outside the pool.
    pub fn remaining_for(&mut self, banner: &BannerConfig, item: &ItemId) -> Option<u32> {
        let entry = banner.entry(item)?;
        entry.stock_limit?;
        self.ensure_seeded(banner);
        self.remaining(&banner.id, item)
    }

    /// Sum of remaining counts across the banner's stock-limited entries.
    pub fn total_remaining(&mut self, banner: &BannerConfig) -> u64 {
        self.ensure_seeded(banner);
        banner
            .pool
            .iter()
            .filter(|entry| entry.has_stock_limit())
            .filter_map(|entry| self.remaining(&banner.id, &entry.item_id))
            .map(u64::from)
            .sum()
    }

    /// Consumes one unit, clamped at zero. Returns the new remaining count,
    /// or `None` if the entry has no ledger row.
    pub fn decrement(&mut self, banner: &BannerId, item: &ItemId) -> Option<u32> {
        let remaining = self.ledgers.get_mut(banner)?.get_mut(item)?;
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }

    /// Drops the banner's ledger entirely.
    pub fn reset_banner(&mut self, banner: &BannerId) {
        self.ledgers.remove(banner);
    }

    pub fn is_seeded(&self, banner: &BannerId) -> bool {
        self.ledgers.contains_key(banner)
    }

    /// Exports the nested ledger verbatim.
    pub fn export(&self) -> BTreeMap<BannerId, BTreeMap<ItemId, u32>> {
        self.ledgers.clone()
    }

    /// Replaces every ledger with the imported map.
    pub fn import(&mut self, ledgers: BTreeMap<BannerId, BTreeMap<ItemId, u32>>) {
        self.ledgers = ledgers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::PoolEntry;

    fn banner() -> BannerConfig {
        BannerConfig::new(
            "limited",
            vec![
                PoolEntry::new("free", 1.0, 3),
                PoolEntry::new("a", 1.0, 5).with_stock_limit(2),
                PoolEntry::new("b", 1.0, 4).with_stock_limit(3),
            ],
        )
    }

    #[test]
    fn seeds_whole_banner_on_first_touch() {
        let banner = banner();
        let mut stock = StockStore::new();
        assert!(!stock.is_seeded(&banner.id));

        assert_eq!(stock.remaining_for(&banner, &ItemId::new("a")), Some(2));
        assert_eq!(stock.remaining(&banner.id, &ItemId::new("b")), Some(3));
        assert_eq!(stock.remaining_for(&banner, &ItemId::new("free")), None);
        assert_eq!(stock.total_remaining(&banner), 5);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let banner = banner();
        let mut stock = StockStore::new();
        stock.ensure_seeded(&banner);

        let a = ItemId::new("a");
        assert_eq!(stock.decrement(&banner.id, &a), Some(1));
        assert_eq!(stock.decrement(&banner.id, &a), Some(0));
        assert_eq!(stock.decrement(&banner.id, &a), Some(0));
        assert_eq!(stock.decrement(&banner.id, &ItemId::new("free")), None);
    }

    #[test]
    fn seeded_counts_are_never_reseeded() {
        let original = banner();
        let mut stock = StockStore::new();
        stock.ensure_seeded(&original);
        stock.decrement(&original.id, &ItemId::new("a"));

        let mut changed = original.clone();
        changed.pool[1].stock_limit = Some(10);
        changed.pool.push(PoolEntry::new("c", 1.0, 4).with_stock_limit(4));

        assert_eq!(stock.remaining_for(&changed, &ItemId::new("a")), Some(1));
        assert_eq!(stock.remaining_for(&changed, &ItemId::new("c")), Some(4));
    }

    #[test]
    fn reset_banner_reseeds_on_next_touch() {
        let banner = banner();
        let mut stock = StockStore::new();
        stock.ensure_seeded(&banner);
        stock.decrement(&banner.id, &ItemId::new("b"));
        assert_eq!(stock.total_remaining(&banner), 4);

        stock.reset_banner(&banner.id);
        assert!(!stock.is_seeded(&banner.id));
        assert_eq!(stock.total_remaining(&banner), 5);
    }

    #[test]
    fn unlimited_banner_gets_no_ledger() {
        let banner = BannerConfig::new("open", vec![PoolEntry::new("x", 1.0, 3)]);
        let mut stock = StockStore::new();
        assert_eq!(stock.total_remaining(&banner), 0);
        assert!(!stock.is_seeded(&banner.id));
    }
}
