//! Banner unlock conditions.

use crate::banner::{BannerCatalog, BannerConfig, BannerId, ItemId};
use crate::env::InventoryOracle;

/// How a locked banner becomes available.
///
/// A banner that starts locked opens when either condition holds: the player
/// owns `required_item`, or owns every item of `prerequisite_banner`'s pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockRule {
    pub starts_locked: bool,
    pub prerequisite_banner: Option<BannerId>,
    pub required_item: Option<ItemId>,
}

impl UnlockRule {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn locked() -> Self {
        Self {
            starts_locked: true,
            ..Self::default()
        }
    }

    pub fn after_banner(mut self, banner: impl Into<BannerId>) -> Self {
        self.prerequisite_banner = Some(banner.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.required_item = Some(item.into());
        self
    }
}

pub fn is_banner_unlocked(
    banner: &BannerConfig,
    catalog: &BannerCatalog,
    inventory: &dyn InventoryOracle,
) -> bool {
    let rule = &banner.unlock;
    if !rule.starts_locked {
        return true;
    }

    if let Some(item) = &rule.required_item
        && inventory.has(item)
    {
        return true;
    }

    if let Some(prerequisite) = rule
        .prerequisite_banner
        .as_ref()
        .and_then(|id| catalog.get(id))
        && is_all_pool_items_owned(prerequisite, inventory)
    {
        return true;
    }

    false
}

/// True if the inventory holds every item in the banner's pool.
///
/// An empty pool is never considered complete.
pub fn is_all_pool_items_owned(banner: &BannerConfig, inventory: &dyn InventoryOracle) -> bool {
    !banner.pool.is_empty()
        && banner
            .pool
            .iter()
            .all(|entry| inventory.has(&entry.item_id))
}

/// Collection progress over a banner's pool as `(owned, total)`.
pub fn pool_progress(banner: &BannerConfig, inventory: &dyn InventoryOracle) -> (usize, usize) {
    let owned = banner
        .pool
        .iter()
        .filter(|entry| inventory.has(&entry.item_id))
        .count();
    (owned, banner.pool.len())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::banner::PoolEntry;

    fn rookie() -> BannerConfig {
        BannerConfig::new(
            "rookie",
            vec![PoolEntry::new("r1", 1.0, 3), PoolEntry::new("r2", 1.0, 4)],
        )
    }

    fn owned(items: &[&str]) -> BTreeSet<ItemId> {
        items.iter().map(|id| ItemId::new(*id)).collect()
    }

    #[test]
    fn open_banner_is_always_unlocked() {
        let catalog = BannerCatalog::default();
        assert!(is_banner_unlocked(&rookie(), &catalog, &owned(&[])));
    }

    #[test]
    fn prerequisite_banner_unlocks_when_pool_complete() {
        let catalog = BannerCatalog::new(vec![rookie()]);
        let advanced = BannerConfig::new("advanced", vec![PoolEntry::new("a", 1.0, 5)])
            .with_unlock(UnlockRule::locked().after_banner("rookie"));

        assert!(!is_banner_unlocked(&advanced, &catalog, &owned(&["r1"])));
        assert!(is_banner_unlocked(&advanced, &catalog, &owned(&["r1", "r2"])));
    }

    #[test]
    fn required_item_unlocks() {
        let catalog = BannerCatalog::default();
        let banner = BannerConfig::new("vip", vec![PoolEntry::new("a", 1.0, 5)])
            .with_unlock(UnlockRule::locked().with_item("pass"));

        assert!(!is_banner_unlocked(&banner, &catalog, &owned(&[])));
        assert!(is_banner_unlocked(&banner, &catalog, &owned(&["pass"])));
    }

    #[test]
    fn missing_prerequisite_keeps_banner_locked() {
        let catalog = BannerCatalog::default();
        let banner = BannerConfig::new("x", vec![PoolEntry::new("a", 1.0, 5)])
            .with_unlock(UnlockRule::locked().after_banner("ghost"));
        assert!(!is_banner_unlocked(&banner, &catalog, &owned(&["a"])));
    }

    #[test]
    fn progress_counts_owned_entries() {
        let banner = rookie();
        assert_eq!(pool_progress(&banner, &owned(&["r2", "zzz"])), (1, 2));
        assert!(!is_all_pool_items_owned(
            &BannerConfig::new("empty", Vec::new()),
            &owned(&[])
        ));
    }
}
