//! Built-in demo banners.
use gacha_core::{
    BannerCatalog, BannerConfig, CurrencyType, GachaConfig, PoolEntry, PullCost, UnlockRule,
};

/// Standard, limited, and supply banners covering pity, pickups, stock
/// limits and unlock chains.
///
/// Headhunting banners use the engine defaults. Supply crates treat ★4 drops
/// as high rarity so furniture drops are announced.
pub fn demo_catalog() -> BannerCatalog {
    let headhunting = GachaConfig::default();
    let supply_config = GachaConfig::with_high_rarity_threshold(4);

    [
        standard(&headhunting),
        festival(&headhunting),
        supply(&supply_config),
    ]
    .into_iter()
    .collect()
}

fn standard(config: &GachaConfig) -> BannerConfig {
    BannerConfig::new(
        "standard",
        vec![
            PoolEntry::new("vanguard", 40.0, 3),
            PoolEntry::new("guard", 40.0, 3),
            PoolEntry::new("medic", 30.0, 3),
            PoolEntry::new("sniper", 15.0, 4),
            PoolEntry::new("caster", 15.0, 4),
            PoolEntry::new("defender", 6.0, 5),
            PoolEntry::new("specialist", 6.0, 5),
            PoolEntry::new("strategist", 2.0, 6),
        ],
    )
    .with_name("Standard Headhunting")
    .with_pity(50, 40)
    .with_config(config)
}

fn festival(config: &GachaConfig) -> BannerConfig {
    BannerConfig::new(
        "festival",
        vec![
            PoolEntry::new("vanguard", 40.0, 3),
            PoolEntry::new("guard", 40.0, 3),
            PoolEntry::new("sniper", 20.0, 4),
            PoolEntry::new("defender", 6.0, 5),
            PoolEntry::new("lantern-bearer", 4.0, 5).pickup(),
            PoolEntry::new("strategist", 1.0, 6),
            PoolEntry::new("festival-queen", 1.0, 6)
                .pickup()
                .with_stock_limit(3),
        ],
    )
    .with_name("Lantern Festival")
    .limited()
    .with_pickup(["lantern-bearer", "festival-queen"], 0.5)
    .with_pity(50, 40)
    .with_cost(PullCost {
        currency: CurrencyType::Originium,
        single: 1,
        ten: 9,
    })
    .with_unlock(UnlockRule::locked().after_banner("standard"))
    .with_config(config)
}

fn supply(config: &GachaConfig) -> BannerConfig {
    BannerConfig::new(
        "supply",
        vec![
            PoolEntry::new("chip-pack", 0.0, 2),
            PoolEntry::new("exp-card", 0.0, 2),
            PoolEntry::new("furniture-set", 2.0, 4).with_stock_limit(5),
            PoolEntry::new("skin-voucher", 1.0, 5).with_stock_limit(1),
        ],
    )
    .with_name("Supply Crate")
    .with_cost(PullCost {
        currency: CurrencyType::Lmd,
        single: 1_000,
        ten: 9_000,
    })
    .with_config(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gacha_core::BannerId;

    #[test]
    fn demo_banners_are_valid() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 3);
        for banner in catalog.all() {
            banner.validate().unwrap();
        }
        assert_eq!(catalog.limited().count(), 1);
    }

    #[test]
    fn supply_crate_lowers_high_rarity_threshold() {
        let catalog = demo_catalog();
        let threshold = |id: &str| {
            catalog
                .get(&BannerId::new(id))
                .map(|banner| banner.high_rarity_threshold)
        };
        assert_eq!(threshold("standard"), Some(5));
        assert_eq!(threshold("festival"), Some(5));
        assert_eq!(threshold("supply"), Some(4));
    }
}
