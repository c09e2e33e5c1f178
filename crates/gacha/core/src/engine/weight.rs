//! Effective selection weights.
//!
//! The authored weight of a pool entry is adjusted per draw, in this order:
//!
//! 1. non-positive authored weight falls back to [`GachaConfig::DEFAULT_WEIGHT`]
//! 2. a stock-limited entry with nothing left drops to `0`
//! 3. high-rarity entries ramp linearly from 1× to 6× between
//!    `soft_pity_start` and `pity_count`
//! 4. pickup entries listed on the banner get `1 + pickup_rate_boost`
//!
//! A weight of `0` means the entry is ineligible for this draw.

use crate::banner::{BannerConfig, PoolEntry};
use crate::config::GachaConfig;
use crate::state::StockStore;

/// Effective weight of one entry for the given pity counter and stock state.
///
/// Touching a stock-limited entry seeds the banner's ledger if needed.
pub fn effective_weight(
    entry: &PoolEntry,
    banner: &BannerConfig,
    pity_counter: u32,
    stock: &mut StockStore,
) -> f64 {
    let mut weight = entry.base_weight();

    if entry.has_stock_limit() && stock.remaining_for(banner, &entry.item_id) == Some(0) {
        weight = 0.0;
    }

    if weight > 0.0
        && banner.has_pity
        && pity_counter >= banner.soft_pity_start
        && banner.is_high_rarity(entry.rarity)
    {
        weight *= soft_pity_multiplier(banner, pity_counter);
    }

    if weight > 0.0 && entry.is_pickup && banner.pickup_items.contains(&entry.item_id) {
        weight *= 1.0 + banner.pickup_rate_boost;
    }

    weight.max(0.0)
}

/// Effective weights of the whole pool, in authored order.
pub fn effective_weights(banner: &BannerConfig, pity_counter: u32, stock: &mut StockStore) -> Vec<f64> {
    banner
        .pool
        .iter()
        .map(|entry| effective_weight(entry, banner, pity_counter, stock))
        .collect()
}

/// Ramp multiplier `1 + progress × 5`, progress clamped to `[0, 1]`.
///
/// A zero-length ramp (`soft_pity_start == pity_count`) is already at its end.
fn soft_pity_multiplier(banner: &BannerConfig, pity_counter: u32) -> f64 {
    let span = banner.pity_count.saturating_sub(banner.soft_pity_start);
    let progress = if span == 0 {
        1.0
    } else {
        let elapsed = pity_counter.saturating_sub(banner.soft_pity_start);
        (f64::from(elapsed) / f64::from(span)).clamp(0.0, 1.0)
    };
    1.0 + progress * GachaConfig::SOFT_PITY_MAX_BONUS
}
