/// Engine constants and tunable defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GachaConfig {
    /// Rarity at or above which a drop resets pity and counts for soft pity.
    /// Banners copy this into their own threshold unless overridden.
    pub high_rarity_threshold: u8,
}

impl GachaConfig {
    // ===== fixed engine policy =====
    /// Weight substituted for authored weights `<= 0`.
    pub const DEFAULT_WEIGHT: f64 = 1.0;
    /// Extra multiplier reached at the end of the soft-pity ramp (1 + 5 = 6×).
    pub const SOFT_PITY_MAX_BONUS: f64 = 5.0;
    /// Pull count that is billed at the discounted bulk price.
    pub const BULK_PULL_COUNT: u32 = 10;
    /// Sentinel returned by stock queries for unlimited items.
    pub const UNLIMITED_STOCK: i64 = -1;

    // ===== banner defaults =====
    pub const DEFAULT_HIGH_RARITY_THRESHOLD: u8 = 5;
    pub const DEFAULT_PITY_COUNT: u32 = 50;
    pub const DEFAULT_SOFT_PITY_START: u32 = 40;
    pub const DEFAULT_PICKUP_RATE_BOOST: f64 = 0.5;
    pub const DEFAULT_COST_SINGLE: u64 = 600;
    pub const DEFAULT_COST_TEN: u64 = 6000;

    pub fn new() -> Self {
        Self {
            high_rarity_threshold: Self::DEFAULT_HIGH_RARITY_THRESHOLD,
        }
    }

    pub fn with_high_rarity_threshold(high_rarity_threshold: u8) -> Self {
        Self {
            high_rarity_threshold,
        }
    }
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self::new()
    }
}
