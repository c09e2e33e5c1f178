//! Banner validation errors.

use crate::banner::{BannerId, ItemId};
use crate::error::{ErrorSeverity, GachaError};

/// Authoring mistakes detected by [`super::BannerConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BannerError {
    #[error("banner '{0}' has an empty pool")]
    EmptyPool(BannerId),

    #[error("banner '{0}' enables pity with a pity count of zero")]
    ZeroPityCount(BannerId),

    #[error(
        "banner '{banner}' starts soft pity at {soft_pity_start}, after hard pity at {pity_count}"
    )]
    SoftPityAfterHardPity {
        banner: BannerId,
        soft_pity_start: u32,
        pity_count: u32,
    },

    #[error("banner '{banner}' has invalid pickup rate boost {boost}")]
    NegativePickupBoost { banner: BannerId, boost: f64 },

    #[error("banner '{0}' has a high-rarity threshold of zero")]
    ZeroHighRarityThreshold(BannerId),

    #[error("banner '{banner}' lists item '{item}' more than once")]
    DuplicateItem { banner: BannerId, item: ItemId },
}

impl GachaError for BannerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use BannerError::*;
        match self {
            EmptyPool(_) => "BANNER_EMPTY_POOL",
            ZeroPityCount(_) => "BANNER_ZERO_PITY_COUNT",
            SoftPityAfterHardPity { .. } => "BANNER_SOFT_PITY_AFTER_HARD_PITY",
            NegativePickupBoost { .. } => "BANNER_NEGATIVE_PICKUP_BOOST",
            ZeroHighRarityThreshold(_) => "BANNER_ZERO_HIGH_RARITY_THRESHOLD",
            DuplicateItem { .. } => "BANNER_DUPLICATE_ITEM",
        }
    }
}
