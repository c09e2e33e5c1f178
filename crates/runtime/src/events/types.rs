//! Event payloads for each topic.

use gacha_core::{BannerId, PullOutcome};
use serde::{Deserialize, Serialize};

/// A batch finished on a banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullEvent {
    pub banner: BannerId,
    /// Every outcome the batch produced, in draw order.
    pub outcomes: Vec<PullOutcome>,
}

/// The hard-pity guarantee fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityEvent {
    pub banner: BannerId,
}

/// A draw landed at or above the banner's high-rarity threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighRarityEvent {
    pub banner: BannerId,
    pub outcome: PullOutcome,
    pub rarity: u8,
}

/// Pull counter for statistics consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsEvent {
    pub banner: BannerId,
    /// Requested draws, which may exceed the outcomes produced.
    pub requested: u32,
}
