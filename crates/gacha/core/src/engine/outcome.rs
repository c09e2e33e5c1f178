//! Draw results and the side signals they raise.

use crate::banner::{BannerId, ItemId, PoolEntry};

use super::DrawError;

/// One resolved item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullOutcome {
    pub item_id: ItemId,
    /// The inventory did not hold the item before this pull.
    pub is_new: bool,
    pub is_pickup: bool,
    /// Copied from the selected pool entry.
    pub rarity: u8,
}

impl PullOutcome {
    pub fn from_entry(entry: &PoolEntry, is_new: bool) -> Self {
        Self {
            item_id: entry.item_id.clone(),
            is_new,
            is_pickup: entry.is_pickup,
            rarity: entry.rarity,
        }
    }
}

/// Signals raised while resolving a single draw.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawSignal {
    /// The hard-pity threshold was reached and a guaranteed pick was made.
    PityReached { banner: BannerId },
    /// The draw produced an entry at or above the banner's high-rarity threshold.
    HighRarityPulled { outcome: PullOutcome, rarity: u8 },
}

/// Signals raised by a batch, in the order they occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GachaSignal {
    Draw(DrawSignal),
    /// The batch finished; carries every produced outcome.
    Pulled {
        banner: BannerId,
        outcomes: Vec<PullOutcome>,
    },
    /// Statistics hook. Carries the requested count, which may exceed the
    /// number of outcomes produced.
    CountIncremented { requested: u32 },
}

/// A successfully resolved draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    pub outcome: PullOutcome,
    /// The guaranteed pick fired on this draw.
    pub hard_pity: bool,
    /// Pity counter after the draw.
    pub pity_after: u32,
    pub signals: Vec<DrawSignal>,
}

/// Aggregated result of a batch pull.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullReport {
    pub banner: BannerId,
    pub requested: u32,
    pub outcomes: Vec<PullOutcome>,
    /// Draws that produced nothing, in order. A sold-out failure ends the
    /// batch, so it appears at most once and always last.
    pub failures: Vec<DrawError>,
    pub signals: Vec<GachaSignal>,
}

impl PullReport {
    /// Report for a batch that never started.
    pub fn empty(banner: BannerId, requested: u32) -> Self {
        Self {
            banner,
            requested,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Requested draws that produced no outcome.
    pub fn shortfall(&self) -> u32 {
        self.requested
            .saturating_sub(u32::try_from(self.outcomes.len()).unwrap_or(u32::MAX))
    }

    pub fn pity_reached(&self) -> bool {
        self.signals
            .iter()
            .any(|signal| matches!(signal, GachaSignal::Draw(DrawSignal::PityReached { .. })))
    }

    pub fn high_rarity_outcomes(&self) -> impl Iterator<Item = (&PullOutcome, u8)> {
        self.signals.iter().filter_map(|signal| match signal {
            GachaSignal::Draw(DrawSignal::HighRarityPulled { outcome, rarity }) => {
                Some((outcome, *rarity))
            }
            _ => None,
        })
    }
}
