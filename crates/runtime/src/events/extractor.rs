//! Conversion of engine signals into bus events.

use gacha_core::{DrawSignal, GachaSignal, PullReport};

use super::bus::Event;
use super::types::{HighRarityEvent, PityEvent, PullEvent, StatsEvent};

/// Converts a report's signals into events, preserving their order.
///
/// Per-draw events (pity, high rarity) come first in draw order, followed by
/// the batch [`Event::Pull`] and the closing [`Event::Stats`].
pub fn extract_events(report: &PullReport) -> Vec<Event> {
    report
        .signals
        .iter()
        .map(|signal| match signal {
            GachaSignal::Draw(DrawSignal::PityReached { banner }) => Event::Pity(PityEvent {
                banner: banner.clone(),
            }),
            GachaSignal::Draw(DrawSignal::HighRarityPulled { outcome, rarity }) => {
                Event::HighRarity(HighRarityEvent {
                    banner: report.banner.clone(),
                    outcome: outcome.clone(),
                    rarity: *rarity,
                })
            }
            GachaSignal::Pulled { banner, outcomes } => Event::Pull(PullEvent {
                banner: banner.clone(),
                outcomes: outcomes.clone(),
            }),
            GachaSignal::CountIncremented { requested } => Event::Stats(StatsEvent {
                banner: report.banner.clone(),
                requested: *requested,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Topic;
    use gacha_core::{BannerId, ItemId, PullOutcome};

    #[test]
    fn signals_map_to_topics_in_order() {
        let outcome = PullOutcome {
            item_id: ItemId::new("star"),
            is_new: true,
            is_pickup: false,
            rarity: 6,
        };
        let banner = BannerId::new("b");
        let report = PullReport {
            banner: banner.clone(),
            requested: 10,
            outcomes: vec![outcome.clone()],
            failures: Vec::new(),
            signals: vec![
                GachaSignal::Draw(DrawSignal::PityReached {
                    banner: banner.clone(),
                }),
                GachaSignal::Draw(DrawSignal::HighRarityPulled {
                    outcome: outcome.clone(),
                    rarity: 6,
                }),
                GachaSignal::Pulled {
                    banner: banner.clone(),
                    outcomes: vec![outcome],
                },
                GachaSignal::CountIncremented { requested: 10 },
            ],
        };

        let topics: Vec<Topic> = extract_events(&report).iter().map(Event::topic).collect();
        assert_eq!(
            topics,
            [Topic::Pity, Topic::HighRarity, Topic::Pull, Topic::Stats]
        );
        assert!(matches!(
            extract_events(&report).last(),
            Some(Event::Stats(StatsEvent { requested: 10, .. }))
        ));
    }
}
