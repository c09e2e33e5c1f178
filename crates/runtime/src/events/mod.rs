//! Topic-based event bus for session events.
//!
//! Draw signals returned by the engine are converted into [`Event`]s and
//! published to specific topics, so consumers subscribe only to what they
//! need (a results screen to [`Topic::Pull`], an achievement tracker to
//! [`Topic::HighRarity`], and so on).

mod bus;
mod extractor;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use extractor::extract_events;
pub use types::{HighRarityEvent, PityEvent, PullEvent, StatsEvent};
