//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{HighRarityEvent, PityEvent, PullEvent, StatsEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Completed batches
    Pull,
    /// Hard-pity guarantees
    Pity,
    /// High-rarity drops
    HighRarity,
    /// Pull counters
    Stats,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Pull, Topic::Pity, Topic::HighRarity, Topic::Stats];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Pull(PullEvent),
    Pity(PityEvent),
    HighRarity(HighRarityEvent),
    Stats(StatsEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Pull(_) => Topic::Pull,
            Event::Pity(_) => Topic::Pity,
            Event::HighRarity(_) => Topic::HighRarity,
            Event::Stats(_) => Topic::Stats,
        }
    }
}

/// Topic-based event bus
///
/// Every topic has its own broadcast channel, created up front. Sending never
/// blocks, so the bus works from synchronous code: receivers drain with
/// `try_recv`. Lagging receivers lose the oldest events.
#[derive(Clone)]
pub struct EventBus {
    pull: broadcast::Sender<Event>,
    pity: broadcast::Sender<Event>,
    high_rarity: broadcast::Sender<Event>,
    stats: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(crate::RuntimeConfig::DEFAULT_EVENT_BUFFER)
    }

    /// Creates a new event bus with specified capacity per topic
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pull: broadcast::channel(capacity).0,
            pity: broadcast::channel(capacity).0,
            high_rarity: broadcast::channel(capacity).0,
            stats: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Pull => &self.pull,
            Topic::Pity => &self.pity,
            Topic::HighRarity => &self.high_rarity,
            Topic::Stats => &self.stats,
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Returns the number of receivers that got it.
    pub fn publish(&self, event: Event) -> usize {
        let topic = event.topic();
        match self.sender(topic).send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                // No subscribers for this topic - this is normal, not an error
                tracing::trace!("No subscribers for topic {:?}", topic);
                0
            }
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
