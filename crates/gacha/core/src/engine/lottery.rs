//! Weighted lottery over pool entries.

use crate::banner::PoolEntry;
use crate::env::RandomSource;

/// Picks one entry with probability proportional to its weight.
///
/// Entries with a weight `<= 0` (or NaN) are never selected. Returns `None`
/// when no entry is eligible.
///
/// The roll is inverted through the cumulative distribution in authored
/// order, so authored order breaks ties on boundary rolls. If the walk ends
/// without a hit (floating-point rounding, or a source that overshoots its
/// range) the last eligible entry in authored order is returned.
pub fn select<'e>(
    entries: &'e [PoolEntry],
    weights: &[f64],
    rng: &mut dyn RandomSource,
) -> Option<&'e PoolEntry> {
    let eligible = || {
        entries
            .iter()
            .zip(weights.iter().copied())
            .filter(|(_, weight)| *weight > 0.0)
    };

    let total: f64 = eligible().map(|(_, weight)| weight).sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    let roll = rng.uniform(0.0, total);
    let mut cumulative = 0.0;
    for (entry, weight) in eligible() {
        cumulative += weight;
        if cumulative >= roll {
            return Some(entry);
        }
    }

    eligible().last().map(|(entry, _)| entry)
}
