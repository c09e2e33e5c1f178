//! Error types for draw resolution.

use crate::banner::BannerId;
use crate::error::{ErrorSeverity, GachaError};

/// Reasons a single draw produced no item.
///
/// Both variants are recoverable: the batch façade drops the draw. A sold-out
/// draw also ends the batch. Neither is ever surfaced as a failed pull.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawError {
    /// Every stock-limited entry is exhausted. Nothing was mutated.
    #[error("banner '{banner}' is sold out")]
    SoldOut { banner: BannerId },

    /// All effective weights were zero. The pity increment stands.
    #[error("banner '{banner}' has no eligible entry for this draw")]
    NoEligibleEntry { banner: BannerId },
}

impl GachaError for DrawError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            DrawError::SoldOut { .. } => "DRAW_SOLD_OUT",
            DrawError::NoEligibleEntry { .. } => "DRAW_NO_ELIGIBLE_ENTRY",
        }
    }
}
