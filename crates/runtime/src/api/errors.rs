//! Unified error types surfaced by the runtime API.
//!
//! Wraps payment failures, banner validation, and repository failures so
//! hosts can bubble them up with consistent context.
use gacha_core::{BannerError, BannerId, CurrencyType, ErrorSeverity, GachaError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("cannot afford {cost} {currency} for {count} pull(s) on banner '{banner}'")]
    InsufficientFunds {
        banner: BannerId,
        currency: CurrencyType,
        cost: u64,
        count: u32,
    },

    #[error("wallet refused to spend {cost} {currency} on banner '{banner}'")]
    SpendFailed {
        banner: BannerId,
        currency: CurrencyType,
        cost: u64,
    },

    #[error("invalid banner configuration")]
    InvalidBanner(#[from] BannerError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GachaError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::InsufficientFunds { .. } | RuntimeError::SpendFailed { .. } => {
                ErrorSeverity::Recoverable
            }
            RuntimeError::InvalidBanner(_) => ErrorSeverity::Validation,
            RuntimeError::Repository(RepositoryError::LockPoisoned) => ErrorSeverity::Fatal,
            RuntimeError::Repository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::InsufficientFunds { .. } => "RUNTIME_INSUFFICIENT_FUNDS",
            RuntimeError::SpendFailed { .. } => "RUNTIME_SPEND_FAILED",
            RuntimeError::InvalidBanner(error) => error.error_code(),
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}
