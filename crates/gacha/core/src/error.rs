//! Common error infrastructure for gacha-core.
//!
//! Domain-specific errors (`DrawError`, `BannerError`) live next to the code
//! that produces them. This module provides the shared classification used by
//! hosts to decide whether to log, retry, or surface a failure.
//!
//! Nothing in the draw path panics for expected conditions: a sold-out banner
//! or an all-zero weight table is reported as a recoverable error and simply
//! drops the draw from its batch.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the draw was skipped; later draws may succeed
/// - **Validation**: malformed configuration, reject without retry
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: state cannot be trusted any more
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error.
    ///
    /// Examples: banner sold out, no eligible entry this draw
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: soft pity starts after hard pity, empty pool
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all gacha-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GachaError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
