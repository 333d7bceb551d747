//! Common error infrastructure for game-core.
//!
//! Movement and collision are total functions and never fail. Errors only
//! surface at the edges where untrusted data enters the engine, such as
//! building an [`crate::env::AlphaMask`] from a raw buffer. Domain-specific
//! errors live next to the code that produces them and implement [`GameError`].

/// Severity level of an error, used for categorization in logs and reports.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: pixel buffer length does not match the declared dimensions,
    /// negative walk step in a config file
    Validation,

    /// Fatal error - the session cannot be built or continued.
    ///
    /// Examples: a level too large to address
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all game errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by whether the caller can fix its input
pub trait GameError: core::fmt::Display + core::fmt::Debug {
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

    #[derive(Debug, thiserror::Error)]
    #[error("plain")]
    struct Plain;

    impl GameError for Plain {
        fn severity(&self) -> ErrorSeverity {
            ErrorSeverity::Fatal
        }
    }

    #[test]
    fn severity_names_are_lowercase() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }

    #[test]
    fn default_error_code_is_the_type_name() {
        assert!(Plain.error_code().ends_with("Plain"));
        assert_eq!(Plain.severity(), ErrorSeverity::Fatal);
    }
}
