use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to any other error
    /// category in this enum.
    ///
    /// In particular this means that use of Internal is never a guarantee
    /// the error is not, for example due to a user error - merely that it
    /// cannot be confidently determined by the code.
    Internal,

    /// The user provided invalid input or performed an action that is
    /// unsupported or impossible to complete.
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An alphabet with zero symbols was supplied; modular index arithmetic
    /// is undefined over it.
    EmptyAlphabet,
    /// The supplied alphabet repeats a symbol, which would make the
    /// symbol/position mapping ambiguous.
    DuplicateSymbol,
    /// A running-key cipher was configured with an empty keyword, leaving
    /// key-stream generation undefined.
    EmptyKey,
    /// The keyword could not be obtained from the configured reader.
    KeyUnavailable,
    /// Interaction with the filesystem, stdin/stdout, or other I/O failed.
    Io,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct CipherboxError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag for consumers that need to
    /// branch their behavior. Any code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl CipherboxError {
    /// Creates a new error with a required category and display message.
    pub fn new(category: ErrorCategory, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: None,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that retains the originating source error.
    pub fn with_source(
        category: ErrorCategory,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: None,
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving the original as source.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        Self {
            category,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CipherboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_and_kind() {
        let err = CipherboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::EmptyKey,
            "key must not be empty",
        );
        assert_eq!(err.message(), "key must not be empty");
        assert_eq!(err.kind, Some(ErrorKind::EmptyKey));
        assert_eq!(err.category, ErrorCategory::User);
    }

    #[test]
    fn test_context_preserves_category_and_kind() {
        let err = CipherboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::DuplicateSymbol,
            "duplicate symbol",
        )
        .with_context("invalid alphabet");

        assert_eq!(err.message(), "invalid alphabet");
        assert_eq!(err.category, ErrorCategory::User);
        assert_eq!(err.kind, Some(ErrorKind::DuplicateSymbol));
        assert!(err.source_error().is_some());
    }

    #[test]
    fn test_display_is_message() {
        let err = CipherboxError::new(ErrorCategory::Internal, "something went wrong");
        assert_eq!(format!("{}", err), "something went wrong");
    }
}
