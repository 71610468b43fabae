//! Dispatch errors
//!
//! The crate has exactly two terminal error kinds: a tag outside a closed
//! set, and an input whose shape matches no accepted form. Neither is
//! retried; both are caller-visible and final for that call.

use thiserror::Error;

/// Dispatch result
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Dispatch errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A dispatcher received a tag outside its known set. Carries the
    /// offending tag; never replaced by a silent default.
    #[error("unreachable variant: unhandled tag `{tag}`")]
    UnreachableVariant {
        /// The tag value that no branch handles
        tag: String,
    },

    /// A shape-directed operation received an input that is neither the
    /// expected scalar kind nor a sequence of it. No partial output
    /// accompanies this error.
    #[error("invalid input: expected {expected}, found {found}")]
    InvalidShape {
        /// What the operation accepts
        expected: String,
        /// What it actually saw
        found: String,
    },
}

impl DispatchError {
    /// Unknown tag at an untyped boundary
    pub fn unreachable(tag: impl Into<String>) -> Self {
        DispatchError::UnreachableVariant { tag: tag.into() }
    }

    /// Shape mismatch at an untyped boundary
    pub fn invalid_shape(expected: impl Into<String>, found: impl Into<String>) -> Self {
        DispatchError::InvalidShape {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
