//! Error types.
//!
//! The builder combinators are total and never fail. Errors only arise at the
//! edges owned by the two instantiations: validating a stack configuration
//! before it reaches finalize, and attaching style runs to finalized text.

use std::ops::Range;

use thiserror::Error;

/// Convenience alias for results carrying a [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Invalid view-tree configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("stack spacing must not be negative, got {0}")]
    NegativeSpacing(f32),

    #[error("stack spacing must be finite, got {0}")]
    NonFiniteSpacing(f32),
}

/// Rejected style run on a [`StyledText`](crate::text::StyledText).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("style range {range:?} exceeds text length {len}")]
    OutOfBounds { range: Range<usize>, len: usize },

    #[error("style range {0:?} does not fall on char boundaries")]
    NotCharBoundary(Range<usize>),

    #[error("style range {0:?} is inverted")]
    Inverted(Range<usize>),
}
