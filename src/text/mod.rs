//! Text Builder - Compose attributed text from describable leaves.
//!
//! Any [`Display`] value is a leaf. Each leaf contributes its textual form,
//! statements concatenate, and the finished string is wrapped verbatim in a
//! [`StyledText`].
//!
//! # Example
//!
//! ```
//! use spark_compose::compose;
//! use spark_compose::text::{LineBreak, Space, TextBuilder};
//!
//! let items = [1, 2, 3];
//! let text = compose!(TextBuilder => {
//!     "items:";
//!     for item in items { Space; item; }
//!     LineBreak;
//! });
//! assert_eq!(text.as_str(), "items: 1 2 3\n");
//! ```

mod styled;

use std::fmt::{self, Display};

use tracing::trace;

use crate::builder::{BuildExpression, ResultBuilder};

pub use styled::{StyleRun, StyledText, TextStyle};

// =============================================================================
// Leaves
// =============================================================================

/// A single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Space;

impl Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")
    }
}

/// A line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineBreak;

impl Display for LineBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")
    }
}

// =============================================================================
// TextBuilder
// =============================================================================

/// Result builder producing [`StyledText`].
///
/// The component is a `String`; every combinator except the leaf rule and
/// finalize uses the engine defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBuilder;

impl ResultBuilder for TextBuilder {
    type Component = String;
    type FinalResult = StyledText;

    fn build_final_result(&self, component: String) -> StyledText {
        trace!(len = component.len(), "finalized styled text");
        StyledText::new(component)
    }
}

impl<E: Display> BuildExpression<E> for TextBuilder {
    fn build_expression(&self, expression: E) -> String {
        expression.to_string()
    }
}
