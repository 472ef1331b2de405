//! # spark-compose
//!
//! Declarative result builders for Rust.
//!
//! Describe a tree of components with ordinary control flow (sequences,
//! `if`/`else`, `if let`, `for`) and have it reduced into one aggregate
//! result by a small set of builder combinators.
//!
//! ## Architecture
//!
//! One engine, two instantiations:
//!
//! ```text
//! statements ──compose!/Statement──▶ build_expression / build_block / ...
//!            ──▶ Component (String | Vec<ViewHandle>)
//!            ──build_final_result──▶ StyledText | StackView
//! ```
//!
//! ## Modules
//!
//! - [`builder`] - The combinator traits, the `compose!` macro, statement trees
//! - [`text`] - Text builder producing [`StyledText`]
//! - [`view`] - View builder producing [`StackView`]
//! - [`types`] - Colors, text attributes, stack enums
//! - [`error`] - Configuration and styling errors
//!
//! ## Example
//!
//! ```
//! use spark_compose::{compose, LineBreak, Space, TextBuilder};
//!
//! let odd = true;
//! let text = compose!(TextBuilder => {
//!     "hello"; Space; 42; LineBreak;
//!     if odd { "odd:" } else { "even:" }
//!     Space; !odd; LineBreak;
//! });
//! assert_eq!(text.to_string(), "hello 42\nodd: false\n");
//! ```

pub mod builder;
pub mod error;
pub mod text;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use builder::{concat, BuildExpression, Component, ResultBuilder, Statement};

pub use error::{ConfigError, StyleError};

pub use text::{LineBreak, Space, StyleRun, StyledText, TextBuilder, TextStyle};

pub use view::{
    Image, ImageSource, Label, StackBuilder, StackConfig, StackView, Swatch, View, ViewComponent,
    ViewHandle, ViewKind, ViewModifiers, ViewStyle, WrapperView,
};
