//! View Builder - Compose stacks of view handles.
//!
//! Leaves are anything implementing [`ViewComponent`]. Each leaf contributes
//! its [`ViewHandle`], statements concatenate handle lists, and finalize wraps
//! the list in a [`StackView`] configured by the [`StackBuilder`] it ran on.
//!
//! # Architecture
//!
//! Views are immutable nodes behind `Rc`. A handle can sit in several trees at
//! once; the builder only reads and reorders handles, never mutates the node.
//!
//! ```text
//! Label / Image / Swatch / StackView ──view()──▶ ViewHandle
//!        compose!(StackBuilder::vertical() => { ... })
//!                       ──▶ Vec<ViewHandle> ──finalize──▶ StackView
//! ```
//!
//! # Example
//!
//! ```
//! use spark_compose::compose;
//! use spark_compose::types::{Alignment, Rgba};
//! use spark_compose::view::{Image, Label, StackBuilder, Swatch};
//!
//! let symbols = ["gift.circle.fill", "star.circle.fill"];
//! let stack = compose!(StackBuilder::vertical().alignment(Alignment::Leading).spacing(10.0) => {
//!     Label::new("This is a heading").font_size(24.0);
//!     for symbol in symbols {
//!         compose!(StackBuilder::horizontal() => {
//!             Swatch::new(Rgba::RED).min_size(24.0, 24.0);
//!             Image::system(symbol);
//!             Label::new(symbol);
//!         });
//!     }
//! });
//! assert_eq!(stack.children().len(), 3);
//! ```

mod leaf;
mod stack;

use std::rc::Rc;

use tracing::debug;

use crate::builder::{BuildExpression, ResultBuilder};
use crate::types::Rgba;

pub use leaf::{Image, ImageSource, Label, Swatch, WrapperView};
pub use stack::{StackBuilder, StackConfig, StackView};

// =============================================================================
// View Nodes
// =============================================================================

/// Shared, immutable handle to a view node.
pub type ViewHandle = Rc<View>;

/// A node in a view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub kind: ViewKind,
    pub style: ViewStyle,
}

impl View {
    pub fn new(kind: ViewKind, style: ViewStyle) -> Self {
        Self { kind, style }
    }

    /// Move this node behind a fresh handle.
    pub fn into_handle(self) -> ViewHandle {
        Rc::new(self)
    }
}

/// What a view node displays.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewKind {
    Label(Label),
    Image(Image),
    Swatch(Swatch),
    Stack(StackView),
}

/// Appearance shared by every view kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewStyle {
    pub background: Option<Rgba>,
    pub tint: Option<Rgba>,
}

// =============================================================================
// ViewComponent
// =============================================================================

/// A leaf of the view builder: anything that can hand out a view handle.
pub trait ViewComponent {
    fn view(&self) -> ViewHandle;
}

impl ViewComponent for View {
    fn view(&self) -> ViewHandle {
        Rc::new(self.clone())
    }
}

impl<T: ViewComponent + ?Sized> ViewComponent for &T {
    fn view(&self) -> ViewHandle {
        (**self).view()
    }
}

impl<T: ViewComponent + ?Sized> ViewComponent for Box<T> {
    fn view(&self) -> ViewHandle {
        (**self).view()
    }
}

/// Modifiers available on every leaf.
///
/// Consuming setters so they chain off a constructor:
/// `Label::new("x").background(Rgba::BLACK)`.
pub trait ViewModifiers: Sized {
    fn view_style_mut(&mut self) -> &mut ViewStyle;

    fn background(mut self, color: Rgba) -> Self {
        self.view_style_mut().background = Some(color);
        self
    }

    fn tint(mut self, color: Rgba) -> Self {
        self.view_style_mut().tint = Some(color);
        self
    }
}

// =============================================================================
// StackBuilder as a ResultBuilder
// =============================================================================

impl ResultBuilder for StackBuilder {
    type Component = Vec<ViewHandle>;
    type FinalResult = StackView;

    fn build_final_result(&self, component: Vec<ViewHandle>) -> StackView {
        debug!(
            children = component.len(),
            axis = ?self.config().axis,
            "finalized stack view"
        );
        StackView::new(component, *self.config())
    }
}

impl<V: ViewComponent> BuildExpression<V> for StackBuilder {
    fn build_expression(&self, expression: V) -> Vec<ViewHandle> {
        vec![expression.view()]
    }
}
