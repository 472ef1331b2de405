//! Stack - The container the view builder finalizes into.
//!
//! A [`StackBuilder`] carries the layout parameters; finalize builds a
//! [`StackView`] whose children are exactly the composed handles and whose
//! non-content properties come from that configuration.
//!
//! [`StackView::style`] expresses those properties as a Taffy flexbox
//! [`Style`] for whichever layout pass consumes the tree. No layout is
//! computed here.

use serde::{Deserialize, Serialize};
use taffy::{
    AlignItems as TaffyAlignItems, Display, FlexDirection as TaffyFlexDirection,
    JustifyContent as TaffyJustifyContent, LengthPercentage, Size, Style,
};
use tracing::warn;

use crate::error::{ConfigError, Result};
use crate::types::{Alignment, Axis, Distribution};

use super::{View, ViewComponent, ViewHandle, ViewKind, ViewModifiers, ViewStyle};

// =============================================================================
// StackConfig
// =============================================================================

/// Layout parameters applied by finalize.
///
/// Missing fields deserialize to their defaults:
///
/// ```
/// use spark_compose::types::{Alignment, Axis};
/// use spark_compose::view::StackConfig;
///
/// let config: StackConfig = serde_json::from_str(r#"{ "axis": "vertical", "spacing": 8 }"#).unwrap();
/// assert_eq!(config.axis, Axis::Vertical);
/// assert_eq!(config.alignment, Alignment::Center);
/// assert_eq!(config.spacing, 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub axis: Axis,
    pub alignment: Alignment,
    /// Gap between adjacent children along the axis.
    pub spacing: f32,
    pub distribution: Distribution,
}

impl StackConfig {
    /// Reject spacing that no layout pass can honor.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() {
            return Err(ConfigError::NonFiniteSpacing(self.spacing));
        }
        if self.spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        Ok(())
    }
}

// =============================================================================
// StackBuilder
// =============================================================================

/// Result builder producing a [`StackView`].
///
/// ```
/// use spark_compose::compose;
/// use spark_compose::view::{Label, StackBuilder};
///
/// let row = compose!(StackBuilder::horizontal().spacing(4.0) => {
///     Label::new("left");
///     Label::new("right");
/// });
/// assert_eq!(row.children().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StackBuilder {
    config: StackConfig,
}

impl StackBuilder {
    /// Children laid out left to right.
    pub fn horizontal() -> Self {
        Self::from_axis(Axis::Horizontal)
    }

    /// Children laid out top to bottom.
    pub fn vertical() -> Self {
        Self::from_axis(Axis::Vertical)
    }

    fn from_axis(axis: Axis) -> Self {
        Self {
            config: StackConfig {
                axis,
                ..StackConfig::default()
            },
        }
    }

    /// Builder for an externally supplied configuration, validated up front.
    pub fn with_config(config: StackConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.config.spacing = spacing;
        self
    }

    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.config.distribution = distribution;
        self
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }
}

// =============================================================================
// StackView
// =============================================================================

/// A finalized stack: ordered child handles plus layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StackView {
    children: Vec<ViewHandle>,
    config: StackConfig,
    style: ViewStyle,
}

impl StackView {
    pub fn new(children: Vec<ViewHandle>, config: StackConfig) -> Self {
        Self {
            children,
            config,
            style: ViewStyle::default(),
        }
    }

    pub fn children(&self) -> &[ViewHandle] {
        &self.children
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn into_children(self) -> Vec<ViewHandle> {
        self.children
    }

    /// Flexbox style for this container.
    ///
    /// Invalid spacing (negative or non-finite) is treated as zero.
    pub fn style(&self) -> Style {
        let spacing = effective_spacing(self.config.spacing);
        let gap = if self.config.axis.is_horizontal() {
            Size {
                width: LengthPercentage::Length(spacing),
                height: LengthPercentage::Length(0.0),
            }
        } else {
            Size {
                width: LengthPercentage::Length(0.0),
                height: LengthPercentage::Length(spacing),
            }
        };

        Style {
            display: Display::Flex,
            flex_direction: to_taffy_flex_direction(self.config.axis),
            align_items: Some(to_taffy_align_items(self.config.alignment)),
            justify_content: Some(to_taffy_justify_content(self.config.distribution)),
            gap,
            ..Style::default()
        }
    }
}

impl ViewModifiers for StackView {
    fn view_style_mut(&mut self) -> &mut ViewStyle {
        &mut self.style
    }
}

impl ViewComponent for StackView {
    fn view(&self) -> ViewHandle {
        View::new(ViewKind::Stack(self.clone()), self.style).into_handle()
    }
}

fn effective_spacing(spacing: f32) -> f32 {
    if spacing.is_finite() && spacing >= 0.0 {
        spacing
    } else {
        warn!(spacing, "invalid stack spacing, using 0");
        0.0
    }
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(axis: Axis) -> TaffyFlexDirection {
    match axis {
        Axis::Horizontal => TaffyFlexDirection::Row,
        Axis::Vertical => TaffyFlexDirection::Column,
    }
}

fn to_taffy_align_items(alignment: Alignment) -> TaffyAlignItems {
    match alignment {
        Alignment::Fill => TaffyAlignItems::Stretch,
        Alignment::Leading => TaffyAlignItems::FlexStart,
        Alignment::Center => TaffyAlignItems::Center,
        Alignment::Trailing => TaffyAlignItems::FlexEnd,
        Alignment::Baseline => TaffyAlignItems::Baseline,
    }
}

fn to_taffy_justify_content(distribution: Distribution) -> TaffyJustifyContent {
    match distribution {
        // Stretch acts as flex-start for justify-content; children are not grown.
        Distribution::Fill => TaffyJustifyContent::Stretch,
        Distribution::EqualSpacing => TaffyJustifyContent::SpaceBetween,
        Distribution::EqualCentering => TaffyJustifyContent::SpaceAround,
    }
}
