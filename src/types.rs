//! Core types shared by the text and view builders.
//!
//! Colors and text attributes are carried by leaves and style runs; the stack
//! enums are the configuration the view builder's finalize step applies.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels.
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Build from normalized float channels (0.0-1.0), as color literals
    /// from design tools are usually written.
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(channel(r), channel(g), channel(b), channel(a))
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
    }
}

// =============================================================================
// Stack Enums
// =============================================================================

/// Direction children are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Stretch children across the cross axis.
    Fill,
    /// Top for horizontal stacks, left for vertical ones.
    Leading,
    #[default]
    Center,
    /// Bottom for horizontal stacks, right for vertical ones.
    Trailing,
    /// Align text baselines (horizontal stacks).
    Baseline,
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Children fill the main axis. The flexbox style maps this to
    /// `JustifyContent::Stretch`, which packs children at the start; growing
    /// them is left to the layout pass.
    Fill,
    /// Equal gaps between children, edges flush.
    #[default]
    EqualSpacing,
    /// Equal gaps between child centers.
    EqualCentering,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_unit_rounds_and_clamps() {
        assert_eq!(Rgba::from_unit(1.0, 0.0, 0.5, 1.0), Rgba::new(255, 0, 128, 255));
        assert_eq!(Rgba::from_unit(2.0, -1.0, 0.0, 0.0), Rgba::new(255, 0, 0, 0));
    }

    #[test]
    fn test_attr_combines() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(!attrs.contains(Attr::ITALIC));
        assert_eq!(Attr::default(), Attr::NONE);
    }

    #[test]
    fn test_stack_enum_defaults() {
        assert_eq!(Axis::default(), Axis::Horizontal);
        assert_eq!(Alignment::default(), Alignment::Center);
        assert_eq!(Distribution::default(), Distribution::EqualSpacing);
    }
}
