//! Leaf views - Label, Image, Swatch and WrapperView.
//!
//! Leaves are plain values configured with consuming setters. Calling
//! [`ViewComponent::view`] snapshots the current configuration into a new
//! handle.

use crate::types::{Attr, Rgba};

use super::{View, ViewComponent, ViewHandle, ViewKind, ViewModifiers, ViewStyle};

// =============================================================================
// Label
// =============================================================================

/// A single run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font_size: Option<f32>,
    fg: Option<Rgba>,
    attrs: Attr,
    style: ViewStyle,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: None,
            fg: None,
            attrs: Attr::NONE,
            style: ViewStyle::default(),
        }
    }

    /// Font size in points. `None` keeps the consumer's default.
    pub fn font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    pub fn foreground(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size_points(&self) -> Option<f32> {
        self.font_size
    }

    pub fn fg(&self) -> Option<Rgba> {
        self.fg
    }

    pub fn text_attrs(&self) -> Attr {
        self.attrs
    }
}

impl ViewModifiers for Label {
    fn view_style_mut(&mut self) -> &mut ViewStyle {
        &mut self.style
    }
}

impl ViewComponent for Label {
    fn view(&self) -> ViewHandle {
        View::new(ViewKind::Label(self.clone()), self.style).into_handle()
    }
}

// =============================================================================
// Image
// =============================================================================

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A named symbol from the host's symbol set.
    System(String),
    /// A named asset bundled with the application.
    Asset(String),
}

/// An image, referenced by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    source: ImageSource,
    style: ViewStyle,
}

impl Image {
    pub fn system(name: impl Into<String>) -> Self {
        Self::from_source(ImageSource::System(name.into()))
    }

    pub fn asset(name: impl Into<String>) -> Self {
        Self::from_source(ImageSource::Asset(name.into()))
    }

    pub fn from_source(source: ImageSource) -> Self {
        Self {
            source,
            style: ViewStyle::default(),
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }
}

impl ViewModifiers for Image {
    fn view_style_mut(&mut self) -> &mut ViewStyle {
        &mut self.style
    }
}

impl ViewComponent for Image {
    fn view(&self) -> ViewHandle {
        View::new(ViewKind::Image(self.clone()), self.style).into_handle()
    }
}

// =============================================================================
// Swatch
// =============================================================================

/// A block of solid color with optional minimum dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    color: Rgba,
    min_width: Option<f32>,
    min_height: Option<f32>,
    style: ViewStyle,
}

impl Swatch {
    /// The swatch color seeds the view background.
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            min_width: None,
            min_height: None,
            style: ViewStyle {
                background: Some(color),
                tint: None,
            },
        }
    }

    /// Minimum size; pass a non-positive value to leave a side unconstrained.
    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_width = (width > 0.0).then_some(width);
        self.min_height = (height > 0.0).then_some(height);
        self
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn min_width(&self) -> Option<f32> {
        self.min_width
    }

    pub fn min_height(&self) -> Option<f32> {
        self.min_height
    }
}

impl ViewModifiers for Swatch {
    fn view_style_mut(&mut self) -> &mut ViewStyle {
        &mut self.style
    }
}

impl ViewComponent for Swatch {
    fn view(&self) -> ViewHandle {
        View::new(ViewKind::Swatch(self.clone()), self.style).into_handle()
    }
}

// =============================================================================
// WrapperView
// =============================================================================

/// Adapts an existing handle into a leaf.
///
/// The same handle is handed out every time, so identity survives composition.
#[derive(Debug, Clone)]
pub struct WrapperView {
    handle: ViewHandle,
}

impl WrapperView {
    pub fn new(handle: ViewHandle) -> Self {
        Self { handle }
    }
}

impl ViewComponent for WrapperView {
    fn view(&self) -> ViewHandle {
        self.handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_setters() {
        let label = Label::new("heading")
            .font_size(24.0)
            .foreground(Rgba::GRAY)
            .attrs(Attr::BOLD);
        assert_eq!(label.text(), "heading");
        assert_eq!(label.font_size_points(), Some(24.0));
        assert_eq!(label.fg(), Some(Rgba::GRAY));
        assert_eq!(label.text_attrs(), Attr::BOLD);
    }

    #[test]
    fn test_view_snapshots_leaf() {
        let label = Label::new("before");
        let handle = label.view();
        let label = label.foreground(Rgba::RED);
        match &handle.kind {
            ViewKind::Label(snapshot) => assert_eq!(snapshot.fg(), None),
            other => panic!("expected label, got {other:?}"),
        }
        assert_ne!(label.view(), handle);
    }

    #[test]
    fn test_image_sources() {
        assert_eq!(
            Image::system("star.circle.fill").source(),
            &ImageSource::System("star.circle.fill".into())
        );
        assert_eq!(Image::asset("logo").source(), &ImageSource::Asset("logo".into()));
    }

    #[test]
    fn test_swatch_min_size_ignores_non_positive() {
        let swatch = Swatch::new(Rgba::GREEN).min_size(24.0, 0.0);
        assert_eq!(swatch.min_width(), Some(24.0));
        assert_eq!(swatch.min_height(), None);
        assert_eq!(swatch.view().style.background, Some(Rgba::GREEN));
    }

    #[test]
    fn test_swatch_takes_shared_modifiers() {
        let handle = Swatch::new(Rgba::RED).tint(Rgba::BLUE).view();
        assert_eq!(handle.style.background, Some(Rgba::RED), "color seeds background");
        assert_eq!(handle.style.tint, Some(Rgba::BLUE));

        let overridden = Swatch::new(Rgba::RED).background(Rgba::BLACK).view();
        assert_eq!(overridden.style.background, Some(Rgba::BLACK));
        match &overridden.kind {
            ViewKind::Swatch(swatch) => assert_eq!(swatch.color(), Rgba::RED),
            other => panic!("expected swatch, got {other:?}"),
        }
    }

    #[test]
    fn test_wrapper_hands_out_same_handle() {
        let handle = Image::system("gift").view();
        let wrapper = WrapperView::new(handle.clone());
        assert!(std::rc::Rc::ptr_eq(&wrapper.view(), &handle));
    }
}
