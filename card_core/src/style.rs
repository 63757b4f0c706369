//! # Presentation Attributes
//!
//! Styling types attached to view-tree nodes. These are plain data: the
//! host framework decides how each attribute maps onto its own rendering
//! primitives.
//!
//! ## Design Philosophy
//!
//! We use simple value types rather than a full styling system because:
//! - The tree is static; nothing recomputes styles at runtime
//! - We want JSON serialization to stay readable
//! - Colors are stored as normalized floats, matching GPU-facing toolkits
//!
//! ## Example
//!
//! ```rust
//! use card_core::style::{BackgroundFill, Color};
//!
//! let fill = BackgroundFill::LinearGradient {
//!     top: Color::PURPLE,
//!     bottom: Color::BLUE,
//! };
//! let json = serde_json::to_string(&fill).unwrap();
//! assert!(json.contains("LinearGradient"));
//! ```

use serde::{Deserialize, Serialize};

/// Framework-default outer padding, in logical pixels.
pub const DEFAULT_PADDING: f32 = 16.0;

/// Framework-default inter-child spacing for stacks, in logical pixels.
pub const DEFAULT_SPACING: f32 = 8.0;

// ============================================================================
// Color
// ============================================================================

/// An sRGB color with straight alpha. Components are in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Opaque black
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// System palette blue (#007AFF)
    pub const BLUE: Color = Color { r: 0.0, g: 0.478, b: 1.0, a: 1.0 };

    /// System palette purple (#AF52DE)
    pub const PURPLE: Color = Color { r: 0.686, g: 0.322, b: 0.871, a: 1.0 };

    /// System palette yellow (#FFCC00)
    pub const YELLOW: Color = Color { r: 1.0, g: 0.8, b: 0.0, a: 1.0 };

    /// Fully transparent black
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Create an opaque color from rgb components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    /// Create a color from rgba components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

// ============================================================================
// Fonts
// ============================================================================

/// Semantic font style. The host framework picks concrete sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    /// Prominent heading text
    Title,
    /// Regular reading text
    Body,
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle::Body
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::Normal
    }
}

// ============================================================================
// Fills and shadow
// ============================================================================

/// Background of a styled container: a solid color or a two-color
/// top-to-bottom gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BackgroundFill {
    Solid { color: Color },
    LinearGradient { top: Color, bottom: Color },
}

/// Drop shadow. Only the blur radius is part of the description; shadow
/// color and offset are host-side presentation defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub blur_radius: f32,
}

// ============================================================================
// Container styling
// ============================================================================

/// Decorative styling applied around a container's content.
///
/// The default is the no-op style: zero padding, no background, square
/// corners, no shadow.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerStyle {
    /// Outer padding around the children, in logical pixels
    pub padding: f32,

    /// Optional background fill behind the children
    pub background: Option<BackgroundFill>,

    /// Corner radius of the background, in logical pixels
    pub corner_radius: f32,

    /// Optional drop shadow under the container
    pub shadow: Option<Shadow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::WHITE, Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(Color::BLUE.g, 0.478);
        assert_eq!(Color::TRANSPARENT.a, 0.0);
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_background_fill_serialization() {
        let fill = BackgroundFill::LinearGradient {
            top: Color::PURPLE,
            bottom: Color::BLUE,
        };
        let json = serde_json::to_string(&fill).unwrap();
        assert!(json.contains("\"type\":\"LinearGradient\""));

        let roundtrip: BackgroundFill = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, fill);

        let solid = BackgroundFill::Solid { color: Color::YELLOW };
        let json = serde_json::to_string(&solid).unwrap();
        let roundtrip: BackgroundFill = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, solid);
    }

    #[test]
    fn test_default_container_style_is_noop() {
        let style = ContainerStyle::default();
        assert_eq!(style.padding, 0.0);
        assert!(style.background.is_none());
        assert_eq!(style.corner_radius, 0.0);
        assert!(style.shadow.is_none());
    }

    #[test]
    fn test_font_defaults() {
        assert_eq!(FontStyle::default(), FontStyle::Body);
        assert_eq!(FontWeight::default(), FontWeight::Normal);
    }
}
