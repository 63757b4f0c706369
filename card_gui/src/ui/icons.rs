//! Symbolic icon resolution
//!
//! The model stores icons as symbolic names ("star"); this module maps
//! them onto text glyphs the renderer can draw with the regular text
//! pipeline. Unknown names resolve to a visible placeholder rather than an
//! error, since the description layer has no failure path.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Shown when an icon name has no glyph mapping.
pub const FALLBACK_GLYPH: &str = "□";

static GLYPHS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("star", "★"),
        ("star.outline", "☆"),
        ("heart", "♥"),
        ("circle", "●"),
        ("checkmark", "✓"),
    ])
});

/// Resolve a symbolic icon name to its text glyph.
pub fn glyph(name: &str) -> &'static str {
    GLYPHS.get(name).copied().unwrap_or(FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_resolves_to_filled_glyph() {
        assert_eq!(glyph("star"), "★");
        assert_eq!(glyph("star.outline"), "☆");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(glyph("no-such-icon"), FALLBACK_GLYPH);
    }
}
