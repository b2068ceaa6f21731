//! Default values for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `Config` field so partial YAML files load cleanly.

use crate::types::{GlyphOverride, MissingGlyph};

/// Half of the vanilla chat line in pixels (the chat box is 320 px wide,
/// minus its inner margins).
pub fn half_line_width() -> u32 {
    152
}

/// Per-character width used for strikethrough text, overriding the glyph table.
pub fn strikethrough_width() -> u16 {
    8
}

/// Gap the client draws between two glyphs.
pub fn glyph_spacing() -> u16 {
    1
}

pub fn missing_glyph() -> MissingGlyph {
    MissingGlyph::Default
}

pub fn padding() -> char {
    '='
}

pub fn glyph_overrides() -> Vec<GlyphOverride> {
    Vec::new()
}
