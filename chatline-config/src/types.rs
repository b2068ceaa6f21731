//! Glyph-related configuration types.

use serde::{Deserialize, Serialize};

/// What the width table reports for a character it has no entry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingGlyph {
    /// The font's generic glyph: 4 px, 5 px when bold (default)
    #[default]
    Default,
    /// Measure the character as if it were a space
    Space,
    /// A fixed width supplied by the user
    Fixed {
        /// Width in normal rendering
        width: u16,
        /// Width in bold rendering
        bold_width: u16,
    },
}

impl MissingGlyph {
    /// Display name for the CLI and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            MissingGlyph::Default => "default glyph",
            MissingGlyph::Space => "space width",
            MissingGlyph::Fixed { .. } => "fixed width",
        }
    }
}

/// Replaces (or adds) the width of a single character in the glyph table.
///
/// Useful for resource packs that ship a modified `ascii.png`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphOverride {
    /// Character being overridden
    pub character: char,
    /// Width in normal rendering
    pub width: u16,
    /// Width in bold rendering; defaults to `width + 1` like the built-in font
    #[serde(default)]
    pub bold_width: Option<u16>,
}

impl GlyphOverride {
    /// Bold width, falling back to the font's one-pixel bold offset.
    pub fn effective_bold_width(&self) -> u16 {
        self.bold_width.unwrap_or_else(|| self.width.saturating_add(1))
    }
}
