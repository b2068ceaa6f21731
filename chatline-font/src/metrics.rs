//! Rendered-length and centering arithmetic for the chat font.
//!
//! All functions here are total: empty strings, zero lengths and negative
//! centering budgets produce zero-width results rather than errors.

use std::fmt;
use std::sync::OnceLock;

use chatline_config::Config;

use crate::glyphs::GlyphTable;

/// Half of the vanilla chat line, in pixels.
pub const HALF_LINE_WIDTH: u32 = 152;

/// Width of every character rendered with strikethrough.
pub const STRIKETHROUGH_WIDTH: u16 = 8;

/// Gap the client draws after every glyph.
pub const GLYPH_SPACING: u16 = 1;

/// The style flags that affect glyph width.
///
/// Strikethrough takes precedence: a bold strikethrough run is measured with
/// the plain strikethrough width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct StyleFlags {
    pub bold: bool,
    pub strikethrough: bool,
}

impl StyleFlags {
    pub const NONE: StyleFlags = StyleFlags {
        bold: false,
        strikethrough: false,
    };

    pub const fn new(bold: bool, strikethrough: bool) -> Self {
        Self {
            bold,
            strikethrough,
        }
    }
}

/// Padding produced for one side of a centered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filler {
    /// Character repeated to fill the line
    pub padding: char,
    /// Number of repetitions
    pub count: usize,
    /// Style the filler must be rendered with for the width to hold
    pub style: StyleFlags,
    /// Pixels occupied by the filler, spacing included
    pub width: u32,
    /// Pixel budget for this side; negative when the payload overflows the line
    pub target: i64,
}

impl Filler {
    /// The repeated padding characters.
    pub fn as_string(&self) -> String {
        std::iter::repeat_n(self.padding, self.count).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Budget left over because the next padding glyph would not fit.
    pub fn unfilled(&self) -> u32 {
        u32::try_from(self.target.max(0))
            .unwrap_or(u32::MAX)
            .saturating_sub(self.width)
    }
}

impl fmt::Display for Filler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.count {
            write!(f, "{}", self.padding)?;
        }
        Ok(())
    }
}

/// Glyph table plus chat-line geometry.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    table: GlyphTable,
    /// Pixel budget for one side of a centered line
    pub half_line_width: u32,
    /// Per-character width under strikethrough
    pub strikethrough_width: u16,
    /// Gap added after each padding glyph when centering
    pub glyph_spacing: u16,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::new(GlyphTable::builtin())
    }
}

impl FontMetrics {
    /// Metrics over `table` with the vanilla line geometry.
    pub fn new(table: GlyphTable) -> Self {
        Self {
            table,
            half_line_width: HALF_LINE_WIDTH,
            strikethrough_width: STRIKETHROUGH_WIDTH,
            glyph_spacing: GLYPH_SPACING,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            table: GlyphTable::from_config(config),
            half_line_width: config.half_line_width,
            strikethrough_width: config.strikethrough_width,
            glyph_spacing: config.glyph_spacing,
        }
    }

    /// Process-wide metrics for the built-in font and vanilla geometry.
    pub fn shared() -> &'static FontMetrics {
        static SHARED: OnceLock<FontMetrics> = OnceLock::new();
        SHARED.get_or_init(FontMetrics::default)
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// Rendered width of `text`, which must already be free of color codes.
    pub fn rendered_length(&self, text: &str, bold: bool, strikethrough: bool) -> u32 {
        if strikethrough {
            let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
            return count.saturating_mul(u32::from(self.strikethrough_width));
        }

        text.chars().fold(0u32, |total, c| {
            total.saturating_add(u32::from(self.table.width_of(c).width(bold)))
        })
    }

    /// [`Self::rendered_length`] with the flags bundled.
    pub fn rendered_length_styled(&self, text: &str, style: StyleFlags) -> u32 {
        self.rendered_length(text, style.bold, style.strikethrough)
    }

    /// Width one padding glyph consumes when centering, spacing included.
    pub fn padding_width(&self, padding: char, style: StyleFlags) -> u32 {
        let glyph = if style.strikethrough {
            self.strikethrough_width
        } else {
            self.table.width_of(padding).width(style.bold)
        };
        u32::from(glyph) + u32::from(self.glyph_spacing)
    }

    /// Signed pixel budget for one side of a line holding the payload
    /// between two separators.
    pub fn center_target(&self, payload_len: u32, separator_len: u32) -> i64 {
        let content = i64::from(payload_len) + 2 * i64::from(separator_len);
        i64::from(self.half_line_width) - content / 2
    }

    /// Filler for one side of a centered line.
    ///
    /// Padding glyphs are added greedily while they fit in the budget; the
    /// remainder is left empty rather than filled with a narrower glyph.
    pub fn center_pad(
        &self,
        payload_len: u32,
        separator_len: u32,
        padding: char,
        style: StyleFlags,
    ) -> Filler {
        let target = self.center_target(payload_len, separator_len);
        let char_width = self.padding_width(padding, style);

        let count = if target <= 0 {
            0
        } else if char_width == 0 {
            log::warn!("Padding {:?} has zero width, leaving line unpadded", padding);
            0
        } else {
            // Greedy fill: the largest count whose width stays within target
            usize::try_from(target / i64::from(char_width)).unwrap_or(usize::MAX)
        };

        let width = u32::try_from(count)
            .unwrap_or(u32::MAX)
            .saturating_mul(char_width);
        log::trace!(
            "center_pad: payload={} separator={} target={} char_width={} count={}",
            payload_len,
            separator_len,
            target,
            char_width,
            count
        );

        Filler {
            padding,
            count,
            style,
            width,
            target,
        }
    }
}

/// Rendered width of `text` with the built-in font.
pub fn rendered_length(text: &str, bold: bool, strikethrough: bool) -> u32 {
    FontMetrics::shared().rendered_length(text, bold, strikethrough)
}

/// Filler for one side of a centered line with the built-in font.
pub fn center_pad(
    payload_len: u32,
    separator_len: u32,
    padding: char,
    style: StyleFlags,
) -> Filler {
    FontMetrics::shared().center_pad(payload_len, separator_len, padding, style)
}
