//! Per-character width lookup for the chat font.
//!
//! The table covers printable ASCII. Everything else resolves through the
//! configured [`MissingGlyph`] policy, so lookups never fail.

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use chatline_config::{Config, MissingGlyph};

pub use table::{DEFAULT_FONT, UNKNOWN_GLYPH_WIDTH};

/// Rendered width of one glyph, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphWidth {
    /// Width in normal rendering
    pub normal: u16,
    /// Width in bold rendering
    pub bold: u16,
}

impl GlyphWidth {
    pub const fn new(normal: u16, bold: u16) -> Self {
        Self { normal, bold }
    }

    /// A glyph whose bold form is one pixel wider, as for most of the font.
    pub const fn regular(normal: u16) -> Self {
        Self {
            normal,
            bold: normal + 1,
        }
    }

    /// Width for the requested weight.
    pub fn width(&self, bold: bool) -> u16 {
        if bold { self.bold } else { self.normal }
    }

    /// `(normal, bold)` pair.
    pub fn as_pair(&self) -> (u16, u16) {
        (self.normal, self.bold)
    }
}

/// Width table for one font plus the policy for characters it lacks.
///
/// Immutable once built; share it by reference (or through [`default_table`]).
#[derive(Debug, Clone)]
pub struct GlyphTable {
    /// Dense storage for the ASCII range
    ascii: [Option<GlyphWidth>; 128],
    /// Overrides outside the ASCII range
    extra: HashMap<char, GlyphWidth>,
    /// Policy applied on lookup misses
    missing: MissingGlyph,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GlyphTable {
    /// Table with no glyphs at all; every lookup hits the fallback.
    pub fn empty() -> Self {
        Self {
            ascii: [None; 128],
            extra: HashMap::new(),
            missing: MissingGlyph::Default,
        }
    }

    /// The default chat font.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for &(c, width) in DEFAULT_FONT {
            let glyph = if c == ' ' {
                GlyphWidth::new(width, width)
            } else {
                GlyphWidth::regular(width)
            };
            table.insert(c, glyph);
        }
        table
    }

    /// The default chat font with the overrides and fallback policy from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut table = Self::builtin().with_missing_glyph(config.missing_glyph);
        for glyph in &config.glyph_overrides {
            log::debug!(
                "Overriding glyph {:?}: width={} bold={}",
                glyph.character,
                glyph.width,
                glyph.effective_bold_width()
            );
            table.insert(
                glyph.character,
                GlyphWidth::new(glyph.width, glyph.effective_bold_width()),
            );
        }
        table
    }

    /// Replace the lookup-miss policy.
    pub fn with_missing_glyph(mut self, policy: MissingGlyph) -> Self {
        self.missing = policy;
        self
    }

    /// Add or replace the width of `c`.
    pub fn insert(&mut self, c: char, glyph: GlyphWidth) {
        match ascii_index(c) {
            Some(idx) => self.ascii[idx] = Some(glyph),
            None => {
                self.extra.insert(c, glyph);
            }
        }
    }

    /// Width of `c` if the table has an entry for it.
    pub fn lookup(&self, c: char) -> Option<GlyphWidth> {
        match ascii_index(c) {
            Some(idx) => self.ascii[idx],
            None => self.extra.get(&c).copied(),
        }
    }

    /// Width of `c`, falling back to the missing-glyph policy.
    pub fn width_of(&self, c: char) -> GlyphWidth {
        self.lookup(c).unwrap_or_else(|| {
            log::trace!(
                "No glyph width for {:?}, using {}",
                c,
                self.missing.display_name()
            );
            self.fallback()
        })
    }

    /// Width reported for characters without an entry.
    pub fn fallback(&self) -> GlyphWidth {
        match self.missing {
            MissingGlyph::Default => GlyphWidth::regular(UNKNOWN_GLYPH_WIDTH),
            MissingGlyph::Space => self.lookup(' ').unwrap_or(GlyphWidth::new(3, 3)),
            MissingGlyph::Fixed { width, bold_width } => GlyphWidth::new(width, bold_width),
        }
    }

    pub fn missing_glyph(&self) -> MissingGlyph {
        self.missing
    }

    /// Number of characters with an explicit entry.
    pub fn len(&self) -> usize {
        self.ascii.iter().filter(|g| g.is_some()).count() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn ascii_index(c: char) -> Option<usize> {
    let idx = c as usize;
    (idx < 128).then_some(idx)
}

static DEFAULT_TABLE: OnceLock<GlyphTable> = OnceLock::new();

/// Process-wide built-in table.
pub fn default_table() -> &'static GlyphTable {
    DEFAULT_TABLE.get_or_init(GlyphTable::builtin)
}

/// Width of `c` in the built-in table.
pub fn width_of(c: char) -> GlyphWidth {
    default_table().width_of(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_printable_ascii() {
        let table = GlyphTable::builtin();
        for c in ' '..='~' {
            assert!(table.lookup(c).is_some(), "missing glyph for {:?}", c);
        }
        assert_eq!(table.len(), 95);
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(width_of('a').as_pair(), (5, 6));
        assert_eq!(width_of('i').as_pair(), (1, 2));
        assert_eq!(width_of('I').as_pair(), (3, 4));
        assert_eq!(width_of('t').as_pair(), (4, 5));
        assert_eq!(width_of('@').as_pair(), (6, 7));
        assert_eq!(width_of('=').as_pair(), (5, 6));
    }

    #[test]
    fn test_space_is_not_wider_when_bold() {
        assert_eq!(width_of(' ').as_pair(), (3, 3));
    }

    #[test]
    fn test_default_fallback() {
        let table = GlyphTable::builtin();
        assert!(table.lookup('é').is_none());
        assert_eq!(table.width_of('é'), GlyphWidth::new(4, 5));
        assert_eq!(table.width_of('\u{1F600}'), GlyphWidth::new(4, 5));
    }

    #[test]
    fn test_space_fallback() {
        let table = GlyphTable::builtin().with_missing_glyph(MissingGlyph::Space);
        assert_eq!(table.width_of('é'), GlyphWidth::new(3, 3));
    }

    #[test]
    fn test_fixed_fallback() {
        let table = GlyphTable::builtin().with_missing_glyph(MissingGlyph::Fixed {
            width: 7,
            bold_width: 9,
        });
        assert_eq!(table.width_of('ж'), GlyphWidth::new(7, 9));
        // Known glyphs are unaffected
        assert_eq!(table.width_of('l'), GlyphWidth::new(1, 2));
    }

    #[test]
    fn test_insert_non_ascii() {
        let mut table = GlyphTable::empty();
        assert!(table.is_empty());
        table.insert('é', GlyphWidth::regular(5));
        assert_eq!(table.lookup('é'), Some(GlyphWidth::new(5, 6)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_default_table_is_shared() {
        assert!(std::ptr::eq(default_table(), default_table()));
    }
}
