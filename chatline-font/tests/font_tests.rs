//! Integration tests for chatline-font crate.

use chatline_config::{Config, GlyphOverride, MissingGlyph};
use chatline_font::glyphs::{DEFAULT_FONT, GlyphTable, GlyphWidth};
use chatline_font::metrics::{FontMetrics, StyleFlags};

#[test]
fn test_default_font_has_no_duplicates() {
    let mut seen = std::collections::HashSet::new();
    for (c, _) in DEFAULT_FONT {
        assert!(seen.insert(*c), "duplicate entry for {:?}", c);
    }
}

#[test]
fn test_normal_length_matches_sum_of_widths() {
    let metrics = FontMetrics::default();
    let text = "The quick brown fox jumps over the lazy dog!";
    let expected: u32 = text
        .chars()
        .map(|c| u32::from(metrics.table().width_of(c).normal))
        .sum();
    assert_eq!(metrics.rendered_length(text, false, false), expected);
}

#[test]
fn test_bold_strikethrough_uses_strikethrough_width() {
    let metrics = FontMetrics::default();
    for text in ["a", "WWW", "iii", "mixed Text 123"] {
        assert_eq!(
            metrics.rendered_length(text, true, true),
            text.chars().count() as u32 * 8,
            "{text}"
        );
    }
}

#[test]
fn test_filler_never_exceeds_target() {
    let metrics = FontMetrics::default();
    let styles = [
        StyleFlags::NONE,
        StyleFlags::new(true, false),
        StyleFlags::new(false, true),
        StyleFlags::new(true, true),
    ];
    for payload in (0..=320).step_by(7) {
        for separator in [0, 3, 11] {
            for padding in ['=', '-', '.', ' ', '@', 'é'] {
                for style in styles {
                    let filler = metrics.center_pad(payload, separator, padding, style);
                    let target = metrics.center_target(payload, separator);
                    assert!(i64::from(filler.width) <= target.max(0));
                    // One more glyph would overshoot
                    let next = i64::from(filler.width)
                        + i64::from(metrics.padding_width(padding, style));
                    assert!(target <= 0 || next > target);
                }
            }
        }
    }
}

#[test]
fn test_center_pad_is_deterministic() {
    let metrics = FontMetrics::default();
    let a = metrics.center_pad(57, 4, '-', StyleFlags::new(true, false));
    let b = metrics.center_pad(57, 4, '-', StyleFlags::new(true, false));
    assert_eq!(a, b);
}

#[test]
fn test_metrics_from_config() {
    let config = Config::new()
        .with_half_line_width(100)
        .with_strikethrough_width(4)
        .with_missing_glyph(MissingGlyph::Space)
        .with_glyph_override(GlyphOverride {
            character: '=',
            width: 2,
            bold_width: Some(2),
        });
    let metrics = FontMetrics::from_config(&config);

    assert_eq!(metrics.half_line_width, 100);
    assert_eq!(metrics.table().width_of('='), GlyphWidth::new(2, 2));
    assert_eq!(metrics.table().width_of('ü'), GlyphWidth::new(3, 3));
    assert_eq!(metrics.rendered_length("ab", false, true), 8);

    // target 100, char width 3 -> 33 glyphs
    let filler = metrics.center_pad(0, 0, '=', StyleFlags::NONE);
    assert_eq!(filler.count, 33);
    assert_eq!(filler.unfilled(), 1);
}

#[test]
fn test_zero_width_padding_does_not_loop() {
    let mut table = GlyphTable::builtin();
    table.insert('\u{200B}', GlyphWidth::new(0, 0));
    let mut metrics = FontMetrics::new(table);
    metrics.glyph_spacing = 0;

    let filler = metrics.center_pad(10, 0, '\u{200B}', StyleFlags::NONE);
    assert!(filler.is_empty());
}

#[test]
fn test_style_flags_default() {
    let flags = StyleFlags::default();
    assert_eq!(flags, StyleFlags::NONE);
    assert!(!flags.bold);
    assert!(!flags.strikethrough);
}
