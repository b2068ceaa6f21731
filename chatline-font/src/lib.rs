//! Glyph widths and line centering for the game's bitmap chat font.
//!
//! This crate provides:
//! - A per-character width table with normal and bold columns
//! - An explicit fallback policy for characters missing from the table
//! - Rendered-length calculation for a run of text under bold/strikethrough
//! - Greedy filler computation for centering text on a chat line
//!
//! # Architecture
//!
//! `GlyphTable` answers "how wide is this character". The built-in table is
//! shared process-wide via [`glyphs::default_table`]. `FontMetrics` pairs a
//! table with the line geometry (half-line width, strikethrough width, glyph
//! spacing) and performs the length and centering arithmetic.

pub mod glyphs;
pub mod metrics;

// Re-export main types for convenience
pub use glyphs::{GlyphTable, GlyphWidth, default_table, width_of};
pub use metrics::{
    Filler, FontMetrics, GLYPH_SPACING, HALF_LINE_WIDTH, STRIKETHROUGH_WIDTH, StyleFlags,
    center_pad, rendered_length,
};
