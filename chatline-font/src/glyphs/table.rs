//! Built-in glyph widths of the default chat font (`ascii.png`).
//!
//! Widths are the pixel advance of each glyph in normal rendering, without the
//! one-pixel gap the client draws between glyphs.

/// Width of the font's generic glyph, reported for unknown characters.
pub const UNKNOWN_GLYPH_WIDTH: u16 = 4;

/// Normal-rendering width of every glyph in the default font.
///
/// Bold rendering is one pixel wider for every glyph except the space.
pub const DEFAULT_FONT: &[(char, u16)] = &[
    // Upper case
    ('A', 5),
    ('B', 5),
    ('C', 5),
    ('D', 5),
    ('E', 5),
    ('F', 5),
    ('G', 5),
    ('H', 5),
    ('I', 3),
    ('J', 5),
    ('K', 5),
    ('L', 5),
    ('M', 5),
    ('N', 5),
    ('O', 5),
    ('P', 5),
    ('Q', 5),
    ('R', 5),
    ('S', 5),
    ('T', 5),
    ('U', 5),
    ('V', 5),
    ('W', 5),
    ('X', 5),
    ('Y', 5),
    ('Z', 5),
    // Lower case
    ('a', 5),
    ('b', 5),
    ('c', 5),
    ('d', 5),
    ('e', 5),
    ('f', 4),
    ('g', 5),
    ('h', 5),
    ('i', 1),
    ('j', 5),
    ('k', 4),
    ('l', 1),
    ('m', 5),
    ('n', 5),
    ('o', 5),
    ('p', 5),
    ('q', 5),
    ('r', 5),
    ('s', 5),
    ('t', 4),
    ('u', 5),
    ('v', 5),
    ('w', 5),
    ('x', 5),
    ('y', 5),
    ('z', 5),
    // Digits
    ('0', 5),
    ('1', 5),
    ('2', 5),
    ('3', 5),
    ('4', 5),
    ('5', 5),
    ('6', 5),
    ('7', 5),
    ('8', 5),
    ('9', 5),
    // Punctuation and symbols
    ('!', 1),
    ('@', 6),
    ('#', 5),
    ('$', 5),
    ('%', 5),
    ('^', 5),
    ('&', 5),
    ('*', 5),
    ('(', 4),
    (')', 4),
    ('-', 5),
    ('_', 5),
    ('+', 5),
    ('=', 5),
    ('{', 4),
    ('}', 4),
    ('[', 3),
    (']', 3),
    (':', 1),
    (';', 1),
    ('"', 3),
    ('\'', 1),
    ('<', 4),
    ('>', 4),
    ('?', 5),
    ('/', 5),
    ('\\', 5),
    ('|', 1),
    ('~', 5),
    ('`', 2),
    ('.', 1),
    (',', 1),
    (' ', 3),
];
