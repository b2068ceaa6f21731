// Library exports for the chatline binary and for plugins embedding it.
//
// Width and centering arithmetic lives in `chatline-font`; configuration in
// `chatline-config`. This crate adds the styled message model on top of them.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod color;
pub mod component;
pub mod debug;
pub mod legacy;
pub mod recipient;
pub mod text;

pub use chatline_config::{Config, ConfigError, GlyphOverride, MissingGlyph};
pub use chatline_font::{Filler, FontMetrics, GlyphTable, GlyphWidth, StyleFlags};
pub use color::{COLOR_CHAR, ChatColor, ParseColorError};
pub use recipient::{OutputFormat, Recipient, SendError, WriterRecipient};
pub use text::{ClickEvent, HoverEvent, Run, Text};
