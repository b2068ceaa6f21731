//! Configuration system for chatline.
//!
//! This crate provides configuration loading, saving, validation and default
//! values for the chat-line width model. It includes:
//!
//! - Chat line geometry (half-line width, glyph spacing, strikethrough width)
//! - The fallback policy for glyphs missing from the width table
//! - Per-character glyph width overrides
//! - The default padding character used when centering

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{GlyphOverride, MissingGlyph};
