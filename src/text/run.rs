//! A contiguous span of text sharing one style.

use std::borrow::Cow;

use chatline_font::{FontMetrics, StyleFlags};

use super::events::{ClickEvent, HoverEvent};
use crate::color::ChatColor;
use crate::legacy::strip_color;

/// One styled span of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    /// `None` inherits the parent color when serialized
    pub color: Option<ChatColor>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
    pub click_event: Option<ClickEvent>,
    pub hover_event: Option<HoverEvent>,
}

impl Run {
    /// A run with every flag cleared and the color reset.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Some(ChatColor::Reset),
            bold: false,
            italic: false,
            underlined: false,
            strikethrough: false,
            obfuscated: false,
            click_event: None,
            hover_event: None,
        }
    }

    /// Apply one color or format code.
    ///
    /// Formats switch their flag on; colors and reset replace the color.
    /// Reset does not clear flags.
    pub fn apply(&mut self, color: ChatColor) {
        if !color.is_format() {
            self.color = Some(color);
            return;
        }
        let flag = match color {
            ChatColor::Strikethrough => &mut self.strikethrough,
            ChatColor::Bold => &mut self.bold,
            ChatColor::Italic => &mut self.italic,
            ChatColor::Underline => &mut self.underlined,
            _ => &mut self.obfuscated,
        };
        *flag = true;
    }

    /// Text with legacy color codes removed.
    pub fn plain_text(&self) -> Cow<'_, str> {
        strip_color(&self.text)
    }

    /// The flags that change glyph width.
    pub fn style_flags(&self) -> StyleFlags {
        StyleFlags::new(self.bold, self.strikethrough)
    }

    /// Rendered width of this run under its own flags.
    pub fn rendered_length(&self, metrics: &FontMetrics) -> u32 {
        metrics.rendered_length_styled(&self.plain_text(), self.style_flags())
    }
}

impl Default for Run {
    fn default() -> Self {
        Self::new(String::new())
    }
}
