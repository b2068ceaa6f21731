//! Chat colors and formatting codes.
//!
//! Each variant maps to a legacy `§` code character and to the name used in
//! chat-component JSON.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The section sign that introduces a legacy formatting code.
pub const COLOR_CHAR: char = '§';

/// A chat color or formatting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    /// Obfuscated ("magic") text
    Magic,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

/// Returned when a string names no known color or format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chat color or format: '{0}'")]
pub struct ParseColorError(pub String);

impl ChatColor {
    /// Every color and format, in code order.
    pub const ALL: [ChatColor; 22] = [
        ChatColor::Black,
        ChatColor::DarkBlue,
        ChatColor::DarkGreen,
        ChatColor::DarkAqua,
        ChatColor::DarkRed,
        ChatColor::DarkPurple,
        ChatColor::Gold,
        ChatColor::Gray,
        ChatColor::DarkGray,
        ChatColor::Blue,
        ChatColor::Green,
        ChatColor::Aqua,
        ChatColor::Red,
        ChatColor::LightPurple,
        ChatColor::Yellow,
        ChatColor::White,
        ChatColor::Magic,
        ChatColor::Bold,
        ChatColor::Strikethrough,
        ChatColor::Underline,
        ChatColor::Italic,
        ChatColor::Reset,
    ];

    /// Legacy code character (the one following `§`).
    pub fn code(self) -> char {
        match self {
            ChatColor::Black => '0',
            ChatColor::DarkBlue => '1',
            ChatColor::DarkGreen => '2',
            ChatColor::DarkAqua => '3',
            ChatColor::DarkRed => '4',
            ChatColor::DarkPurple => '5',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::DarkGray => '8',
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::LightPurple => 'd',
            ChatColor::Yellow => 'e',
            ChatColor::White => 'f',
            ChatColor::Magic => 'k',
            ChatColor::Bold => 'l',
            ChatColor::Strikethrough => 'm',
            ChatColor::Underline => 'n',
            ChatColor::Italic => 'o',
            ChatColor::Reset => 'r',
        }
    }

    /// Name used in chat-component JSON.
    pub fn name(self) -> &'static str {
        match self {
            ChatColor::Black => "black",
            ChatColor::DarkBlue => "dark_blue",
            ChatColor::DarkGreen => "dark_green",
            ChatColor::DarkAqua => "dark_aqua",
            ChatColor::DarkRed => "dark_red",
            ChatColor::DarkPurple => "dark_purple",
            ChatColor::Gold => "gold",
            ChatColor::Gray => "gray",
            ChatColor::DarkGray => "dark_gray",
            ChatColor::Blue => "blue",
            ChatColor::Green => "green",
            ChatColor::Aqua => "aqua",
            ChatColor::Red => "red",
            ChatColor::LightPurple => "light_purple",
            ChatColor::Yellow => "yellow",
            ChatColor::White => "white",
            ChatColor::Magic => "obfuscated",
            ChatColor::Bold => "bold",
            ChatColor::Strikethrough => "strikethrough",
            ChatColor::Underline => "underline",
            ChatColor::Italic => "italic",
            ChatColor::Reset => "reset",
        }
    }

    /// Look up a color by its legacy code character (case-insensitive).
    pub fn from_code(code: char) -> Option<ChatColor> {
        let code = code.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// True for the five formatting codes (not colors, not reset).
    pub fn is_format(self) -> bool {
        matches!(
            self,
            ChatColor::Magic
                | ChatColor::Bold
                | ChatColor::Strikethrough
                | ChatColor::Underline
                | ChatColor::Italic
        )
    }
}

impl fmt::Display for ChatColor {
    /// Formats as the legacy code, e.g. `§c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}

impl FromStr for ChatColor {
    type Err = ParseColorError;

    /// Accepts JSON names (`dark_red`), their dashed or upper-case spelling,
    /// `magic` for obfuscated, and single code characters (`c`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let mut chars = normalized.chars();
        if let (Some(code), None) = (chars.next(), chars.next())
            && let Some(color) = ChatColor::from_code(code)
        {
            return Ok(color);
        }
        if normalized == "magic" {
            return Ok(ChatColor::Magic);
        }
        if normalized == "underlined" {
            return Ok(ChatColor::Underline);
        }
        ChatColor::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in ChatColor::ALL.iter().enumerate() {
            for b in &ChatColor::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_from_code_roundtrip() {
        for color in ChatColor::ALL {
            assert_eq!(ChatColor::from_code(color.code()), Some(color));
        }
        assert_eq!(ChatColor::from_code('C'), Some(ChatColor::Red));
        assert_eq!(ChatColor::from_code('z'), None);
    }

    #[test]
    fn test_display_is_legacy_code() {
        assert_eq!(ChatColor::Red.to_string(), "§c");
        assert_eq!(ChatColor::Bold.to_string(), "§l");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("dark_red".parse(), Ok(ChatColor::DarkRed));
        assert_eq!("Dark-Red".parse(), Ok(ChatColor::DarkRed));
        assert_eq!("STRIKETHROUGH".parse(), Ok(ChatColor::Strikethrough));
        assert_eq!("magic".parse(), Ok(ChatColor::Magic));
        assert_eq!("obfuscated".parse(), Ok(ChatColor::Magic));
        assert_eq!("l".parse(), Ok(ChatColor::Bold));
        assert!("purple".parse::<ChatColor>().is_err());
    }

    #[test]
    fn test_format_classification() {
        assert!(ChatColor::Bold.is_format());
        assert!(!ChatColor::Gold.is_format());
        assert!(!ChatColor::Reset.is_format());
    }
}
