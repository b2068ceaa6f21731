//! Legacy `§`-coded text.
//!
//! The chat client still understands formatting codes embedded in plain
//! strings. Widths are always measured on the stripped text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::color::{COLOR_CHAR, ChatColor};
use crate::text::Text;

fn color_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new("(?i)§[0-9a-fk-orx]").expect("regex pattern is valid and should always compile")
    })
}

/// Remove every `§` code from `text`.
///
/// A `§` not followed by a valid code character is kept.
pub fn strip_color(text: &str) -> Cow<'_, str> {
    if !text.contains(COLOR_CHAR) {
        return Cow::Borrowed(text);
    }
    color_code_regex().replace_all(text, "")
}

/// Replace `alt_char` followed by a valid code with `§`, e.g. `&c` → `§c`.
pub fn translate_alternate_codes(alt_char: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == alt_char
            && let Some(&next) = chars.peek()
            && (ChatColor::from_code(next).is_some() || next.eq_ignore_ascii_case(&'x'))
        {
            out.push(COLOR_CHAR);
            continue;
        }
        out.push(c);
    }
    out
}

/// Render a message as legacy text: color, then active formats, then text, per run.
pub fn to_legacy_text(text: &Text) -> String {
    let mut out = String::new();
    for run in text.runs() {
        if let Some(color) = run.color {
            out.push_str(&color.to_string());
        }
        let formats = [
            (run.bold, ChatColor::Bold),
            (run.italic, ChatColor::Italic),
            (run.underlined, ChatColor::Underline),
            (run.strikethrough, ChatColor::Strikethrough),
            (run.obfuscated, ChatColor::Magic),
        ];
        for (active, format) in formats {
            if active {
                out.push_str(&format.to_string());
            }
        }
        out.push_str(&run.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_color() {
        assert_eq!(strip_color("§cRed §lBold§r done"), "Red Bold done");
        assert_eq!(strip_color("§C§KUpper"), "Upper");
        assert_eq!(strip_color("plain"), "plain");
        assert!(matches!(strip_color("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_keeps_invalid_codes() {
        assert_eq!(strip_color("§z§"), "§z§");
    }

    #[test]
    fn test_translate_alternate_codes() {
        assert_eq!(translate_alternate_codes('&', "&cHi &lthere"), "§cHi §lthere");
        assert_eq!(translate_alternate_codes('&', "Tom & Jerry"), "Tom & Jerry");
        assert_eq!(translate_alternate_codes('&', "trailing &"), "trailing &");
    }

    #[test]
    fn test_to_legacy_text() {
        let text = Text::of("Hi")
            .color(&[ChatColor::Red, ChatColor::Bold])
            .append(Text::of(" there").color(&[ChatColor::Italic, ChatColor::Strikethrough]));
        assert_eq!(to_legacy_text(&text), "§c§lHi§r§o§m there");
    }
}
