//! Styled chat messages.
//!
//! A [`Text`] is either a single styled [`Run`] or an ordered sequence of
//! runs. Style setters and events only apply to a single run; appending turns
//! a single run into a sequence.
//!
//! ```
//! use chatline::{ChatColor, Text};
//!
//! let line = Text::of("Welcome")
//!     .color(&[ChatColor::Gold, ChatColor::Bold])
//!     .center('=', &Text::of(" "), &[ChatColor::DarkGray, ChatColor::Strikethrough]);
//! assert!(line.is_multiple());
//! ```

mod events;
mod run;

use std::fmt;

use chatline_font::{FontMetrics, StyleFlags};

use crate::color::ChatColor;

pub use events::{ClickEvent, HoverEvent};
pub use run::Run;

/// A chat message: one styled run or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Run(Run),
    Sequence(Vec<Run>),
}

impl Default for Text {
    fn default() -> Self {
        Self::empty()
    }
}

impl Text {
    /// A single unstyled run.
    pub fn of(text: impl Into<String>) -> Self {
        Text::Run(Run::new(text))
    }

    /// A single empty run.
    pub fn empty() -> Self {
        Self::of(String::new())
    }

    /// An empty sequence to append runs to.
    ///
    /// No unstyled root run is inserted, so style queries on the result only
    /// see the appended runs: `builder().append(bold)` is bold.
    pub fn builder() -> Self {
        Text::Sequence(Vec::new())
    }

    /// Apply colors and formats in order. Sequences are left unchanged.
    pub fn color(mut self, colors: &[ChatColor]) -> Self {
        match &mut self {
            Text::Run(run) => {
                for &color in colors {
                    run.apply(color);
                }
            }
            Text::Sequence(runs) => {
                log::debug!(
                    "Ignoring {} color(s) on a sequence of {} runs",
                    colors.len(),
                    runs.len()
                );
            }
        }
        self
    }

    /// Append `other`'s runs after this message's runs.
    pub fn append(self, other: Text) -> Self {
        let mut runs = self.into_runs();
        runs.extend(other.into_runs());
        Text::Sequence(runs)
    }

    /// Attach a click action. Sequences are left unchanged.
    pub fn with_click_event(mut self, event: ClickEvent) -> Self {
        if let Text::Run(run) = &mut self {
            run.click_event = Some(event);
        }
        self
    }

    /// Attach a tooltip. Sequences are left unchanged.
    pub fn with_hover_event(mut self, event: HoverEvent) -> Self {
        if let Text::Run(run) = &mut self {
            run.hover_event = Some(event);
        }
        self
    }

    /// Rendered width with the built-in font.
    pub fn rendered_length(&self) -> u32 {
        self.rendered_length_with(FontMetrics::shared())
    }

    /// Sum of each run's width under its own flags.
    pub fn rendered_length_with(&self, metrics: &FontMetrics) -> u32 {
        self.runs()
            .iter()
            .fold(0u32, |total, run| total.saturating_add(run.rendered_length(metrics)))
    }

    pub fn is_bold(&self) -> bool {
        self.all_runs(|r| r.bold)
    }

    pub fn is_italic(&self) -> bool {
        self.all_runs(|r| r.italic)
    }

    pub fn is_underlined(&self) -> bool {
        self.all_runs(|r| r.underlined)
    }

    pub fn is_strikethrough(&self) -> bool {
        self.all_runs(|r| r.strikethrough)
    }

    pub fn is_obfuscated(&self) -> bool {
        self.all_runs(|r| r.obfuscated)
    }

    /// A single run's flag, or whether every run of a non-empty sequence has it.
    fn all_runs(&self, flag: impl Fn(&Run) -> bool) -> bool {
        match self {
            Text::Run(run) => flag(run),
            Text::Sequence(runs) => !runs.is_empty() && runs.iter().all(flag),
        }
    }

    /// Center on the chat line with the built-in font.
    pub fn center(self, padding: char, separator: &Text, colors: &[ChatColor]) -> Text {
        self.center_with(FontMetrics::shared(), padding, separator, colors)
    }

    /// Surround this message with `separator` and padding so it sits in the
    /// middle of the chat line.
    ///
    /// The padding is styled with `colors`; bold and strikethrough among them
    /// change how many padding glyphs fit.
    pub fn center_with(
        self,
        metrics: &FontMetrics,
        padding: char,
        separator: &Text,
        colors: &[ChatColor],
    ) -> Text {
        let style = StyleFlags::new(
            colors.contains(&ChatColor::Bold),
            colors.contains(&ChatColor::Strikethrough),
        );
        let filler = metrics.center_pad(
            self.rendered_length_with(metrics),
            separator.rendered_length_with(metrics),
            padding,
            style,
        );
        log::debug!(
            "Centering {:?}: {} x {:?} per side ({} px unfilled)",
            self.plain_text(),
            filler.count,
            padding,
            filler.unfilled()
        );

        let fill = Text::of(filler.as_string()).color(colors);
        Text::builder()
            .append(fill.clone())
            .append(separator.clone())
            .append(self)
            .append(separator.clone())
            .append(fill)
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Text::Run(_))
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Text::Sequence(_))
    }

    /// True when no run has any visible text.
    ///
    /// Color codes are stripped first, so a message made only of `§` codes
    /// counts as empty.
    pub fn is_empty(&self) -> bool {
        self.runs().iter().all(|r| r.plain_text().is_empty())
    }

    /// The runs making up this message, in order.
    pub fn runs(&self) -> &[Run] {
        match self {
            Text::Run(run) => std::slice::from_ref(run),
            Text::Sequence(runs) => runs,
        }
    }

    pub fn into_runs(self) -> Vec<Run> {
        match self {
            Text::Run(run) => vec![run],
            Text::Sequence(runs) => runs,
        }
    }

    /// Concatenated text of every run without color codes.
    pub fn plain_text(&self) -> String {
        self.runs().iter().map(|r| r.plain_text()).collect()
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::of(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::of(text)
    }
}

impl From<Run> for Text {
    fn from(run: Run) -> Self {
        Text::Run(run)
    }
}

impl fmt::Display for Text {
    /// Legacy `§`-coded rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::legacy::to_legacy_text(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_is_reset_and_unstyled() {
        let text = Text::of("hi");
        assert!(text.is_single());
        let run = &text.runs()[0];
        assert_eq!(run.color, Some(ChatColor::Reset));
        assert!(!text.is_bold());
        assert!(!text.is_italic());
        assert!(!text.is_underlined());
        assert!(!text.is_strikethrough());
        assert!(!text.is_obfuscated());
    }

    #[test]
    fn test_color_sets_formats_and_color() {
        let text = Text::of("hi").color(&[ChatColor::Red, ChatColor::Bold, ChatColor::Magic]);
        let run = &text.runs()[0];
        assert_eq!(run.color, Some(ChatColor::Red));
        assert!(run.bold);
        assert!(run.obfuscated);
        assert!(!run.italic);
    }

    #[test]
    fn test_color_on_sequence_is_noop() {
        let seq = Text::of("a").append(Text::of("b"));
        let colored = seq.clone().color(&[ChatColor::Bold]);
        assert_eq!(seq, colored);
    }

    #[test]
    fn test_append_flattens() {
        let text = Text::of("a")
            .append(Text::of("b").append(Text::of("c")))
            .append(Text::of("d"));
        let words: Vec<_> = text.runs().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(words, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sequence_flags_require_all_runs() {
        let bold = Text::of("a")
            .color(&[ChatColor::Bold])
            .append(Text::of("b").color(&[ChatColor::Bold]));
        assert!(bold.is_bold());

        let mixed = bold.append(Text::of("c"));
        assert!(!mixed.is_bold());

        assert!(!Text::builder().is_bold());
    }

    #[test]
    fn test_builder_has_no_root_run() {
        let text = Text::builder().append(Text::of("a").color(&[ChatColor::Bold]));
        assert_eq!(text.runs().len(), 1);
        assert!(text.is_bold());
        assert!(text.is_multiple());
    }

    #[test]
    fn test_events_only_on_single() {
        let single = Text::of("x").with_click_event(ClickEvent::RunCommand("/spawn".into()));
        assert!(single.runs()[0].click_event.is_some());

        let seq = Text::of("x")
            .append(Text::of("y"))
            .with_hover_event(HoverEvent::show_text(Text::of("tip")));
        assert!(seq.runs().iter().all(|r| r.hover_event.is_none()));
    }

    #[test]
    fn test_is_empty() {
        assert!(Text::empty().is_empty());
        assert!(Text::builder().is_empty());
        assert!(Text::of("§c").is_empty());
        assert!(!Text::of("").append(Text::of(" ")).is_empty());
    }

    #[test]
    fn test_rendered_length_per_run() {
        // "ab" normal = 10, "ab" bold = 12, "ab" strikethrough = 16
        let text = Text::of("ab")
            .append(Text::of("ab").color(&[ChatColor::Bold]))
            .append(Text::of("ab").color(&[ChatColor::Strikethrough, ChatColor::Bold]));
        assert_eq!(text.rendered_length(), 10 + 12 + 16);
    }

    #[test]
    fn test_rendered_length_ignores_color_codes() {
        assert_eq!(Text::of("§cab§r").rendered_length(), 10);
    }
}
