//! Click and hover interactivity attached to a run.

use super::Text;

/// Action performed when the player clicks a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEvent {
    OpenUrl(String),
    OpenFile(String),
    /// Sent as if typed by the player
    RunCommand(String),
    /// Placed in the player's chat input
    SuggestCommand(String),
    /// Book page number
    ChangePage(String),
    CopyToClipboard(String),
}

impl ClickEvent {
    /// JSON action name.
    pub fn action(&self) -> &'static str {
        match self {
            ClickEvent::OpenUrl(_) => "open_url",
            ClickEvent::OpenFile(_) => "open_file",
            ClickEvent::RunCommand(_) => "run_command",
            ClickEvent::SuggestCommand(_) => "suggest_command",
            ClickEvent::ChangePage(_) => "change_page",
            ClickEvent::CopyToClipboard(_) => "copy_to_clipboard",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ClickEvent::OpenUrl(v)
            | ClickEvent::OpenFile(v)
            | ClickEvent::RunCommand(v)
            | ClickEvent::SuggestCommand(v)
            | ClickEvent::ChangePage(v)
            | ClickEvent::CopyToClipboard(v) => v,
        }
    }
}

/// Tooltip shown while the player hovers a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverEvent {
    /// Styled tooltip text
    ShowText(Box<Text>),
    /// Serialized item (SNBT)
    ShowItem(String),
    /// Serialized entity (SNBT)
    ShowEntity(String),
}

impl HoverEvent {
    pub fn show_text(text: Text) -> Self {
        HoverEvent::ShowText(Box::new(text))
    }

    /// JSON action name.
    pub fn action(&self) -> &'static str {
        match self {
            HoverEvent::ShowText(_) => "show_text",
            HoverEvent::ShowItem(_) => "show_item",
            HoverEvent::ShowEntity(_) => "show_entity",
        }
    }
}
