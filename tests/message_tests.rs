//! Building, encoding and delivering messages.

use chatline::component::{to_json, to_value};
use chatline::legacy::{strip_color, to_legacy_text};
use chatline::{
    ChatColor, ClickEvent, HoverEvent, OutputFormat, Recipient, Run, SendError, Text,
    WriterRecipient,
};
use parking_lot::Mutex;

/// Records every message it receives.
#[derive(Default)]
struct Inbox {
    messages: Mutex<Vec<Vec<Run>>>,
}

impl Recipient for Inbox {
    fn send_message(&self, runs: &[Run]) -> Result<(), SendError> {
        self.messages.lock().push(runs.to_vec());
        Ok(())
    }
}

#[test]
fn test_empty_constant_behaviour() {
    let empty = Text::empty();
    assert!(empty.is_single());
    assert!(empty.is_empty());
    assert_eq!(empty.rendered_length(), 0);
    assert_eq!(Text::default(), empty);
}

#[test]
fn test_builder_then_append() {
    let text = Text::builder()
        .append(Text::of("[").color(&[ChatColor::DarkGray]))
        .append(Text::of("Server").color(&[ChatColor::Gold, ChatColor::Bold]))
        .append(Text::of("] ").color(&[ChatColor::DarkGray]))
        .append(Text::of("Welcome!"));
    assert_eq!(text.runs().len(), 4);
    assert_eq!(text.plain_text(), "[Server] Welcome!");
    assert_eq!(
        to_legacy_text(&text),
        "§8[§6§lServer§8] §rWelcome!"
    );
    assert_eq!(strip_color(&text.to_string()), "[Server] Welcome!");
}

#[test]
fn test_length_matches_sum_of_runs() {
    // "[" 3, bold "Server" (6+6+6+6+6+6)=36, "] " 3+3, "Welcome!" 5+5+1+5+5+5+5+1
    let text = Text::of("[")
        .append(Text::of("Server").color(&[ChatColor::Bold]))
        .append(Text::of("] "))
        .append(Text::of("Welcome!"));
    assert_eq!(text.rendered_length(), 3 + 36 + 6 + 32);
}

#[test]
fn test_json_with_events() {
    let text = Text::of("[Vote]")
        .color(&[ChatColor::Green, ChatColor::Underline])
        .with_click_event(ClickEvent::RunCommand("/vote".into()))
        .with_hover_event(HoverEvent::ShowItem("{id:\"minecraft:diamond\"}".into()));
    let value = to_value(&text).unwrap();
    assert_eq!(value["color"], "green");
    assert_eq!(value["underlined"], true);
    assert_eq!(value["clickEvent"]["action"], "run_command");
    assert_eq!(value["hoverEvent"]["action"], "show_item");
    assert!(value.get("bold").is_none());

    let json = to_json(&text).unwrap();
    assert!(json.starts_with("{\"text\":\"[Vote]\""));
}

#[test]
fn test_send_to_many() {
    let alice = Inbox::default();
    let bob = Inbox::default();
    let message = Text::of("hi").append(Text::of(" all"));

    message.send_all([&alice, &bob]).unwrap();

    for inbox in [&alice, &bob] {
        let messages = inbox.messages.lock();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], message.runs());
    }
}

#[test]
fn test_writer_recipient_formats() {
    let message = Text::of("Hi").color(&[ChatColor::Red]);

    let legacy = WriterRecipient::new(Vec::new(), OutputFormat::Legacy);
    message.send(&legacy).unwrap();
    assert_eq!(String::from_utf8(legacy.into_inner()).unwrap(), "§cHi\n");

    let plain = WriterRecipient::new(Vec::new(), OutputFormat::Plain);
    message.send(&plain).unwrap();
    assert_eq!(String::from_utf8(plain.into_inner()).unwrap(), "Hi\n");
}

#[test]
fn test_hover_text_nested_json() {
    let tooltip = Text::of("line one").append(Text::of(" two").color(&[ChatColor::Gray]));
    let text = Text::of("?").with_hover_event(HoverEvent::show_text(tooltip));
    let value = to_value(&text).unwrap();
    assert_eq!(value["hoverEvent"]["value"]["extra"][1]["color"], "gray");
}
