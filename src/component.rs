//! Chat-component JSON, the form the server sends to clients.
//!
//! A single run serializes as one component object. A sequence serializes as
//! an empty root component holding the runs in `extra`, so the client applies
//! no inherited style between them.

use serde::Serialize;
use serde_json::Value;

use crate::text::{ClickEvent, HoverEvent, Run, Text};

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Serialize)]
struct ComponentJson<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    #[serde(skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    obfuscated: bool,
    #[serde(rename = "clickEvent", skip_serializing_if = "Option::is_none")]
    click_event: Option<EventJson<'a>>,
    #[serde(rename = "hoverEvent", skip_serializing_if = "Option::is_none")]
    hover_event: Option<EventJson<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra: Vec<ComponentJson<'a>>,
}

#[derive(Serialize)]
struct EventJson<'a> {
    action: &'static str,
    value: EventValue<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EventValue<'a> {
    Str(&'a str),
    Component(Box<ComponentJson<'a>>),
}

impl<'a> ComponentJson<'a> {
    fn root(extra: Vec<ComponentJson<'a>>) -> Self {
        Self {
            text: "",
            color: None,
            bold: false,
            italic: false,
            underlined: false,
            strikethrough: false,
            obfuscated: false,
            click_event: None,
            hover_event: None,
            extra,
        }
    }

    fn from_run(run: &'a Run) -> Self {
        Self {
            text: &run.text,
            color: run.color.map(|c| c.name()),
            bold: run.bold,
            italic: run.italic,
            underlined: run.underlined,
            strikethrough: run.strikethrough,
            obfuscated: run.obfuscated,
            click_event: run.click_event.as_ref().map(click_json),
            hover_event: run.hover_event.as_ref().map(hover_json),
            extra: Vec::new(),
        }
    }
}

fn click_json(event: &ClickEvent) -> EventJson<'_> {
    EventJson {
        action: event.action(),
        value: EventValue::Str(event.value()),
    }
}

fn hover_json(event: &HoverEvent) -> EventJson<'_> {
    let value = match event {
        HoverEvent::ShowText(text) => EventValue::Component(Box::new(component(text))),
        HoverEvent::ShowItem(snbt) | HoverEvent::ShowEntity(snbt) => EventValue::Str(snbt),
    };
    EventJson {
        action: event.action(),
        value,
    }
}

fn component(text: &Text) -> ComponentJson<'_> {
    match text {
        Text::Run(run) => ComponentJson::from_run(run),
        Text::Sequence(runs) => {
            ComponentJson::root(runs.iter().map(ComponentJson::from_run).collect())
        }
    }
}

/// The message as a JSON value.
pub fn to_value(text: &Text) -> serde_json::Result<Value> {
    serde_json::to_value(component(text))
}

/// The message as compact JSON text, keys in wire order.
pub fn to_json(text: &Text) -> serde_json::Result<String> {
    serde_json::to_string(&component(text))
}
