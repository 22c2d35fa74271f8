//! Tracing layer forwarding pad log events to a UI host.
//!
//! Store failures are only logged, never surfaced as errors. This layer lets
//! a host show them anyway by streaming events over a tokio channel.

use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// A log event as seen by the UI.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PadLogEvent {
    /// Event target (e.g., "securepad_application::autosave")
    pub target: String,
    /// Log level (INFO, DEBUG, WARN, ERROR)
    pub level: String,
    /// Bracketed tag at the start of the message (`AutoSave` for
    /// "[AutoSave] Failed to save ...")
    pub component: Option<String>,
    /// Message with the component tag removed
    pub message: String,
    /// Structured fields from the event
    pub fields: HashMap<String, Value>,
    pub timestamp: String,
}

/// Layer sending events at or above a minimum level to a channel.
pub struct PadEventLayer {
    sender: mpsc::UnboundedSender<PadLogEvent>,
    min_level: Level,
}

impl PadEventLayer {
    /// Forwards WARN and ERROR events.
    pub fn new(sender: mpsc::UnboundedSender<PadLogEvent>) -> Self {
        Self {
            sender,
            min_level: Level::WARN,
        }
    }

    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }
}

impl<S> Layer<S> for PadEventLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // Levels order by verbosity: ERROR < WARN < INFO.
        if *metadata.level() > self.min_level {
            return;
        }

        let mut fields = HashMap::new();
        let mut visitor = FieldVisitor(&mut fields);
        event.record(&mut visitor);

        let raw = fields
            .remove("message")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        let (component, message) = split_component(&raw);

        let pad_event = PadLogEvent {
            target: metadata.target().to_string(),
            level: metadata.level().to_string(),
            component,
            message,
            fields,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        // Receiver gone means nobody is listening; drop the event.
        let _ = self.sender.send(pad_event);
    }
}

fn split_component(message: &str) -> (Option<String>, String) {
    if let Some(rest) = message.strip_prefix('[') {
        if let Some((tag, tail)) = rest.split_once(']') {
            if !tag.is_empty() && !tag.contains(char::is_whitespace) {
                return (Some(tag.to_string()), tail.trim_start().to_string());
            }
        }
    }
    (None, message.to_string())
}

/// Field visitor that extracts tracing event fields into a HashMap
struct FieldVisitor<'a>(&'a mut HashMap<String, Value>);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.0
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}
