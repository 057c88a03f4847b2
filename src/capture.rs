//! Diagnostic event capture
//!
//! A `tracing-subscriber` layer that routes every tracing event through the
//! shared logger, tagged with source "System". Events are dropped until the
//! shared instance exists. Nothing maps to Fatal; captured diagnostics never
//! terminate the process.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::global;
use crate::severity::Severity;

/// Source tag applied to captured diagnostics
const SYSTEM_SOURCE: &str = "System";

/// Layer forwarding tracing events into the shared logger
///
/// Register it against a subscriber registry:
///
/// ```ignore
/// use tracing_subscriber::prelude::*;
///
/// tracing_subscriber::registry()
///     .with(daylog::capture::SystemCaptureLayer)
///     .init();
/// ```
#[derive(Debug, Default)]
pub struct SystemCaptureLayer;

impl<S: Subscriber> Layer<S> for SystemCaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(logger) = global::try_instance() else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        logger.log(
            map_level(*event.metadata().level()),
            SYSTEM_SOURCE,
            &visitor.message,
        );
    }
}

/// Map the five tracing levels onto the six-level scale
fn map_level(level: Level) -> Severity {
    match level {
        Level::TRACE => Severity::Trace,
        Level::DEBUG => Severity::Debug,
        Level::INFO => Severity::Info,
        Level::WARN => Severity::Warn,
        Level::ERROR => Severity::Error,
    }
}

/// Extracts the `message` field of an event
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}
