// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] writes a recording from a
//! [`RecorderSink`](super::recorder::RecorderSink) as a JSON array, one
//! object per event:
//!
//! ```json
//! { "seq": 0, "event": "Slide", "message": "slide 0 -> 1 of 4",
//!   "args": { "from": 0, "to": 1, "total": 4 } }
//! ```

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Converts one recorded event into its JSON object.
#[must_use]
pub fn event_to_value(seq: usize, event: &RecordedEvent) -> Value {
    let args = match event {
        RecordedEvent::Setup(e) => json!({
            "controller": e.controller.name(),
        }),
        RecordedEvent::SetupSkipped(e) => json!({
            "controller": e.controller.name(),
            "error": e.error.to_string(),
        }),
        RecordedEvent::Language(e) => json!({
            "language": e.language.code(),
            "locale": e.language.locale(),
            "updated": e.updated,
        }),
        RecordedEvent::Slide(e) => json!({
            "from": e.from,
            "to": e.to,
            "total": e.total,
        }),
        RecordedEvent::Autoplay(e) => json!({
            "running": e.running,
        }),
        RecordedEvent::Anchor(e) => json!({
            "fragment": e.fragment,
            "found": e.found,
        }),
        RecordedEvent::Reveal(e) => json!({
            "index": e.index,
        }),
        RecordedEvent::Layout(e) => json!({
            "mode": format!("{:?}", e.mode),
            "width": e.width,
        }),
    };
    json!({
        "seq": seq,
        "event": event.name(),
        "message": event.to_string(),
        "warning": event.is_warning(),
        "args": args,
    })
}

/// Converts a recording into a JSON array.
#[must_use]
pub fn to_value(events: &[RecordedEvent]) -> Value {
    Value::Array(
        events
            .iter()
            .enumerate()
            .map(|(seq, event)| event_to_value(seq, event))
            .collect(),
    )
}

/// Exports recorded events as pretty-printed JSON.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &to_value(events))?;
    Ok(())
}

/// Exports recorded events as a compact JSON string.
#[must_use]
pub fn to_string(events: &[RecordedEvent]) -> String {
    to_value(events).to_string()
}
