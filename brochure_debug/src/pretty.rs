// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable one-line-per-event output.

use std::cell::{Cell, RefCell};
use std::fmt::{self, Display, Write};

use brochure_core::trace::{
    AnchorEvent, AutoplayEvent, LanguageEvent, LayoutEvent, RevealEvent, SetupEvent,
    SetupSkippedEvent, SlideEvent, TraceSink,
};

/// A [`TraceSink`] that writes each event as a numbered line.
///
/// ```text
///    0 language switcher ready
///    1 feature slider skipped: slider has no slides
///    2 layout Wide at 1024px
/// ```
///
/// Warnings (skipped controllers, anchors without a target) are prefixed
/// with `!`. Write errors are ignored.
#[derive(Debug)]
pub struct PrettyPrintSink<W: Write> {
    writer: RefCell<W>,
    seq: Cell<u64>,
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
            seq: Cell::new(0),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Runs `f` with the writer borrowed.
    pub fn with_writer<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.writer.borrow())
    }

    fn line(&self, warning: bool, event: &dyn Display) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        let marker = if warning { '!' } else { ' ' };
        let _ = writeln!(self.writer.borrow_mut(), "{seq:>4}{marker}{event}");
    }
}

impl PrettyPrintSink<String> {
    /// Creates a sink collecting into a `String`.
    #[must_use]
    pub fn to_string_buffer() -> Self {
        Self::new(String::new())
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.writer.borrow().clone()
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_setup(&self, e: &SetupEvent) {
        self.line(false, e);
    }

    fn on_setup_skipped(&self, e: &SetupSkippedEvent) {
        self.line(true, e);
    }

    fn on_language(&self, e: &LanguageEvent) {
        self.line(false, e);
    }

    fn on_slide(&self, e: &SlideEvent) {
        self.line(false, e);
    }

    fn on_autoplay(&self, e: &AutoplayEvent) {
        self.line(false, e);
    }

    fn on_anchor(&self, e: &AnchorEvent) {
        self.line(!e.found, e);
    }

    fn on_reveal(&self, e: &RevealEvent) {
        self.line(false, e);
    }

    fn on_layout(&self, e: &LayoutEvent) {
        self.line(false, e);
    }
}

/// Formats a recorded event the way [`PrettyPrintSink`] would.
pub fn format_line(
    out: &mut dyn Write,
    seq: u64,
    event: &crate::recorder::RecordedEvent,
) -> fmt::Result {
    let marker = if event.is_warning() { '!' } else { ' ' };
    writeln!(out, "{seq:>4}{marker}{event}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use brochure_core::bootstrap::Controller;
    use brochure_core::error::SetupError;
    use brochure_core::language::Language;
    use brochure_core::layout::LayoutMode;
    use brochure_core::trace::Tracer;

    use crate::recorder::RecordedEvent;

    #[test]
    fn numbered_lines() {
        let sink = Rc::new(PrettyPrintSink::to_string_buffer());
        let tracer = Tracer::new(sink.clone());

        tracer.setup(Controller::LanguageSwitcher);
        tracer.language(Language::Zh, 2);
        tracer.layout(LayoutMode::Wide, 1024.0);

        assert_eq!(
            sink.contents(),
            "   0 language switcher ready\n   1 language zh (2 elements)\n   2 layout Wide at 1024px\n"
        );
    }

    #[test]
    fn warnings_are_marked() {
        let sink = PrettyPrintSink::to_string_buffer();
        sink.on_setup_skipped(&SetupSkippedEvent {
            controller: Controller::FeatureSlider,
            error: SetupError::NoSlides,
        });
        sink.on_anchor(&AnchorEvent {
            fragment: "nowhere".into(),
            found: false,
        });

        let text = sink.into_inner();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "   0!feature slider skipped: slider has no slides");
        assert_eq!(lines[1], "   1!no target for #nowhere");
    }

    #[test]
    fn format_line_matches_live_output() {
        let event = RecordedEvent::Slide(SlideEvent {
            from: 0,
            to: 1,
            total: 4,
        });
        let live = PrettyPrintSink::to_string_buffer();
        live.on_slide(&SlideEvent {
            from: 0,
            to: 1,
            total: 4,
        });

        let mut out = String::new();
        format_line(&mut out, 0, &event).unwrap();
        assert_eq!(out, live.contents());
    }
}
