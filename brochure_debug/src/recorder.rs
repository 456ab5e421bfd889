// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps a copy of every event
//! it receives, in arrival order. Install it behind a
//! [`Tracer`](brochure_core::trace::Tracer), keep a second `Rc` to it, and
//! read the recording back with [`RecorderSink::events`].

use std::cell::RefCell;
use std::fmt;

use brochure_core::trace::{
    AnchorEvent, AutoplayEvent, LanguageEvent, LayoutEvent, RevealEvent, SetupEvent,
    SetupSkippedEvent, SlideEvent, TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`SetupEvent`].
    Setup(SetupEvent),
    /// A [`SetupSkippedEvent`].
    SetupSkipped(SetupSkippedEvent),
    /// A [`LanguageEvent`].
    Language(LanguageEvent),
    /// A [`SlideEvent`].
    Slide(SlideEvent),
    /// An [`AutoplayEvent`].
    Autoplay(AutoplayEvent),
    /// An [`AnchorEvent`].
    Anchor(AnchorEvent),
    /// A [`RevealEvent`].
    Reveal(RevealEvent),
    /// A [`LayoutEvent`].
    Layout(LayoutEvent),
}

impl RecordedEvent {
    /// Short event name, used as the `event` field of JSON exports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setup(_) => "Setup",
            Self::SetupSkipped(_) => "SetupSkipped",
            Self::Language(_) => "Language",
            Self::Slide(_) => "Slide",
            Self::Autoplay(_) => "Autoplay",
            Self::Anchor(_) => "Anchor",
            Self::Reveal(_) => "Reveal",
            Self::Layout(_) => "Layout",
        }
    }

    /// Returns `true` for events reporting a problem.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::SetupSkipped(_) | Self::Anchor(AnchorEvent { found: false, .. })
        )
    }
}

impl fmt::Display for RecordedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(e) => fmt::Display::fmt(e, f),
            Self::SetupSkipped(e) => fmt::Display::fmt(e, f),
            Self::Language(e) => fmt::Display::fmt(e, f),
            Self::Slide(e) => fmt::Display::fmt(e, f),
            Self::Autoplay(e) => fmt::Display::fmt(e, f),
            Self::Anchor(e) => fmt::Display::fmt(e, f),
            Self::Reveal(e) => fmt::Display::fmt(e, f),
            Self::Layout(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: RefCell<Vec<RecordedEvent>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Returns a copy of the recording.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns the recording.
    pub fn take(&self) -> Vec<RecordedEvent> {
        self.events.take()
    }

    /// Consumes the recorder and returns the recording.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events.into_inner()
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_setup(&self, e: &SetupEvent) {
        self.push(RecordedEvent::Setup(*e));
    }

    fn on_setup_skipped(&self, e: &SetupSkippedEvent) {
        self.push(RecordedEvent::SetupSkipped(e.clone()));
    }

    fn on_language(&self, e: &LanguageEvent) {
        self.push(RecordedEvent::Language(*e));
    }

    fn on_slide(&self, e: &SlideEvent) {
        self.push(RecordedEvent::Slide(*e));
    }

    fn on_autoplay(&self, e: &AutoplayEvent) {
        self.push(RecordedEvent::Autoplay(*e));
    }

    fn on_anchor(&self, e: &AnchorEvent) {
        self.push(RecordedEvent::Anchor(e.clone()));
    }

    fn on_reveal(&self, e: &RevealEvent) {
        self.push(RecordedEvent::Reveal(*e));
    }

    fn on_layout(&self, e: &LayoutEvent) {
        self.push(RecordedEvent::Layout(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use brochure_core::bootstrap::Controller;
    use brochure_core::error::SetupError;
    use brochure_core::language::Language;
    use brochure_core::trace::Tracer;

    #[test]
    fn records_in_arrival_order() {
        let rec = Rc::new(RecorderSink::new());
        let tracer = Tracer::new(rec.clone());

        tracer.setup(Controller::LanguageSwitcher);
        tracer.language(Language::En, 3);
        tracer.slide(3, 0, 4);
        tracer.autoplay(false);

        let events = rec.events();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            RecordedEvent::Setup(SetupEvent {
                controller: Controller::LanguageSwitcher
            })
        );
        assert_eq!(
            events[1],
            RecordedEvent::Language(LanguageEvent {
                language: Language::En,
                updated: 3
            })
        );
        assert_eq!(
            events[2],
            RecordedEvent::Slide(SlideEvent {
                from: 3,
                to: 0,
                total: 4
            })
        );
        assert_eq!(
            events[3],
            RecordedEvent::Autoplay(AutoplayEvent { running: false })
        );
    }

    #[test]
    fn take_drains_the_recording() {
        let rec = Rc::new(RecorderSink::new());
        let tracer = Tracer::new(rec.clone());
        tracer.reveal(0);
        tracer.reveal(1);

        assert_eq!(rec.take().len(), 2);
        assert!(rec.is_empty());

        tracer.reveal(2);
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn skipped_setup_and_missing_anchor_are_warnings() {
        let rec = RecorderSink::new();
        rec.on_setup_skipped(&SetupSkippedEvent {
            controller: Controller::FeatureSlider,
            error: SetupError::NoSlides,
        });
        rec.on_anchor(&AnchorEvent {
            fragment: "missing".into(),
            found: false,
        });
        rec.on_anchor(&AnchorEvent {
            fragment: "features".into(),
            found: true,
        });

        let warnings: Vec<_> = rec
            .into_events()
            .iter()
            .map(RecordedEvent::is_warning)
            .collect();
        assert_eq!(warnings, [true, true, false]);
    }

    #[test]
    fn display_matches_the_event() {
        let event = RecordedEvent::Anchor(AnchorEvent {
            fragment: "how".into(),
            found: true,
        });
        assert_eq!(event.to_string(), "scroll to #how");
        assert_eq!(event.name(), "Anchor");
    }
}
