// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadcasting to several sinks.

use std::fmt;
use std::rc::Rc;

use brochure_core::trace::{
    AnchorEvent, AutoplayEvent, LanguageEvent, LayoutEvent, RevealEvent, SetupEvent,
    SetupSkippedEvent, SlideEvent, TraceSink,
};

/// A [`TraceSink`] forwarding every event to each of its sinks, in the
/// order they were added.
#[derive(Clone, Default)]
pub struct FanOut {
    sinks: Vec<Rc<dyn TraceSink>>,
}

impl fmt::Debug for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanOut")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl FanOut {
    /// Creates a fan-out with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink, builder style.
    #[must_use]
    pub fn with(mut self, sink: Rc<dyn TraceSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Adds a sink.
    pub fn push(&mut self, sink: Rc<dyn TraceSink>) {
        self.sinks.push(sink);
    }

    /// Number of sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Returns `true` if there are no sinks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl TraceSink for FanOut {
    fn on_setup(&self, e: &SetupEvent) {
        self.sinks.iter().for_each(|s| s.on_setup(e));
    }

    fn on_setup_skipped(&self, e: &SetupSkippedEvent) {
        self.sinks.iter().for_each(|s| s.on_setup_skipped(e));
    }

    fn on_language(&self, e: &LanguageEvent) {
        self.sinks.iter().for_each(|s| s.on_language(e));
    }

    fn on_slide(&self, e: &SlideEvent) {
        self.sinks.iter().for_each(|s| s.on_slide(e));
    }

    fn on_autoplay(&self, e: &AutoplayEvent) {
        self.sinks.iter().for_each(|s| s.on_autoplay(e));
    }

    fn on_anchor(&self, e: &AnchorEvent) {
        self.sinks.iter().for_each(|s| s.on_anchor(e));
    }

    fn on_reveal(&self, e: &RevealEvent) {
        self.sinks.iter().for_each(|s| s.on_reveal(e));
    }

    fn on_layout(&self, e: &LayoutEvent) {
        self.sinks.iter().for_each(|s| s.on_layout(e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use brochure_core::trace::{NoopSink, Tracer};

    use crate::pretty::PrettyPrintSink;
    use crate::recorder::RecorderSink;

    #[test]
    fn every_sink_sees_every_event() {
        let first = Rc::new(RecorderSink::new());
        let second = Rc::new(RecorderSink::new());
        let fan = FanOut::new().with(first.clone()).with(second.clone());
        let tracer = Tracer::new(Rc::new(fan));

        tracer.autoplay(true);
        tracer.reveal(2);

        assert_eq!(first.events(), second.events());
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn mixes_sink_kinds() {
        let rec = Rc::new(RecorderSink::new());
        let pretty = Rc::new(PrettyPrintSink::to_string_buffer());
        let mut fan = FanOut::new();
        fan.push(Rc::new(NoopSink));
        fan.push(rec.clone());
        fan.push(pretty.clone());
        assert_eq!(fan.len(), 3);

        let tracer = Tracer::new(Rc::new(fan));
        tracer.anchor("how", true);

        assert_eq!(rec.len(), 1);
        assert_eq!(pretty.contents(), "   0 scroll to #how\n");
    }

    #[test]
    fn empty_fan_out_is_a_sink() {
        let fan = FanOut::new();
        assert!(fan.is_empty());
        Tracer::new(Rc::new(fan)).slide(0, 1, 2);
    }
}
