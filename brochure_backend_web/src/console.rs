// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace sink.

use alloc::format;
use core::fmt::Display;

use brochure_core::trace::{
    AnchorEvent, AutoplayEvent, LanguageEvent, LayoutEvent, RevealEvent, SetupEvent,
    SetupSkippedEvent, SlideEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`TraceSink`] that writes one console line per event.
///
/// Skipped controllers go to `console.warn`; everything else to
/// `console.log` (or `console.debug` when `verbose` is off, so default
/// devtools filters hide routine events).
#[derive(Clone, Copy, Debug)]
pub struct ConsoleSink {
    prefix: &'static str,
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink prefixing each line with `[prefix]`.
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            verbose: false,
        }
    }

    /// Logs routine events at `log` level instead of `debug`.
    #[must_use]
    pub const fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    fn line(&self, event: &dyn Display) -> JsValue {
        JsValue::from_str(&format!("[{}] {event}", self.prefix))
    }

    fn routine(&self, event: &dyn Display) {
        let line = self.line(event);
        if self.verbose {
            console::log_1(&line);
        } else {
            console::debug_1(&line);
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new("brochure")
    }
}

impl TraceSink for ConsoleSink {
    fn on_setup(&self, e: &SetupEvent) {
        self.routine(e);
    }

    fn on_setup_skipped(&self, e: &SetupSkippedEvent) {
        console::warn_1(&self.line(e));
    }

    fn on_language(&self, e: &LanguageEvent) {
        self.routine(e);
    }

    fn on_slide(&self, e: &SlideEvent) {
        self.routine(e);
    }

    fn on_autoplay(&self, e: &AutoplayEvent) {
        self.routine(e);
    }

    fn on_anchor(&self, e: &AnchorEvent) {
        self.routine(e);
    }

    fn on_reveal(&self, e: &RevealEvent) {
        self.routine(e);
    }

    fn on_layout(&self, e: &LayoutEvent) {
        self.routine(e);
    }
}
