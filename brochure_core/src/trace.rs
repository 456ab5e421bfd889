// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page controllers.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! controllers call as they change state. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional shared sink. Controllers each hold a clone;
//! with no sink installed every method is a single branch.
//!
//! Every event type implements [`Display`](core::fmt::Display) with a short
//! one-line rendering, which console and pretty-print sinks reuse.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::bootstrap::Controller;
use crate::error::SetupError;
use crate::language::Language;
use crate::layout::LayoutMode;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a controller finished its setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupEvent {
    /// Which controller.
    pub controller: Controller,
}

/// Emitted once when a controller's setup failed and it was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupSkippedEvent {
    /// Which controller.
    pub controller: Controller,
    /// Why setup failed.
    pub error: SetupError,
}

/// Emitted after the active language changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageEvent {
    /// The newly active language.
    pub language: Language,
    /// How many translatable elements had their text rewritten.
    pub updated: usize,
}

/// Emitted after the active slide changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideEvent {
    /// Previously active index.
    pub from: usize,
    /// Newly active index.
    pub to: usize,
    /// Number of slides.
    pub total: usize,
}

/// Emitted when autoplay starts or stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayEvent {
    /// Whether autoplay is now running.
    pub running: bool,
}

/// Emitted when an in-page anchor was activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorEvent {
    /// The fragment identifier (without `#`).
    pub fragment: String,
    /// Whether an element with that id existed and was scrolled to.
    pub found: bool,
}

/// Emitted when an element was revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    /// Position of the element in the observation set.
    pub index: usize,
}

/// Emitted when the layout mode changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEvent {
    /// The new mode.
    pub mode: LayoutMode,
    /// Viewport width that triggered the change.
    pub width: f64,
}

impl fmt::Display for SetupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ready", self.controller)
    }
}

impl fmt::Display for SetupSkippedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} skipped: {}", self.controller, self.error)
    }
}

impl fmt::Display for LanguageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "language {} ({} elements)",
            self.language.code(),
            self.updated
        )
    }
}

impl fmt::Display for SlideEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide {} -> {} of {}", self.from, self.to, self.total)
    }
}

impl fmt::Display for AutoplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.running {
            "autoplay started"
        } else {
            "autoplay stopped"
        })
    }
}

impl fmt::Display for AnchorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "scroll to #{}", self.fragment)
        } else {
            write!(f, "no target for #{}", self.fragment)
        }
    }
}

impl fmt::Display for RevealEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reveal #{}", self.index)
    }
}

impl fmt::Display for LayoutEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout {:?} at {}px", self.mode, self.width)
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from page controllers.
///
/// Sinks are shared between controllers, so methods take `&self`; recording
/// sinks use interior mutability.
pub trait TraceSink {
    /// Called when a controller finished setup.
    fn on_setup(&self, e: &SetupEvent) {
        _ = e;
    }

    /// Called when a controller was skipped.
    fn on_setup_skipped(&self, e: &SetupSkippedEvent) {
        _ = e;
    }

    /// Called after a language switch.
    fn on_language(&self, e: &LanguageEvent) {
        _ = e;
    }

    /// Called after a slide change.
    fn on_slide(&self, e: &SlideEvent) {
        _ = e;
    }

    /// Called when autoplay starts or stops.
    fn on_autoplay(&self, e: &AutoplayEvent) {
        _ = e;
    }

    /// Called when an in-page anchor was activated.
    fn on_anchor(&self, e: &AnchorEvent) {
        _ = e;
    }

    /// Called when an element was revealed.
    fn on_reveal(&self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when the layout mode changed.
    fn on_layout(&self, e: &LayoutEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Cheap, cloneable handle to an optional shared [`TraceSink`].
#[derive(Clone, Default)]
pub struct Tracer {
    sink: Option<Rc<dyn TraceSink>>,
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.sink.is_some())
            .finish()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[must_use]
    pub fn new(sink: Rc<dyn TraceSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Creates a tracer that discards all events.
    #[must_use]
    pub fn none() -> Self {
        Self { sink: None }
    }

    /// Returns `true` if a sink is installed.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Emits a [`SetupEvent`].
    #[inline]
    pub fn setup(&self, controller: Controller) {
        if let Some(s) = &self.sink {
            s.on_setup(&SetupEvent { controller });
        }
    }

    /// Emits a [`SetupSkippedEvent`].
    #[inline]
    pub fn setup_skipped(&self, controller: Controller, error: SetupError) {
        if let Some(s) = &self.sink {
            s.on_setup_skipped(&SetupSkippedEvent { controller, error });
        }
    }

    /// Emits a [`LanguageEvent`].
    #[inline]
    pub fn language(&self, language: Language, updated: usize) {
        if let Some(s) = &self.sink {
            s.on_language(&LanguageEvent { language, updated });
        }
    }

    /// Emits a [`SlideEvent`].
    #[inline]
    pub fn slide(&self, from: usize, to: usize, total: usize) {
        if let Some(s) = &self.sink {
            s.on_slide(&SlideEvent { from, to, total });
        }
    }

    /// Emits an [`AutoplayEvent`].
    #[inline]
    pub fn autoplay(&self, running: bool) {
        if let Some(s) = &self.sink {
            s.on_autoplay(&AutoplayEvent { running });
        }
    }

    /// Emits an [`AnchorEvent`].
    #[inline]
    pub fn anchor(&self, fragment: &str, found: bool) {
        if let Some(s) = &self.sink {
            s.on_anchor(&AnchorEvent {
                fragment: fragment.into(),
                found,
            });
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&self, index: usize) {
        if let Some(s) = &self.sink {
            s.on_reveal(&RevealEvent { index });
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&self, mode: LayoutMode, width: f64) {
        if let Some(s) = &self.sink {
            s.on_layout(&LayoutEvent { mode, width });
        }
    }
}
