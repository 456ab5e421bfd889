// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for brochure.
//!
//! This crate implements the [`brochure_core::backend`] contract with
//! browser APIs and mounts the page controllers:
//!
//! - [`DomElement`] / [`DomDocument`]: `web_sys` element handles and queries
//! - [`IntervalTimer`]: `setInterval` ticker for slider autoplay
//! - [`EventListener`]: listener registration that unregisters on drop, and
//!   [`ListenerBatch`] for registering several at once
//! - [`RevealObserver`]: `IntersectionObserver` wiring, with a scroll-polling
//!   fallback
//! - [`ConsoleSink`]: trace events to the browser console
//! - [`Page`]: bootstrap wiring every controller to the live document

#![no_std]

extern crate alloc;

mod console;
mod element;
mod interval;
mod listener;
mod observer;
mod page;

pub use brochure_core::backend::{Document, Element, Ticker};
pub use console::ConsoleSink;
pub use element::{DomDocument, DomElement};
pub use interval::{IntervalTimer, set_timeout};
pub use listener::{EventListener, ListenerBatch};
pub use observer::RevealObserver;
pub use page::{Page, PageHandle, WebSlider};

use alloc::format;
use alloc::string::String;

use brochure_core::error::SetupError;
use kurbo::Rect;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Returns the viewport width in CSS pixels, or `None` if unavailable.
#[must_use]
pub fn viewport_width(window: &Window) -> Option<f64> {
    window.inner_width().ok()?.as_f64()
}

/// Returns the viewport as a rectangle in client coordinates.
#[must_use]
pub fn viewport_rect(window: &Window) -> Option<Rect> {
    let width = viewport_width(window)?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

/// Renders a thrown JS value for diagnostics.
#[must_use]
pub fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Maps a thrown JS value into a [`SetupError`].
#[must_use]
pub fn setup_error(err: JsValue) -> SetupError {
    SetupError::Backend(describe_js_error(&err))
}
