// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! Controllers in this crate never call a browser API. A *backend* crate
//! provides the following pieces:
//!
//! - **Element handles**: Implements [`Element`] for the host's node type
//!   (e.g. `web_sys::Element`). Handles are cheap clones of a shared node;
//!   equality is node identity.
//!
//! - **Document queries**: Implements [`Document`] so that the `discover`
//!   constructors (`LanguageParts::discover`, `SliderParts::discover`, ...)
//!   can collect the elements each controller governs.
//!
//! - **Ticker**: Implements [`Ticker`] on top of a repeating host timer
//!   (e.g. `setInterval`). The tick callback is bound by the backend, which
//!   points it at the slider that owns the ticker.
//!
//! - **Event wiring**: Registers listeners and forwards them to controller
//!   methods. Backend-specific; there is no trait for it.
//!
//! # Crate boundaries
//!
//! `brochure_core` owns the state, invariants, and this contract module.
//! Backend crates depend on `brochure_core` and provide platform glue.

use alloc::string::String;
use alloc::vec::Vec;

/// How a scroll should move the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animated motion.
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// Which edge of the target aligns with the viewport after scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollAlign {
    /// Target top edge at the viewport top edge.
    Start,
    /// Target centred vertically.
    Center,
    /// Target bottom edge at the viewport bottom edge.
    End,
    /// Whichever edge requires the least movement.
    Nearest,
}

/// Options passed to [`Element::scroll_into_view`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollOptions {
    /// Animation behaviour.
    pub behavior: ScrollBehavior,
    /// Vertical alignment.
    pub block: ScrollAlign,
}

impl ScrollOptions {
    /// Animated scroll aligning the target's top edge with the viewport top.
    pub const SMOOTH_START: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollAlign::Start,
    };
}

/// A handle to a node in the host document.
///
/// Methods take `&self`: the document is a shared mutable resource and the
/// handle is only a reference to it. Host failures on writes (e.g. an
/// invalid class token) are ignored, matching how the document itself
/// degrades.
pub trait Element: Clone + PartialEq {
    /// Adds `class` to the element's class list.
    fn add_class(&self, class: &str);

    /// Removes `class` from the element's class list.
    fn remove_class(&self, class: &str);

    /// Returns `true` if the element's class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Returns the value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Sets attribute `name` to `value`.
    fn set_attribute(&self, name: &str, value: &str);

    /// Replaces the element's text content.
    fn set_text(&self, text: &str);

    /// Scrolls the viewport so that the element is visible.
    fn scroll_into_view(&self, options: ScrollOptions);
}

/// Structural queries against the host document.
pub trait Document {
    /// The element handle type produced by this document.
    type Element: Element;

    /// Looks up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Returns the first element matching a CSS selector.
    ///
    /// Invalid selectors behave like selectors that match nothing.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Returns every element matching a CSS selector, in document order.
    ///
    /// Invalid selectors behave like selectors that match nothing.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Returns the document element (`<html>`).
    fn root(&self) -> Option<Self::Element>;

    /// Returns the `<body>` element.
    fn body(&self) -> Option<Self::Element>;
}

/// A repeating timer owned by a controller.
///
/// At most one underlying host timer exists per `Ticker`:
/// [`start`](Self::start) is a no-op while running and
/// [`stop`](Self::stop) is a no-op while stopped.
pub trait Ticker {
    /// Starts the timer. If already running, this is a no-op.
    fn start(&self);

    /// Stops the timer. If not running, this is a no-op.
    fn stop(&self);

    /// Returns `true` if the timer is currently running.
    fn is_running(&self) -> bool;
}
