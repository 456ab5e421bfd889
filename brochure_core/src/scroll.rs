// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth in-page navigation.
//!
//! The backend always suppresses the browser's default anchor navigation;
//! [`SmoothScroll::follow`] then resolves the fragment and scrolls the
//! target into view, or does nothing if there is no such target.

use alloc::vec::Vec;

use crate::backend::{Document, Element, ScrollOptions};
use crate::config::PageConfig;
use crate::trace::Tracer;

/// Extracts the fragment identifier from an in-page `href`.
///
/// Returns `None` unless `href` starts with `#` and names a non-empty id.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Intercepts in-page anchors and scrolls to their targets.
#[derive(Debug)]
pub struct SmoothScroll<E> {
    anchors: Vec<E>,
    options: ScrollOptions,
    tracer: Tracer,
}

impl<E: Element> SmoothScroll<E> {
    /// Collects every anchor with an in-page fragment target.
    pub fn discover<D>(doc: &D, config: &PageConfig, tracer: Tracer) -> Self
    where
        D: Document<Element = E>,
    {
        Self::new(doc.query_all(config.selectors.anchors), tracer)
    }

    /// Creates a controller for the given anchors.
    #[must_use]
    pub fn new(anchors: Vec<E>, tracer: Tracer) -> Self {
        Self {
            anchors,
            options: ScrollOptions::SMOOTH_START,
            tracer,
        }
    }

    /// Anchors to bind click interceptors to.
    #[must_use]
    pub fn anchors(&self) -> &[E] {
        &self.anchors
    }

    /// Handles a click on `anchor`.
    ///
    /// The `href` is read at click time. Returns the element scrolled to, if
    /// any.
    pub fn follow<D>(&self, doc: &D, anchor: &E) -> Option<E>
    where
        D: Document<Element = E>,
    {
        let href = anchor.attribute("href")?;
        let id = fragment_id(&href)?;
        let target = doc.element_by_id(id);
        if let Some(target) = &target {
            target.scroll_into_view(self.options);
        }
        self.tracer.anchor(id, target.is_some());
        target
    }
}
