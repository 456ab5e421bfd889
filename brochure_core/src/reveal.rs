// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot reveal animations.
//!
//! [`RevealSet`] owns the per-element "already revealed" flag. It does not
//! observe anything itself: an event-driven backend feeds it intersection
//! results through [`RevealSet::handle`], and a polling backend calls
//! [`RevealSet::poll`] with element bounds. Either way an element gains the
//! reveal class exactly once and never loses it.
//!
//! [`RevealPolicy`] describes the qualifying region: the viewport with its
//! bottom edge pulled in by `bottom_inset`, and the minimum fraction of the
//! element's area that must lie inside it.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::backend::Element;
use crate::trace::Tracer;

/// Browsers report intersection ratios rounded to a few digits; a ratio
/// this close below the threshold still counts as crossing it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// When an element counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPolicy {
    /// Minimum visible fraction of the element's area (0.0–1.0).
    pub threshold: f64,
    /// Pixels removed from the bottom of the viewport.
    pub bottom_inset: f64,
}

impl RevealPolicy {
    /// 10% of the element inside the viewport inset 50px from the bottom.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            threshold: 0.1,
            bottom_inset: 50.0,
        }
    }

    /// CSS margin string for an `IntersectionObserver` root.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_inset)
    }

    /// The qualifying region within `viewport`.
    #[must_use]
    pub fn root_region(&self, viewport: Rect) -> Rect {
        let bottom = (viewport.y1 - self.bottom_inset).max(viewport.y0);
        Rect::new(viewport.x0, viewport.y0, viewport.x1, bottom)
    }

    /// Fraction of `bounds` lying inside the qualifying region.
    ///
    /// A zero-area element counts as fully visible when its origin lies
    /// inside the region.
    #[must_use]
    pub fn visible_ratio(&self, bounds: Rect, viewport: Rect) -> f64 {
        let root = self.root_region(viewport);
        let area = bounds.area();
        if area <= 0.0 {
            let origin = Point::new(bounds.x0, bounds.y0);
            let inside = origin.x >= root.x0
                && origin.x <= root.x1
                && origin.y >= root.y0
                && origin.y <= root.y1;
            return if inside { 1.0 } else { 0.0 };
        }
        bounds.intersect(root).area() / area
    }

    /// Whether a browser-reported intersection ratio meets the threshold.
    ///
    /// Reported ratios are rounded, so a ratio within `RATIO_TOLERANCE`
    /// below the threshold counts as crossing it.
    #[must_use]
    pub fn meets(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.threshold
    }

    /// Whether `bounds` qualifies for reveal within `viewport`.
    ///
    /// Geometry is exact here, so no rounding tolerance applies.
    #[must_use]
    pub fn qualifies(&self, bounds: Rect, viewport: Rect) -> bool {
        let ratio = self.visible_ratio(bounds, viewport);
        ratio > 0.0 && ratio >= self.threshold
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of feeding one observation into a [`RevealSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The element was revealed by this observation.
    Revealed,
    /// The element had already been revealed; nothing changed.
    AlreadyRevealed,
    /// The element did not qualify; nothing changed.
    Pending,
    /// The element is not in the set.
    Unknown,
}

#[derive(Clone, Debug)]
struct Entry<E> {
    element: E,
    revealed: bool,
}

/// Elements awaiting their one-time reveal.
#[derive(Debug)]
pub struct RevealSet<E> {
    entries: Vec<Entry<E>>,
    class: &'static str,
    tracer: Tracer,
}

impl<E: Element> RevealSet<E> {
    /// Creates an empty set that marks revealed elements with `class`.
    #[must_use]
    pub fn new(class: &'static str, tracer: Tracer) -> Self {
        Self {
            entries: Vec::new(),
            class,
            tracer,
        }
    }

    /// Adds `element` to the set and returns its index.
    ///
    /// Adding an element twice returns the existing index. An element that
    /// already carries the reveal class starts out revealed.
    pub fn observe(&mut self, element: E) -> usize {
        if let Some(index) = self.position(&element) {
            return index;
        }
        let revealed = element.has_class(self.class);
        self.entries.push(Entry { element, revealed });
        self.entries.len() - 1
    }

    /// Number of observed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of elements revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.revealed).count()
    }

    /// Returns `true` once every observed element has been revealed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|e| e.revealed)
    }

    /// Whether `element` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, element: &E) -> bool {
        self.position(element)
            .is_some_and(|i| self.entries[i].revealed)
    }

    /// Every observed element, revealed or not.
    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|e| &e.element)
    }

    /// Elements not yet revealed.
    pub fn pending(&self) -> impl Iterator<Item = &E> {
        self.entries
            .iter()
            .filter(|e| !e.revealed)
            .map(|e| &e.element)
    }

    /// Records an observation of `target`.
    ///
    /// `qualifies` says whether the target currently meets the reveal
    /// policy. Leaving the viewport never un-reveals.
    pub fn handle(&mut self, target: &E, qualifies: bool) -> RevealOutcome {
        let Some(index) = self.position(target) else {
            return RevealOutcome::Unknown;
        };
        let entry = &mut self.entries[index];
        if entry.revealed {
            return RevealOutcome::AlreadyRevealed;
        }
        if !qualifies {
            return RevealOutcome::Pending;
        }
        entry.revealed = true;
        entry.element.add_class(self.class);
        self.tracer.reveal(index);
        RevealOutcome::Revealed
    }

    /// Checks every pending element against `viewport`, revealing those
    /// that qualify. Returns how many were revealed.
    pub fn poll(
        &mut self,
        policy: &RevealPolicy,
        viewport: Rect,
        mut bounds_of: impl FnMut(&E) -> Rect,
    ) -> usize {
        let mut revealed = 0;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.revealed || !policy.qualifies(bounds_of(&entry.element), viewport) {
                continue;
            }
            entry.revealed = true;
            entry.element.add_class(self.class);
            self.tracer.reveal(index);
            revealed += 1;
        }
        revealed
    }

    fn position(&self, element: &E) -> Option<usize> {
        self.entries.iter().position(|e| e.element == *element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;

    use crate::testing::{FakeElement, RecordingSink};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn root_region_insets_bottom() {
        let policy = RevealPolicy::standard();
        assert_eq!(policy.root_margin(), "0px 0px -50px 0px");
        assert_eq!(
            policy.root_region(VIEWPORT),
            Rect::new(0.0, 0.0, 1000.0, 750.0)
        );
        // A viewport shorter than the inset collapses instead of inverting.
        let tiny = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert_eq!(policy.root_region(tiny).height(), 0.0);
    }

    #[test]
    fn ten_percent_inside_the_inset_region_qualifies() {
        let policy = RevealPolicy::standard();
        // 100px tall element; 10px inside the region (740..750).
        let edge = Rect::new(0.0, 740.0, 100.0, 840.0);
        assert!(policy.qualifies(edge, VIEWPORT), "exactly 10% qualifies");

        // Only 5px inside the region even though 60px are on screen.
        let under = Rect::new(0.0, 745.0, 100.0, 845.0);
        assert!(!policy.qualifies(under, VIEWPORT), "bottom inset excludes it");

        let offscreen = Rect::new(0.0, 900.0, 100.0, 1000.0);
        assert_eq!(policy.visible_ratio(offscreen, VIEWPORT), 0.0);
    }

    #[test]
    fn measured_geometry_gets_no_rounding_slack() {
        let policy = RevealPolicy::standard();
        // 1000px tall with 99.5px inside the region: 9.95% visible.
        let tall = Rect::new(0.0, 650.5, 100.0, 1650.5);
        let ratio = policy.visible_ratio(tall, VIEWPORT);
        assert!((ratio - 0.0995).abs() < 1e-9, "ratio was {ratio}");
        assert!(!policy.qualifies(tall, VIEWPORT), "9.95% is below 10%");
        // The same ratio reported by a browser is treated as rounded.
        assert!(policy.meets(ratio), "reported ratio tolerates rounding");

        let mut set = RevealSet::new("animate-in", Tracer::none());
        let step = FakeElement::new();
        set.observe(step.clone());
        assert_eq!(set.poll(&policy, VIEWPORT, |_| tall), 0);
        assert!(!step.has_class("animate-in"), "polling does not reveal it");
    }

    #[test]
    fn reported_ratios_tolerate_rounding() {
        let policy = RevealPolicy::standard();
        assert!(policy.meets(0.0999), "rounded-down crossing still counts");
        assert!(!policy.meets(0.05), "well below threshold");
        assert!(!policy.meets(0.0), "no intersection never counts");
    }

    #[test]
    fn zero_area_uses_origin() {
        let policy = RevealPolicy::standard();
        let line = Rect::new(10.0, 100.0, 10.0, 100.0);
        assert_eq!(policy.visible_ratio(line, VIEWPORT), 1.0);
        let below = Rect::new(10.0, 790.0, 10.0, 790.0);
        assert_eq!(policy.visible_ratio(below, VIEWPORT), 0.0);
    }

    #[test]
    fn reveal_happens_exactly_once() {
        let sink = Rc::new(RecordingSink::default());
        let mut set = RevealSet::new("animate-in", Tracer::new(sink.clone()));
        let step = FakeElement::new();
        let index = set.observe(step.clone());

        assert_eq!(set.handle(&step, false), RevealOutcome::Pending);
        assert!(!step.has_class("animate-in"), "not yet visible");
        assert_eq!(set.handle(&step, true), RevealOutcome::Revealed);
        assert!(step.has_class("animate-in"), "revealed on first crossing");

        // Leaving and re-entering changes nothing.
        assert_eq!(set.handle(&step, false), RevealOutcome::AlreadyRevealed);
        assert!(step.has_class("animate-in"), "never un-revealed");
        assert_eq!(set.handle(&step, true), RevealOutcome::AlreadyRevealed);

        assert_eq!(index, 0);
        assert_eq!(sink.lines(), ["reveal #0"]);
        assert!(set.is_settled(), "single element revealed");
    }

    #[test]
    fn elements_reveal_independently() {
        let mut set = RevealSet::new("animate-in", Tracer::none());
        let a = FakeElement::new();
        let b = FakeElement::new();
        set.observe(a.clone());
        set.observe(b.clone());
        assert_eq!(set.observe(a.clone()), 0, "re-observing keeps the index");

        set.handle(&b, true);
        assert!(set.is_revealed(&b), "b crossed");
        assert!(!set.is_revealed(&a), "a did not");
        assert_eq!(set.pending().cloned().collect::<Vec<_>>(), [a.clone()]);
        assert_eq!(set.handle(&FakeElement::new(), true), RevealOutcome::Unknown);
    }

    #[test]
    fn polling_reveals_qualifying_elements() {
        let policy = RevealPolicy::standard();
        let mut set = RevealSet::new("animate-in", Tracer::none());
        let near = FakeElement::new();
        let far = FakeElement::new();
        set.observe(near.clone());
        set.observe(far.clone());

        let mut far_top = 2000.0;
        let bounds = |el: &FakeElement, far_top: f64| {
            if *el == near {
                Rect::new(0.0, 100.0, 100.0, 200.0)
            } else {
                Rect::new(0.0, far_top, 100.0, far_top + 100.0)
            }
        };
        assert_eq!(set.poll(&policy, VIEWPORT, |el| bounds(el, far_top)), 1);
        assert_eq!(set.poll(&policy, VIEWPORT, |el| bounds(el, far_top)), 0);

        far_top = 600.0;
        assert_eq!(set.poll(&policy, VIEWPORT, |el| bounds(el, far_top)), 1);
        assert!(far.has_class("animate-in"), "scrolled into view");
        assert_eq!(set.revealed_count(), 2);
    }

    #[test]
    fn pre_marked_elements_start_revealed() {
        let mut set = RevealSet::new("animate-in", Tracer::none());
        let el = FakeElement::new();
        el.add_class("animate-in");
        set.observe(el.clone());
        assert_eq!(set.handle(&el, true), RevealOutcome::AlreadyRevealed);
    }
}
