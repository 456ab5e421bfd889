// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature carousel.
//!
//! [`FeatureSlider`] cycles an ordered set of slides paired 1:1 with
//! indicators. Exactly one pair carries the active marker at a time.
//! Navigation wraps in both directions; autoplay is a [`Ticker`] whose
//! callback the backend points at [`FeatureSlider::next_slide`].
//!
//! Autoplay and manual navigation both funnel through
//! [`go_to_slide`](FeatureSlider::go_to_slide). Manual navigation never
//! starts or stops autoplay; only hover does.

use alloc::vec::Vec;

use crate::backend::{Document, Element, Ticker};
use crate::config::PageConfig;
use crate::error::SetupError;
use crate::trace::Tracer;

/// Elements governed by a [`FeatureSlider`] and its event wiring.
#[derive(Clone, Debug)]
pub struct SliderParts<E> {
    /// Hover and keyboard scope, if present.
    pub region: Option<E>,
    /// Slides in display order. Never empty after discovery.
    pub slides: Vec<E>,
    /// Indicators in display order.
    pub indicators: Vec<E>,
    /// "Previous" control, if present.
    pub prev: Option<E>,
    /// "Next" control, if present.
    pub next: Option<E>,
}

impl<E: Element> SliderParts<E> {
    /// Collects the slider's elements.
    ///
    /// Only slides are required; without them there is nothing to show and
    /// discovery fails with [`SetupError::NoSlides`]. The region and
    /// controls are optional: their bindings are simply not made.
    pub fn discover<D>(doc: &D, config: &PageConfig) -> Result<Self, SetupError>
    where
        D: Document<Element = E>,
    {
        let sel = &config.selectors;
        let slides = doc.query_all(sel.slides);
        if slides.is_empty() {
            return Err(SetupError::NoSlides);
        }
        Ok(Self {
            region: doc.query(sel.slider),
            slides,
            indicators: doc.query_all(sel.indicators),
            prev: doc.query(sel.prev),
            next: doc.query(sel.next),
        })
    }
}

/// Index one step forward from `current`, wrapping to 0.
#[must_use]
pub const fn next_index(current: usize, total: usize) -> usize {
    (current + 1) % total
}

/// Index one step back from `current`, wrapping to `total - 1`.
#[must_use]
pub const fn prev_index(current: usize, total: usize) -> usize {
    (current + total - 1) % total
}

/// A carousel over a non-empty set of slides.
#[derive(Debug)]
pub struct FeatureSlider<E, T> {
    slides: Vec<E>,
    indicators: Vec<E>,
    current: usize,
    ticker: T,
    active_class: &'static str,
    tracer: Tracer,
}

impl<E: Element, T: Ticker> FeatureSlider<E, T> {
    /// Creates a slider showing the first slide.
    ///
    /// Any stray active markers in the markup are cleared so that exactly
    /// one pair is active. Autoplay is not started.
    pub fn new(
        slides: Vec<E>,
        indicators: Vec<E>,
        ticker: T,
        active_class: &'static str,
        tracer: Tracer,
    ) -> Result<Self, SetupError> {
        if slides.is_empty() {
            return Err(SetupError::NoSlides);
        }
        for el in slides.iter().chain(&indicators).skip(1) {
            el.remove_class(active_class);
        }
        let slider = Self {
            slides,
            indicators,
            current: 0,
            ticker,
            active_class,
            tracer,
        };
        slider.set_pair(0, true);
        Ok(slider)
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`: a slider is never constructed without slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the active slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// The autoplay ticker.
    #[must_use]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Moves the active marker to the pair at `index`.
    ///
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            return false;
        }
        let from = self.current;
        self.set_pair(from, false);
        self.current = index;
        self.set_pair(index, true);
        if from != index {
            self.tracer.slide(from, index, self.slides.len());
        }
        true
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next_slide(&mut self) {
        self.go_to_slide(next_index(self.current, self.slides.len()));
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn prev_slide(&mut self) {
        self.go_to_slide(prev_index(self.current, self.slides.len()));
    }

    /// Starts autoplay. A no-op while already running.
    pub fn start_autoplay(&self) {
        if self.ticker.is_running() {
            return;
        }
        self.ticker.start();
        self.tracer.autoplay(true);
    }

    /// Stops autoplay. A no-op while stopped.
    pub fn stop_autoplay(&self) {
        if !self.ticker.is_running() {
            return;
        }
        self.ticker.stop();
        self.tracer.autoplay(false);
    }

    /// Returns `true` while autoplay is running.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.ticker.is_running()
    }

    /// Pointer entered the slider region.
    pub fn on_hover_start(&self) {
        self.stop_autoplay();
    }

    /// Pointer left the slider region.
    pub fn on_hover_end(&self) {
        self.start_autoplay();
    }

    fn set_pair(&self, index: usize, active: bool) {
        let class = self.active_class;
        for el in [self.slides.get(index), self.indicators.get(index)]
            .into_iter()
            .flatten()
        {
            if active {
                el.add_class(class);
            } else {
                el.remove_class(class);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;

    use crate::testing::{FakeDocument, FakeElement, ManualTicker, RecordingSink};

    fn elements(n: usize) -> Vec<FakeElement> {
        (0..n).map(|_| FakeElement::new()).collect()
    }

    type TestSlider = FeatureSlider<FakeElement, ManualTicker>;

    fn slider(n: usize) -> (TestSlider, Vec<FakeElement>, Vec<FakeElement>) {
        let slides = elements(n);
        let dots = elements(n);
        let s = FeatureSlider::new(
            slides.clone(),
            dots.clone(),
            ManualTicker::default(),
            "active",
            Tracer::none(),
        )
        .unwrap();
        (s, slides, dots)
    }

    fn active_positions(els: &[FakeElement]) -> Vec<usize> {
        els.iter()
            .enumerate()
            .filter(|(_, el)| el.has_class("active"))
            .map(|(i, _)| i)
            .collect()
    }

    /// Simulates one autoplay period: every live host timer fires once.
    fn elapse_period(s: &mut TestSlider) {
        for _ in 0..s.ticker().live() {
            s.next_slide();
        }
    }

    #[test]
    fn wrap_arithmetic() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(next_index(1, 4), 2);
        assert_eq!(prev_index(2, 4), 1);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn starts_on_first_pair() {
        let (s, slides, dots) = slider(3);
        assert_eq!(s.current(), 0);
        assert_eq!(active_positions(&slides), vec![0]);
        assert_eq!(active_positions(&dots), vec![0]);
        assert!(!s.is_autoplaying(), "autoplay must wait for an explicit start");
    }

    #[test]
    fn construction_clears_stray_markers() {
        let slides = elements(3);
        let dots = elements(3);
        slides[2].add_class("active");
        dots[1].add_class("active");
        let _s = FeatureSlider::new(
            slides.clone(),
            dots.clone(),
            ManualTicker::default(),
            "active",
            Tracer::none(),
        )
        .unwrap();
        assert_eq!(active_positions(&slides), vec![0]);
        assert_eq!(active_positions(&dots), vec![0]);
    }

    #[test]
    fn go_to_slide_keeps_exactly_one_pair_active() {
        let (mut s, slides, dots) = slider(4);
        for i in [2, 0, 3, 3, 1] {
            assert!(s.go_to_slide(i), "index {i} is in range");
            assert_eq!(active_positions(&slides), vec![i]);
            assert_eq!(active_positions(&dots), vec![i]);
        }
    }

    #[test]
    fn out_of_range_is_ignored() {
        let (mut s, slides, _) = slider(2);
        assert!(!s.go_to_slide(2), "index 2 is out of range");
        assert_eq!(s.current(), 0);
        assert_eq!(active_positions(&slides), vec![0]);
    }

    #[test]
    fn next_and_prev_wrap() {
        let (mut s, _, _) = slider(4);
        s.go_to_slide(3);
        s.next_slide();
        assert_eq!(s.current(), 0);
        s.prev_slide();
        assert_eq!(s.current(), 3);
    }

    #[test]
    fn missing_indicators_are_tolerated() {
        let slides = elements(3);
        let dots = elements(1);
        let mut s = FeatureSlider::new(
            slides.clone(),
            dots.clone(),
            ManualTicker::default(),
            "active",
            Tracer::none(),
        )
        .unwrap();
        s.go_to_slide(2);
        assert_eq!(active_positions(&slides), vec![2]);
        assert!(active_positions(&dots).is_empty(), "dot 0 was deactivated");
    }

    #[test]
    fn empty_slider_is_rejected() {
        let result = FeatureSlider::<FakeElement, _>::new(
            vec![],
            vec![],
            ManualTicker::default(),
            "active",
            Tracer::none(),
        );
        assert_eq!(result.unwrap_err(), SetupError::NoSlides);

        let doc = FakeDocument::new();
        let err = SliderParts::discover(&doc, &PageConfig::standard()).unwrap_err();
        assert_eq!(err, SetupError::NoSlides);
    }

    #[test]
    fn double_start_advances_once_per_period() {
        let (mut s, _, _) = slider(4);
        s.start_autoplay();
        s.start_autoplay();
        assert_eq!(s.ticker().live(), 1);
        elapse_period(&mut s);
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let (mut s, _, _) = slider(4);
        s.start_autoplay();
        s.on_hover_start();
        assert!(!s.is_autoplaying(), "hover must stop autoplay");
        elapse_period(&mut s);
        elapse_period(&mut s);
        assert_eq!(s.current(), 0);

        s.on_hover_end();
        elapse_period(&mut s);
        assert_eq!(s.current(), 1);
        assert_eq!(s.ticker().starts(), 2);
    }

    #[test]
    fn stop_when_stopped_is_noop() {
        let (s, _, _) = slider(2);
        s.stop_autoplay();
        assert_eq!(s.ticker().live(), 0);
        assert!(!s.is_autoplaying(), "still stopped");
    }

    #[test]
    fn manual_navigation_leaves_autoplay_alone() {
        let (mut s, _, _) = slider(3);
        s.start_autoplay();
        s.prev_slide();
        s.go_to_slide(1);
        assert!(s.is_autoplaying(), "manual navigation must not pause");
        assert_eq!(s.ticker().starts(), 1);
    }

    #[test]
    fn discover_collects_optional_controls() {
        let config = PageConfig::standard();
        let sel = &config.selectors;
        let mut doc = FakeDocument::new();
        let region = FakeElement::new();
        let next = FakeElement::new();
        doc.register(sel.slider, &region);
        doc.register(sel.next, &next);
        for el in elements(2) {
            doc.register(sel.slides, &el);
        }
        let parts = SliderParts::discover(&doc, &config).unwrap();
        assert_eq!(parts.slides.len(), 2);
        assert!(parts.indicators.is_empty(), "no dots registered");
        assert_eq!(parts.region, Some(region));
        assert_eq!(parts.next, Some(next));
        assert_eq!(parts.prev, None);
    }

    #[test]
    fn changes_are_traced() {
        let sink = Rc::new(RecordingSink::default());
        let mut s = FeatureSlider::new(
            elements(4),
            elements(4),
            ManualTicker::default(),
            "active",
            Tracer::new(sink.clone()),
        )
        .unwrap();
        s.start_autoplay();
        s.start_autoplay();
        s.prev_slide();
        s.stop_autoplay();
        assert_eq!(
            sink.lines(),
            ["autoplay started", "slide 0 -> 3 of 4", "autoplay stopped"]
        );
    }

    #[test]
    fn reselecting_the_current_slide_is_not_traced() {
        let sink = Rc::new(RecordingSink::default());
        let slides = elements(3);
        let mut s = FeatureSlider::new(
            slides.clone(),
            elements(3),
            ManualTicker::default(),
            "active",
            Tracer::new(sink.clone()),
        )
        .unwrap();
        assert!(s.go_to_slide(0), "current index is in range");
        assert!(s.go_to_slide(1), "index 1 is in range");
        assert!(s.go_to_slide(1), "index 1 is still in range");
        assert_eq!(active_positions(&slides), vec![1]);
        assert_eq!(sink.lines(), ["slide 0 -> 1 of 3"]);
    }
}
