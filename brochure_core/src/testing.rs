// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles for the backend contract.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::backend::{Document, Element, ScrollOptions, Ticker};
use crate::trace::{
    AnchorEvent, AutoplayEvent, LanguageEvent, LayoutEvent, RevealEvent, SetupEvent,
    SetupSkippedEvent, SlideEvent, TraceSink,
};

#[derive(Debug, Default)]
struct NodeState {
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    scrolls: Vec<ScrollOptions>,
}

/// In-memory element; clones share the same node.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeElement(Rc<RefCell<NodeState>>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeElement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_id(id: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().id = Some(id.to_string());
        el
    }

    pub(crate) fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub(crate) fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub(crate) fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub(crate) fn scrolls(&self) -> Vec<ScrollOptions> {
        self.0.borrow().scrolls.clone()
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn scroll_into_view(&self, options: ScrollOptions) {
        self.0.borrow_mut().scrolls.push(options);
    }
}

/// Document whose selector results are registered up front.
#[derive(Debug, Default)]
pub(crate) struct FakeDocument {
    by_selector: BTreeMap<String, Vec<FakeElement>>,
    by_id: Vec<FakeElement>,
    root: FakeElement,
    body: FakeElement,
}

impl FakeDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers `el` as a match for `selector`, in insertion order.
    pub(crate) fn register(&mut self, selector: &str, el: &FakeElement) {
        self.by_selector
            .entry(selector.to_string())
            .or_default()
            .push(el.clone());
        if el.0.borrow().id.is_some() && !self.by_id.contains(el) {
            self.by_id.push(el.clone());
        }
    }

    /// Registers an element reachable only by id.
    pub(crate) fn register_id(&mut self, el: &FakeElement) {
        self.by_id.push(el.clone());
    }

    pub(crate) fn root_element(&self) -> &FakeElement {
        &self.root
    }

    pub(crate) fn body_element(&self) -> &FakeElement {
        &self.body
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.by_id
            .iter()
            .find(|el| el.0.borrow().id.as_deref() == Some(id))
            .cloned()
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.by_selector.get(selector).cloned().unwrap_or_default()
    }

    fn root(&self) -> Option<FakeElement> {
        Some(self.root.clone())
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }
}

/// Ticker that records how many host timers it would have created.
///
/// `live` counts timers that were started and not yet stopped; a correct
/// idempotent ticker never lets it exceed one.
#[derive(Clone, Debug, Default)]
pub(crate) struct ManualTicker {
    running: Rc<Cell<bool>>,
    live: Rc<Cell<u32>>,
    starts: Rc<Cell<u32>>,
}

impl ManualTicker {
    pub(crate) fn live(&self) -> u32 {
        self.live.get()
    }

    pub(crate) fn starts(&self) -> u32 {
        self.starts.get()
    }
}

impl Ticker for ManualTicker {
    fn start(&self) {
        if self.running.get() {
            return;
        }
        self.running.set(true);
        self.live.set(self.live.get() + 1);
        self.starts.set(self.starts.get() + 1);
    }

    fn stop(&self) {
        if !self.running.get() {
            return;
        }
        self.running.set(false);
        self.live.set(self.live.get() - 1);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Sink that records each event's one-line rendering.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    fn push(&self, line: impl ToString) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl TraceSink for RecordingSink {
    fn on_setup(&self, e: &SetupEvent) {
        self.push(e);
    }

    fn on_setup_skipped(&self, e: &SetupSkippedEvent) {
        self.push(e);
    }

    fn on_language(&self, e: &LanguageEvent) {
        self.push(e);
    }

    fn on_slide(&self, e: &SlideEvent) {
        self.push(e);
    }

    fn on_autoplay(&self, e: &AutoplayEvent) {
        self.push(e);
    }

    fn on_anchor(&self, e: &AnchorEvent) {
        self.push(e);
    }

    fn on_reveal(&self, e: &RevealEvent) {
        self.push(e);
    }

    fn on_layout(&self, e: &LayoutEvent) {
        self.push(e);
    }
}
