// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element handles and document queries.

use alloc::string::String;
use alloc::vec::Vec;

use brochure_core::backend::{
    Document, Element, ScrollAlign, ScrollBehavior, ScrollOptions,
};
use kurbo::Rect;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{HtmlElement, ScrollIntoViewOptions, ScrollLogicalPosition};

/// A live DOM element.
///
/// Equality is node identity (`===`), so handles obtained from separate
/// queries compare equal when they refer to the same node.
#[derive(Clone, Debug)]
pub struct DomElement(web_sys::Element);

impl PartialEq for DomElement {
    fn eq(&self, other: &Self) -> bool {
        let a: &JsValue = self.0.as_ref();
        let b: &JsValue = other.0.as_ref();
        a == b
    }
}

impl From<web_sys::Element> for DomElement {
    fn from(el: web_sys::Element) -> Self {
        Self(el)
    }
}

impl DomElement {
    /// Returns the underlying `web_sys::Element`.
    #[must_use]
    pub fn as_web(&self) -> &web_sys::Element {
        &self.0
    }

    /// Returns the element as an `HtmlElement`, if it is one.
    #[must_use]
    pub fn as_html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }

    /// Bounding box in client (viewport) coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }
}

impl Element for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn scroll_into_view(&self, options: ScrollOptions) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(match options.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        opts.set_block(match options.block {
            ScrollAlign::Start => ScrollLogicalPosition::Start,
            ScrollAlign::Center => ScrollLogicalPosition::Center,
            ScrollAlign::End => ScrollLogicalPosition::End,
            ScrollAlign::Nearest => ScrollLogicalPosition::Nearest,
        });
        self.0.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// The live document.
#[derive(Clone, Debug)]
pub struct DomDocument(web_sys::Document);

impl DomDocument {
    /// Wraps a `web_sys::Document`.
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }

    /// Returns the underlying `web_sys::Document`.
    #[must_use]
    pub fn as_web(&self) -> &web_sys::Document {
        &self.0
    }
}

impl Document for DomDocument {
    type Element = DomElement;

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.0.get_element_by_id(id).map(DomElement)
    }

    fn query(&self, selector: &str) -> Option<DomElement> {
        self.0.query_selector(selector).ok().flatten().map(DomElement)
    }

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        let Ok(list) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(DomElement)
            .collect()
    }

    fn root(&self) -> Option<DomElement> {
        self.0.document_element().map(DomElement)
    }

    fn body(&self) -> Option<DomElement> {
        self.0.body().map(|body| DomElement(body.into()))
    }
}
