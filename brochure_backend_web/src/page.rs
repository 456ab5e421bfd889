// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page bootstrap.
//!
//! [`PageHandle::install`] injects the reveal stylesheet right away and
//! mounts a [`Page`] once the document has been parsed. [`Page::mount`]
//! sets up each controller through [`isolated`], so a page missing the
//! slider markup still gets language switching, smooth scrolling, reveal
//! animations and the layout handler.
//!
//! The `Page` owns every listener it registers. Dropping it unregisters
//! them and stops autoplay.

use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use brochure_core::backend::Document as _;
use brochure_core::bootstrap::{Controller, isolated};
use brochure_core::config::PageConfig;
use brochure_core::error::SetupError;
use brochure_core::keyboard::SlideKey;
use brochure_core::language::{LanguageParts, LanguageSwitcher};
use brochure_core::layout::ResponsiveLayout;
use brochure_core::reveal::RevealSet;
use brochure_core::scroll::SmoothScroll;
use brochure_core::slider::{FeatureSlider, SliderParts};
use brochure_core::style::reveal_stylesheet;
use brochure_core::trace::Tracer;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Event, KeyboardEvent, Window, console};

use crate::element::{DomDocument, DomElement};
use crate::interval::{IntervalTimer, set_timeout};
use crate::listener::{EventListener, ListenerBatch};
use crate::observer::RevealObserver;
use crate::{setup_error, viewport_width};

/// The slider as mounted on the web.
pub type WebSlider = FeatureSlider<DomElement, IntervalTimer>;

type Shared<T> = Rc<RefCell<T>>;

/// Every controller mounted on a live document.
///
/// A controller whose setup failed is `None`; the failure has already been
/// traced.
pub struct Page {
    language: Option<Shared<LanguageSwitcher<DomElement>>>,
    slider: Option<Shared<WebSlider>>,
    scroll: Option<Rc<SmoothScroll<DomElement>>>,
    reveal: Option<RevealObserver>,
    layout: Option<Shared<ResponsiveLayout<DomElement>>>,
    listeners: Vec<EventListener>,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field("language", &self.language.is_some())
            .field("slider", &self.slider.is_some())
            .field("scroll", &self.scroll.is_some())
            .field("reveal", &self.reveal)
            .field("layout", &self.layout.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

struct SliderMount {
    slider: Shared<WebSlider>,
    prev: Option<DomElement>,
    next: Option<DomElement>,
}

impl Page {
    /// Mounts every controller on `window`'s document.
    ///
    /// Fails only if the window has no document; individual controller
    /// failures are traced and skipped.
    pub fn mount(window: &Window, config: &PageConfig, tracer: &Tracer) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let doc = DomDocument::new(document);
        let mut listeners = Vec::new();

        let language = isolated(tracer, Controller::LanguageSwitcher, || {
            mount_language(&doc, config, tracer, &mut listeners)
        });

        let slider = isolated(tracer, Controller::FeatureSlider, || {
            mount_slider(&doc, config, tracer, &mut listeners)
        })
        .map(|mount| {
            let SliderMount { slider, prev, next } = mount;
            isolated(tracer, Controller::Keyboard, || {
                mount_keyboard(&doc, config, prev, next, &mut listeners)
            });
            slider
        });

        let scroll = isolated(tracer, Controller::SmoothScroll, || {
            mount_scroll(&doc, config, tracer, &mut listeners)
        });

        let reveal = isolated(tracer, Controller::PageAnimations, || {
            mount_reveal(window, &doc, config, tracer)
        });

        let layout = isolated(tracer, Controller::Layout, || {
            mount_layout(window, &doc, config, tracer, &mut listeners)
        });

        isolated(tracer, Controller::FadeIn, || fade_in(&doc, config));

        Ok(Self {
            language,
            slider,
            scroll,
            reveal,
            layout,
            listeners,
        })
    }

    /// The language switcher, if mounted.
    #[must_use]
    pub fn language(&self) -> Option<&Shared<LanguageSwitcher<DomElement>>> {
        self.language.as_ref()
    }

    /// The feature slider, if mounted.
    #[must_use]
    pub fn slider(&self) -> Option<&Shared<WebSlider>> {
        self.slider.as_ref()
    }

    /// The smooth-scroll controller, if mounted.
    #[must_use]
    pub fn scroll(&self) -> Option<&Rc<SmoothScroll<DomElement>>> {
        self.scroll.as_ref()
    }

    /// The reveal observer, if mounted.
    #[must_use]
    pub fn reveal(&self) -> Option<&RevealObserver> {
        self.reveal.as_ref()
    }

    /// The layout controller, if mounted.
    #[must_use]
    pub fn layout(&self) -> Option<&Shared<ResponsiveLayout<DomElement>>> {
        self.layout.as_ref()
    }

    /// Number of live event listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Owns a [`Page`] that mounts once the document is ready.
pub struct PageHandle {
    page: Shared<Option<Page>>,
    _ready: Option<EventListener>,
}

impl core::fmt::Debug for PageHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageHandle")
            .field("page", &self.page.borrow())
            .finish_non_exhaustive()
    }
}

impl PageHandle {
    /// Injects the reveal stylesheet and mounts the page.
    ///
    /// If the document is still loading, mounting waits for
    /// `DOMContentLoaded`; otherwise it happens immediately.
    pub fn install(window: Window, config: PageConfig, tracer: Tracer) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let doc = DomDocument::new(document.clone());
        isolated(&tracer, Controller::Styles, || inject_styles(&doc, &config));

        let page = Rc::new(RefCell::new(None));
        if !is_loading(&document) {
            *page.borrow_mut() = Some(Page::mount(&window, &config, &tracer)?);
            return Ok(Self { page, _ready: None });
        }

        let slot = Rc::clone(&page);
        let ready = EventListener::new(&document, "DOMContentLoaded", move |_| {
            if slot.borrow().is_some() {
                return;
            }
            match Page::mount(&window, &config, &tracer) {
                Ok(mounted) => *slot.borrow_mut() = Some(mounted),
                Err(err) => console::error_1(&err),
            }
        })?;
        Ok(Self {
            page,
            _ready: Some(ready),
        })
    }

    /// Returns `true` once the page has mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.page.borrow().is_some()
    }

    /// Runs `f` against the mounted page, if any.
    pub fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> Option<R> {
        self.page.borrow().as_ref().map(f)
    }
}

fn is_loading(document: &web_sys::Document) -> bool {
    document.ready_state() == "loading"
}

fn missing(role: &'static str, selector: &str) -> SetupError {
    SetupError::MissingElement {
        role,
        selector: selector.into(),
    }
}

fn inject_styles(doc: &DomDocument, config: &PageConfig) -> Result<(), SetupError> {
    let document = doc.as_web();
    let head = document.head().ok_or_else(|| missing("document head", "head"))?;
    let style = document.create_element("style").map_err(setup_error)?;
    style.set_text_content(Some(&reveal_stylesheet(
        config.selectors.reveal,
        config.classes.revealed,
    )));
    head.append_child(&style).map_err(setup_error)?;
    Ok(())
}

fn mount_language(
    doc: &DomDocument,
    config: &PageConfig,
    tracer: &Tracer,
    listeners: &mut Vec<EventListener>,
) -> Result<Shared<LanguageSwitcher<DomElement>>, SetupError> {
    let parts = LanguageParts::discover(doc, config)?;
    let switcher = Rc::new(RefCell::new(LanguageSwitcher::new(
        parts,
        config.default_language,
        config.classes.active,
        tracer.clone(),
    )));

    let controls: Vec<_> = switcher
        .borrow()
        .selectors()
        .map(|(lang, el)| (lang, el.clone()))
        .collect();
    let mut batch = ListenerBatch::new();
    for (lang, control) in controls {
        let target = Rc::clone(&switcher);
        batch
            .add(EventListener::new(control.as_web(), "click", move |_| {
                target.borrow_mut().switch_language(lang);
            }))
            .map_err(setup_error)?;
    }
    batch.commit(listeners);
    Ok(switcher)
}

fn mount_slider(
    doc: &DomDocument,
    config: &PageConfig,
    tracer: &Tracer,
    listeners: &mut Vec<EventListener>,
) -> Result<SliderMount, SetupError> {
    let parts = SliderParts::discover(doc, config)?;
    let indicators = parts.indicators.clone();
    let slider = Rc::new(RefCell::new(FeatureSlider::new(
        parts.slides,
        parts.indicators,
        IntervalTimer::new(config.slider.autoplay_period),
        config.classes.active,
        tracer.clone(),
    )?));

    let weak = Rc::downgrade(&slider);
    slider.borrow().ticker().set_callback(move || {
        if let Some(slider) = weak.upgrade() {
            slider.borrow_mut().next_slide();
        }
    });

    let mut batch = ListenerBatch::new();
    let mut on = |el: &DomElement, kind: &'static str, f: fn(&Shared<WebSlider>)| {
        let target = Rc::clone(&slider);
        batch
            .add(EventListener::new(el.as_web(), kind, move |_| f(&target)))
            .map_err(setup_error)
    };

    if let Some(prev) = &parts.prev {
        on(prev, "click", |s| s.borrow_mut().prev_slide())?;
    }
    if let Some(next) = &parts.next {
        on(next, "click", |s| s.borrow_mut().next_slide())?;
    }
    if let Some(region) = &parts.region {
        on(region, "mouseenter", |s| s.borrow().on_hover_start())?;
        on(region, "mouseleave", |s| s.borrow().on_hover_end())?;
    }

    for (index, dot) in indicators.iter().enumerate() {
        let target = Rc::clone(&slider);
        batch
            .add(EventListener::new(dot.as_web(), "click", move |_| {
                target.borrow_mut().go_to_slide(index);
            }))
            .map_err(setup_error)?;
    }

    batch.commit(listeners);
    slider.borrow().start_autoplay();
    Ok(SliderMount {
        slider,
        prev: parts.prev,
        next: parts.next,
    })
}

fn mount_keyboard(
    doc: &DomDocument,
    config: &PageConfig,
    prev: Option<DomElement>,
    next: Option<DomElement>,
    listeners: &mut Vec<EventListener>,
) -> Result<(), SetupError> {
    let sel = &config.selectors;
    if prev.is_none() && next.is_none() {
        return Err(missing(
            "slider control",
            &format!("{}, {}", sel.prev, sel.next),
        ));
    }
    let region = sel.slider;
    let listener = EventListener::new(doc.as_web(), "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let within_slider = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(region).ok().flatten())
            .is_some();
        let control = match SlideKey::route(&key, within_slider) {
            Some(SlideKey::Previous) => prev.as_ref(),
            Some(SlideKey::Next) => next.as_ref(),
            None => None,
        };
        if let Some(html) = control.and_then(DomElement::as_html) {
            html.click();
        }
    })
    .map_err(setup_error)?;
    listeners.push(listener);
    Ok(())
}

fn mount_scroll(
    doc: &DomDocument,
    config: &PageConfig,
    tracer: &Tracer,
    listeners: &mut Vec<EventListener>,
) -> Result<Rc<SmoothScroll<DomElement>>, SetupError> {
    let scroll = Rc::new(SmoothScroll::discover(doc, config, tracer.clone()));
    let mut batch = ListenerBatch::new();
    for anchor in scroll.anchors() {
        let controller = Rc::clone(&scroll);
        let doc = doc.clone();
        let clicked = anchor.clone();
        batch
            .add(EventListener::new(anchor.as_web(), "click", move |event: Event| {
                event.prevent_default();
                controller.follow(&doc, &clicked);
            }))
            .map_err(setup_error)?;
    }
    batch.commit(listeners);
    Ok(scroll)
}

fn mount_reveal(
    window: &Window,
    doc: &DomDocument,
    config: &PageConfig,
    tracer: &Tracer,
) -> Result<RevealObserver, SetupError> {
    let mut set = RevealSet::new(config.classes.revealed, tracer.clone());
    for el in doc.query_all(config.selectors.reveal) {
        set.observe(el);
    }
    RevealObserver::new(window, set, config.reveal).map_err(setup_error)
}

fn mount_layout(
    window: &Window,
    doc: &DomDocument,
    config: &PageConfig,
    tracer: &Tracer,
    listeners: &mut Vec<EventListener>,
) -> Result<Shared<ResponsiveLayout<DomElement>>, SetupError> {
    let body = doc.body().ok_or_else(|| missing("document body", "body"))?;
    let layout = Rc::new(RefCell::new(ResponsiveLayout::new(
        body,
        config.classes.narrow,
        config.layout,
        tracer.clone(),
    )));

    let update = {
        let layout = Rc::clone(&layout);
        let window = window.clone();
        move || {
            if let Some(width) = viewport_width(&window) {
                layout.borrow_mut().apply(width);
            }
        }
    };
    // `load` may already have fired by the time the module starts.
    update();
    let mut batch = ListenerBatch::new();
    for kind in ["resize", "load"] {
        let update = update.clone();
        batch
            .add(EventListener::new(window, kind, move |_| update()))
            .map_err(setup_error)?;
    }
    batch.commit(listeners);
    Ok(layout)
}

fn fade_in(doc: &DomDocument, config: &PageConfig) -> Result<(), SetupError> {
    let body = doc
        .as_web()
        .body()
        .ok_or_else(|| missing("document body", "body"))?;
    body.style()
        .set_property("opacity", "0")
        .map_err(setup_error)?;
    let transition = config.fade_in.transition;
    set_timeout(config.fade_in.delay, move || {
        let style = body.style();
        let _ = style.set_property("transition", transition);
        let _ = style.set_property("opacity", "1");
    });
    Ok(())
}
