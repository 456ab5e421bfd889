// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal observation.
//!
//! [`RevealObserver`] feeds a [`RevealSet`] from the live page. It prefers
//! `IntersectionObserver`; where that API is missing it falls back to
//! polling element bounds on `scroll` and `resize`.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use brochure_core::reveal::{RevealOutcome, RevealPolicy, RevealSet};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::element::DomElement;
use crate::listener::EventListener;

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

enum Strategy {
    Intersection {
        observer: IntersectionObserver,
        _callback: ObserverClosure,
    },
    Polling {
        _listeners: Vec<EventListener>,
    },
}

/// Drives a [`RevealSet`] from viewport visibility.
pub struct RevealObserver {
    set: Rc<RefCell<RevealSet<DomElement>>>,
    strategy: Strategy,
}

impl RevealObserver {
    /// Starts observing every element in `set`.
    ///
    /// Uses `IntersectionObserver` when the browser provides it, otherwise
    /// polls on `scroll` and `resize` (and once immediately).
    pub fn new(
        window: &Window,
        set: RevealSet<DomElement>,
        policy: RevealPolicy,
    ) -> Result<Self, JsValue> {
        let set = Rc::new(RefCell::new(set));
        let strategy = if supports_intersection_observer(window) {
            observe_intersections(&set, policy)?
        } else {
            poll_on_scroll(window, &set, policy)?
        };
        Ok(Self { set, strategy })
    }

    /// The observed set.
    #[must_use]
    pub fn set(&self) -> &Rc<RefCell<RevealSet<DomElement>>> {
        &self.set
    }

    /// Returns `true` if backed by `IntersectionObserver`.
    #[must_use]
    pub fn is_event_driven(&self) -> bool {
        matches!(self.strategy, Strategy::Intersection { .. })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        if let Strategy::Intersection { observer, .. } = &self.strategy {
            observer.disconnect();
        }
    }
}

impl core::fmt::Debug for RevealObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RevealObserver")
            .field("event_driven", &self.is_event_driven())
            .field("observed", &self.set.borrow().len())
            .finish_non_exhaustive()
    }
}

fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn observe_intersections(
    set: &Rc<RefCell<RevealSet<DomElement>>>,
    policy: RevealPolicy,
) -> Result<Strategy, JsValue> {
    let target_set = Rc::clone(set);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let mut set = target_set.borrow_mut();
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let qualifies = entry.is_intersecting() && policy.meets(entry.intersection_ratio());
            let target = entry.target();
            let outcome = set.handle(&DomElement::from(target.clone()), qualifies);
            if matches!(outcome, RevealOutcome::Revealed | RevealOutcome::AlreadyRevealed) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(policy.threshold));
    init.set_root_margin(&policy.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    for el in set.borrow().pending() {
        observer.observe(el.as_web());
    }

    Ok(Strategy::Intersection {
        observer,
        _callback: callback,
    })
}

fn poll_on_scroll(
    window: &Window,
    set: &Rc<RefCell<RevealSet<DomElement>>>,
    policy: RevealPolicy,
) -> Result<Strategy, JsValue> {
    let check = {
        let set = Rc::clone(set);
        let window = window.clone();
        move || {
            let Some(viewport) = crate::viewport_rect(&window) else {
                return;
            };
            let mut set = set.borrow_mut();
            if set.is_settled() {
                return;
            }
            set.poll(&policy, viewport, DomElement::bounds);
        }
    };
    check();

    let mut listeners = vec![];
    for kind in ["scroll", "resize"] {
        let check = check.clone();
        listeners.push(EventListener::new(window, kind, move |_| check())?);
    }
    Ok(Strategy::Polling {
        _listeners: listeners,
    })
}
