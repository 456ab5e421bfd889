// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` ticker.
//!
//! [`IntervalTimer`] implements [`Ticker`] on top of the browser's
//! `setInterval`/`clearInterval`. At most one interval is registered per
//! timer: starting a running timer is a no-op, so autoplay can never fire
//! twice per period.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::time::Duration;

use brochure_core::backend::Ticker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so the timer
// does not need to hold (or re-fetch) the Window.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout_raw(handler: &JsValue, timeout: i32) -> i32;
}

/// Converts a duration to the millisecond argument of the timer APIs.
fn millis(period: Duration) -> i32 {
    i32::try_from(period.as_millis()).unwrap_or(i32::MAX)
}

/// Runs `f` once after `delay`.
///
/// The closure is handed to JS and freed after it runs.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(f);
    set_timeout_raw(&closure, millis(delay));
}

/// A repeating `setInterval` timer.
///
/// Create with [`IntervalTimer::new`], point it at a callback with
/// [`set_callback`](Self::set_callback), then [`start`](Ticker::start) it.
/// The timer is stopped and its JS closure released when dropped.
pub struct IntervalTimer {
    inner: Rc<IntervalInner>,
}

type TickClosure = Closure<dyn FnMut()>;

struct IntervalInner {
    /// The JS closure registered with `setInterval`; created on first start.
    closure: RefCell<Option<TickClosure>>,

    /// The user-supplied callback invoked on every tick.
    callback: RefCell<Option<Box<dyn FnMut()>>>,

    /// Period in milliseconds.
    period_ms: i32,

    /// Whether an interval is currently registered.
    running: Cell<bool>,

    /// The ID returned by the most recent `setInterval` call.
    interval_id: Cell<i32>,
}

impl IntervalTimer {
    /// Creates a timer with the given period that is **not yet running**.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            inner: Rc::new(IntervalInner {
                closure: RefCell::new(None),
                callback: RefCell::new(None),
                period_ms: millis(period),
                running: Cell::new(false),
                interval_id: Cell::new(0),
            }),
        }
    }

    /// Sets the function called on every tick, replacing any previous one.
    ///
    /// The callback must not call [`set_callback`](Self::set_callback)
    /// itself.
    pub fn set_callback(&self, callback: impl FnMut() + 'static) {
        *self.inner.callback.borrow_mut() = Some(Box::new(callback));
    }

    /// Returns the period in milliseconds.
    #[must_use]
    pub fn period_ms(&self) -> i32 {
        self.inner.period_ms
    }

    fn ensure_closure(&self) {
        let mut slot = self.inner.closure.borrow_mut();
        if slot.is_some() {
            return;
        }
        // Weak, so the closure stored in `inner` does not keep `inner` alive.
        let weak = Rc::downgrade(&self.inner);
        *slot = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }
            if let Some(callback) = inner.callback.borrow_mut().as_mut() {
                callback();
            }
        }) as Box<dyn FnMut()>));
    }
}

impl Ticker for IntervalTimer {
    fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.ensure_closure();
        if let Some(closure) = self.inner.closure.borrow().as_ref() {
            let id = set_interval(closure.as_ref().unchecked_ref(), self.inner.period_ms);
            self.inner.interval_id.set(id);
            self.inner.running.set(true);
        }
    }

    fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        clear_interval(self.inner.interval_id.get());
    }

    fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
        self.inner.callback.borrow_mut().take();
    }
}

impl core::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("running", &self.inner.running.get())
            .field("period_ms", &self.inner.period_ms)
            .finish_non_exhaustive()
    }
}
