// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo: the bilingual landing page.
//!
//! Mounts every controller from `brochure_backend_web` against
//! `index.html` and logs trace events to the console. A copy of every
//! event is also recorded; call `trace_json()` from the devtools console to
//! dump it.
//!
//! Build with: `wasm-pack build --target web demos/landing_page`
//!
//! Then serve `demos/landing_page/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use brochure_backend_web::{ConsoleSink, PageHandle};
use brochure_core::config::PageConfig;
use brochure_core::language::Language;
use brochure_core::trace::Tracer;
use brochure_debug::fanout::FanOut;
use brochure_debug::json;
use brochure_debug::recorder::RecorderSink;

struct Demo {
    recorder: Rc<RecorderSink>,
    page: PageHandle,
}

thread_local! {
    // There is no graceful shutdown on the web; the page lives as long as
    // the module.
    static DEMO: RefCell<Option<Demo>> = const { RefCell::new(None) };
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

    let recorder = Rc::new(RecorderSink::new());
    let sinks = FanOut::new()
        .with(Rc::new(ConsoleSink::default()))
        .with(recorder.clone());
    let tracer = Tracer::new(Rc::new(sinks));

    let page = PageHandle::install(window, PageConfig::standard(), tracer)?;
    DEMO.with(|demo| *demo.borrow_mut() = Some(Demo { recorder, page }));
    Ok(())
}

/// Returns every trace event recorded so far as a JSON array.
#[wasm_bindgen]
pub fn trace_json() -> String {
    DEMO.with(|demo| {
        demo.borrow()
            .as_ref()
            .map_or_else(|| "[]".into(), |demo| json::to_string(&demo.recorder.events()))
    })
}

/// Switches the page language by code (`"zh"` or `"en"`).
///
/// Returns `false` if the code is unknown or the language switcher did not
/// mount.
#[wasm_bindgen]
pub fn set_language(code: &str) -> bool {
    let Some(language) = Language::from_code(code) else {
        return false;
    };
    DEMO.with(|demo| {
        let demo = demo.borrow();
        let Some(demo) = demo.as_ref() else {
            return false;
        };
        demo.page
            .with_page(|page| {
                page.language()
                    .map(|switcher| switcher.borrow_mut().switch_language(language))
                    .is_some()
            })
            .unwrap_or(false)
    })
}
