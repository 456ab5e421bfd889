// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned event listener registrations.

use alloc::boxed::Box;
use alloc::vec::Vec;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Event, EventTarget};

type HandlerClosure = Closure<dyn FnMut(Event)>;

/// An event listener that stays registered for as long as it is alive.
///
/// Dropping the listener removes it from its target and frees the JS
/// closure.
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    closure: HandlerClosure,
}

impl EventListener {
    /// Registers `handler` for `kind` events on `target`.
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// The event type this listener is registered for.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Listeners registered as a unit.
///
/// A batch that is dropped instead of [committed](Self::commit) unregisters
/// everything added so far, so a setup step that fails halfway leaves no
/// handlers behind.
#[derive(Debug, Default)]
#[must_use]
pub struct ListenerBatch {
    listeners: Vec<EventListener>,
}

impl ListenerBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the result of a registration, passing a failure through.
    pub fn add(&mut self, listener: Result<EventListener, JsValue>) -> Result<(), JsValue> {
        self.listeners.push(listener?);
        Ok(())
    }

    /// Number of listeners in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Hands every listener over to `owner`.
    pub fn commit(self, owner: &mut Vec<EventListener>) {
        owner.extend(self.listeners);
    }
}
