//! DOM event listeners tied to an owner's lifetime
//!
//! The listener is registered on creation and removed when dropped, so a
//! torn-down carousel leaves no handlers behind on `window`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

pub struct ScopedListener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ScopedListener {
    /// Listen for `event_type` on `target`, casting each event to `E`
    pub fn new<E, F>(
        target: &EventTarget,
        event_type: &'static str,
        mut handler: F,
    ) -> Result<Self, JsValue>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            handler(event.unchecked_into::<E>());
        });
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove '{}' listener: {:?}", self.event_type, e);
        }
    }
}
