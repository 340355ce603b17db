use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::BindError;

/// An attached event listener. Dropping it detaches the callback.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, BindError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback_and_bool(
                event,
                closure.as_ref().unchecked_ref(),
                capture,
            )
            .map_err(|err| BindError::Listener {
                event,
                message: format!("{err:?}"),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            capture,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Every listener the page registered. Dropping the registry is the single
/// teardown path.
#[derive(Default)]
pub struct Subscriptions {
    listeners: Vec<Listener>,
}

impl Subscriptions {
    pub fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) {
        self.push(Listener::attach(target, event, false, handler));
    }

    pub fn listen_capture(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) {
        self.push(Listener::attach(target, event, true, handler));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn push(&mut self, listener: Result<Listener, BindError>) {
        match listener {
            Ok(listener) => self.listeners.push(listener),
            Err(err) => tracing::warn!("dom: {err}"),
        }
    }
}
