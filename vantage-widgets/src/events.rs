//! Named lifecycle callbacks owned by a widget.
//!
//! Dispatch is first-responder: a trigger runs the earliest registered
//! record for the name that may still run, returns its result and stops.
//! Later records under the same name only fire once every earlier one is a
//! spent one-shot or has been removed.

use std::fmt;

use tracing::trace;

/// Boxed lifecycle callback receiving the widget state and trigger arguments.
pub type Handler<C, A, R> = Box<dyn FnMut(&C, &A) -> R>;

/// Outcome a lifecycle hook reports back to the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flow {
    #[default]
    Continue,
    /// Abort the transition when returned from a `before*` hook.
    Cancel,
}

impl Flow {
    pub const fn is_cancel(self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// Dispatch by name to a single responder.
pub trait NamedCallback<C, A, R> {
    fn fire(&mut self, name: &str, ctx: &C, args: &A) -> Option<R>;
}

struct EventRecord<C, A, R> {
    name: String,
    handler: Handler<C, A, R>,
    one: bool,
    fired: bool,
}

impl<C, A, R> EventRecord<C, A, R> {
    fn is_live(&self) -> bool {
        !(self.one && self.fired)
    }
}

/// Ordered list of named callbacks.
pub struct EventRegistry<C, A = (), R = Flow> {
    events: Vec<EventRecord<C, A, R>>,
}

impl<C, A, R> Default for EventRegistry<C, A, R> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<C, A, R> fmt::Debug for EventRegistry<C, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.events.iter().map(|event| (&event.name, event.one, event.fired)))
            .finish()
    }
}

impl<C, A, R> EventRegistry<C, A, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; `one` makes it fire at most once.
    pub fn add_event<F>(&mut self, name: impl Into<String>, handler: F, one: bool) -> &mut Self
    where
        F: FnMut(&C, &A) -> R + 'static,
    {
        self.events.push(EventRecord {
            name: name.into(),
            handler: Box::new(handler),
            one,
            fired: false,
        });
        self
    }

    pub fn on<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: FnMut(&C, &A) -> R + 'static,
    {
        self.add_event(name, handler, false)
    }

    pub fn one<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: FnMut(&C, &A) -> R + 'static,
    {
        self.add_event(name, handler, true)
    }

    /// Remove the first record registered under `name`.
    ///
    /// Returns whether a record was removed.
    pub fn remove_event(&mut self, name: &str) -> bool {
        match self.events.iter().position(|event| event.name == name) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn off(&mut self, name: &str) -> &mut Self {
        self.remove_event(name);
        self
    }

    /// Run the first live record named `name`.
    pub fn trigger(&mut self, name: &str, ctx: &C, args: &A) -> Option<R> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.name == name && event.is_live())?;

        if event.one {
            event.fired = true;
        }

        trace!(event = name, one = event.one, "widget event fired");
        Some((event.handler)(ctx, args))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.events.iter().any(|event| event.name == name)
    }
}

impl<C, A, R> NamedCallback<C, A, R> for EventRegistry<C, A, R> {
    fn fire(&mut self, name: &str, ctx: &C, args: &A) -> Option<R> {
        self.trigger(name, ctx, args)
    }
}
