use crate::events::{EventRegistry, Flow};

/// Lifecycle hook names a widget triggers.
pub trait Hook: Copy {
    fn name(self) -> &'static str;
}

/// A stateful widget that owns one event registry.
///
/// Handlers receive the widget state and the trigger arguments. Registration
/// methods return the widget for chaining.
pub trait Widget: Sized {
    type State;
    type Args;
    type Hook: Hook;

    fn registry(&mut self) -> &mut EventRegistry<Self::State, Self::Args>;

    fn on<F>(&mut self, hook: Self::Hook, handler: F) -> &mut Self
    where
        F: FnMut(&Self::State, &Self::Args) -> Flow + 'static,
    {
        self.registry().on(hook.name(), handler);
        self
    }

    fn one<F>(&mut self, hook: Self::Hook, handler: F) -> &mut Self
    where
        F: FnMut(&Self::State, &Self::Args) -> Flow + 'static,
    {
        self.registry().one(hook.name(), handler);
        self
    }

    /// Drop the first handler registered for `hook`.
    fn off(&mut self, hook: Self::Hook) -> &mut Self {
        self.registry().off(hook.name());
        self
    }
}
