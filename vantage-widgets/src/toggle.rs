//! Two-state switch that mirrors its state onto a target element.

use serde::Deserialize;
use tracing::debug;

use crate::element::Element;
use crate::events::EventRegistry;
use crate::widget::{Hook, Widget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleHook {
    BeforeToggle,
    AfterToggle,
    BeforeOn,
    AfterOn,
    BeforeOff,
    AfterOff,
    Toggle,
}

impl Hook for ToggleHook {
    fn name(self) -> &'static str {
        match self {
            Self::BeforeToggle => "beforeToggle",
            Self::AfterToggle => "afterToggle",
            Self::BeforeOn => "beforeOn",
            Self::AfterOn => "afterOn",
            Self::BeforeOff => "beforeOff",
            Self::AfterOff => "afterOff",
            Self::Toggle => "toggle",
        }
    }
}

/// How the target records the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleMode {
    /// `targetState` is a class list on the target.
    #[default]
    Class,
    /// `targetState` names a `data-*` attribute set to `on`.
    Attribute,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleOptions {
    pub target_toggle_mode: ToggleMode,
    pub target_state: String,
    /// Class added to the toggler itself while on.
    pub toggle_state: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleState {
    On,
    #[default]
    Off,
}

impl ToggleState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ToggleView {
    pub element: Element,
    pub target: Element,
    pub options: ToggleOptions,
    pub state: ToggleState,
}

#[derive(Debug)]
pub struct Toggle {
    view: ToggleView,
    events: EventRegistry<ToggleView>,
}

impl Toggle {
    pub fn new(element: Element, target: Element, options: ToggleOptions) -> Self {
        let state = match options.target_toggle_mode {
            ToggleMode::Class if target.has_classes(&options.target_state) => ToggleState::On,
            ToggleMode::Attribute
                if target.attr(&data_attr(&options.target_state)) == Some("on") =>
            {
                ToggleState::On
            }
            _ => ToggleState::Off,
        };

        Self {
            view: ToggleView {
                element,
                target,
                options,
                state,
            },
            events: EventRegistry::new(),
        }
    }

    pub fn state(&self) -> ToggleState {
        self.view.state
    }

    pub fn element(&self) -> &Element {
        &self.view.element
    }

    pub fn target(&self) -> &Element {
        &self.view.target
    }

    pub fn toggle(&mut self) -> &mut Self {
        self.trigger(ToggleHook::BeforeToggle);
        match self.view.state {
            ToggleState::Off => self.toggle_on(),
            ToggleState::On => self.toggle_off(),
        };
        self.trigger(ToggleHook::AfterToggle);
        self
    }

    pub fn toggle_on(&mut self) -> &mut Self {
        self.trigger(ToggleHook::BeforeOn);

        let view = &mut self.view;
        match view.options.target_toggle_mode {
            ToggleMode::Class => view.target.add_class(&view.options.target_state),
            ToggleMode::Attribute => view
                .target
                .set_attr(data_attr(&view.options.target_state), "on"),
        }
        if let Some(class) = &view.options.toggle_state {
            view.element.add_class(class);
        }
        view.state = ToggleState::On;

        self.trigger(ToggleHook::AfterOn);
        self.trigger(ToggleHook::Toggle);
        debug!(toggle = self.view.element.id(), "toggle on");
        self
    }

    pub fn toggle_off(&mut self) -> &mut Self {
        self.trigger(ToggleHook::BeforeOff);

        let view = &mut self.view;
        match view.options.target_toggle_mode {
            ToggleMode::Class => view.target.remove_class(&view.options.target_state),
            ToggleMode::Attribute => view
                .target
                .remove_attr(&data_attr(&view.options.target_state)),
        }
        if let Some(class) = &view.options.toggle_state {
            view.element.remove_class(class);
        }
        view.state = ToggleState::Off;

        self.trigger(ToggleHook::AfterOff);
        self.trigger(ToggleHook::Toggle);
        debug!(toggle = self.view.element.id(), "toggle off");
        self
    }

    fn trigger(&mut self, hook: ToggleHook) {
        self.events.trigger(hook.name(), &self.view, &());
    }
}

impl Widget for Toggle {
    type State = ToggleView;
    type Args = ();
    type Hook = ToggleHook;

    fn registry(&mut self) -> &mut EventRegistry<ToggleView> {
        &mut self.events
    }
}

fn data_attr(state: &str) -> String {
    format!("data-{state}")
}
