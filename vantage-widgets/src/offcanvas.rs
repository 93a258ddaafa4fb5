//! Off-canvas side panel toggled from the page body.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::element::Element;
use crate::events::EventRegistry;
use crate::widget::{Hook, Widget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffcanvasHook {
    BeforeShow,
    AfterShow,
    BeforeHide,
    AfterHide,
    Toggle,
}

impl Hook for OffcanvasHook {
    fn name(self) -> &'static str {
        match self {
            Self::BeforeShow => "beforeShow",
            Self::AfterShow => "afterShow",
            Self::BeforeHide => "beforeHide",
            Self::AfterHide => "afterHide",
            Self::Toggle => "toggle",
        }
    }
}

/// An element that toggles the panel, optionally marked with a class while
/// the panel is shown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ToggleTarget {
    Id(String),
    Styled {
        target: String,
        #[serde(default)]
        state: Option<String>,
    },
}

impl ToggleTarget {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Styled { target, .. } => target,
        }
    }

    fn state(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Styled { state, .. } => state.as_deref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ToggleBy {
    One(ToggleTarget),
    Many(Vec<ToggleTarget>),
}

impl ToggleBy {
    pub fn targets(&self) -> &[ToggleTarget] {
        match self {
            Self::One(target) => std::slice::from_ref(target),
            Self::Many(targets) => targets,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OffcanvasOptions {
    pub base_class: String,
    /// Extra `data-offcanvas-*` flag set on the body while shown.
    pub attr_custom: String,
    pub overlay: bool,
    pub toggle_by: Option<ToggleBy>,
    pub close_by: Option<String>,
}

#[derive(Clone, Debug)]
pub struct OffcanvasView {
    pub element: Element,
    pub body: Element,
    pub options: OffcanvasOptions,
    pub togglers: BTreeMap<String, Element>,
    pub shown: bool,
    pub overlay_shown: bool,
    /// Id of the element that last triggered a click.
    pub last_trigger: Option<String>,
}

impl OffcanvasView {
    pub fn shown_class(&self) -> String {
        format!("{}-on", self.options.base_class)
    }

    pub fn overlay_class(&self) -> String {
        format!("{}-overlay", self.options.base_class)
    }
}

#[derive(Debug)]
pub struct Offcanvas {
    view: OffcanvasView,
    events: EventRegistry<OffcanvasView>,
}

impl Offcanvas {
    pub fn new(element: Element, body: Element, options: OffcanvasOptions) -> Self {
        let shown = element.has_class(&format!("{}-on", options.base_class));
        let togglers = options
            .toggle_by
            .iter()
            .flat_map(ToggleBy::targets)
            .map(|target| (target.id().to_owned(), Element::new(target.id())))
            .collect();

        Self {
            view: OffcanvasView {
                element,
                body,
                options,
                togglers,
                shown,
                overlay_shown: false,
                last_trigger: None,
            },
            events: EventRegistry::new(),
        }
    }

    pub fn view(&self) -> &OffcanvasView {
        &self.view
    }

    pub fn is_shown(&self) -> bool {
        self.view.shown
    }

    pub fn element(&self) -> &Element {
        &self.view.element
    }

    pub fn body(&self) -> &Element {
        &self.view.body
    }

    pub fn toggler(&self, id: &str) -> Option<&Element> {
        self.view.togglers.get(id)
    }

    pub fn show(&mut self) {
        if self.view.shown {
            return;
        }

        self.trigger(OffcanvasHook::BeforeShow);
        self.mark_toggler(true);
        self.update_body(true);
        self.view.overlay_shown = self.view.options.overlay;
        self.view.shown = true;
        self.trigger(OffcanvasHook::AfterShow);
        debug!(offcanvas = self.view.element.id(), "offcanvas shown");
    }

    pub fn hide(&mut self) {
        if !self.view.shown {
            return;
        }

        self.trigger(OffcanvasHook::BeforeHide);
        self.mark_toggler(false);
        self.update_body(false);
        self.view.overlay_shown = false;
        self.view.shown = false;
        self.trigger(OffcanvasHook::AfterHide);
        debug!(offcanvas = self.view.element.id(), "offcanvas hidden");
    }

    pub fn toggle(&mut self) {
        self.trigger(OffcanvasHook::Toggle);
        if self.view.shown {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Route a click on the element `id`.
    ///
    /// Toggler clicks toggle the panel and the `closeBy` element hides it.
    /// Returns whether the click was handled.
    pub fn click(&mut self, id: &str) -> bool {
        let is_toggler = self.view.togglers.contains_key(id);
        let is_close = self.view.options.close_by.as_deref() == Some(id);
        if !is_toggler && !is_close {
            return false;
        }

        self.view.last_trigger = Some(id.to_owned());
        if is_toggler {
            self.toggle();
        } else {
            self.hide();
        }
        true
    }

    pub fn click_overlay(&mut self) -> bool {
        if !self.view.overlay_shown {
            return false;
        }
        self.hide();
        true
    }

    fn update_body(&mut self, shown: bool) {
        let view = &mut self.view;
        let shown_class = view.shown_class();
        let mut flags = vec![format!("data-offcanvas-{}", view.options.base_class)];
        if !view.options.attr_custom.is_empty() {
            flags.push(format!("data-offcanvas-{}", view.options.attr_custom));
        }

        if shown {
            view.element.add_class(&shown_class);
            for flag in flags {
                view.body.set_attr(flag, "on");
            }
        } else {
            view.element.remove_class(&shown_class);
            for flag in &flags {
                view.body.remove_attr(flag);
            }
        }
    }

    /// Showing marks the toggler that was clicked; hiding clears every
    /// toggler, since the panel may close from the overlay or `closeBy`.
    fn mark_toggler(&mut self, shown: bool) {
        let view = &mut self.view;
        let targets = view.options.toggle_by.iter().flat_map(ToggleBy::targets);

        for target in targets {
            let Some(state) = target.state() else {
                continue;
            };
            let Some(toggler) = view.togglers.get_mut(target.id()) else {
                continue;
            };

            if !shown {
                toggler.remove_class(state);
            } else if view.last_trigger.as_deref() == Some(target.id()) {
                toggler.add_class(state);
            }
        }
    }

    fn trigger(&mut self, hook: OffcanvasHook) {
        self.events.trigger(hook.name(), &self.view, &());
    }
}

impl Widget for Offcanvas {
    type State = OffcanvasView;
    type Args = ();
    type Hook = OffcanvasHook;

    fn registry(&mut self) -> &mut EventRegistry<OffcanvasView> {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Flow;
    use serde_json::json;
    use std::{cell::Cell, rc::Rc};

    fn aside(options: serde_json::Value) -> Offcanvas {
        let options: OffcanvasOptions = serde_json::from_value(options).expect("options");
        Offcanvas::new(Element::new("kt_aside"), Element::new("body"), options)
    }

    #[test]
    fn toggle_by_accepts_every_shape() {
        let single: OffcanvasOptions =
            serde_json::from_value(json!({ "toggleBy": "kt_aside_mobile_toggle" })).expect("id");
        assert_eq!(single.toggle_by.expect("toggle").targets()[0].id(), "kt_aside_mobile_toggle");

        let styled: OffcanvasOptions = serde_json::from_value(json!({
            "toggleBy": { "target": "kt_header_mobile_toggle", "state": "mobile-toggle-active" }
        }))
        .expect("object");
        assert_eq!(
            styled.toggle_by.expect("toggle").targets(),
            [ToggleTarget::Styled {
                target: "kt_header_mobile_toggle".to_owned(),
                state: Some("mobile-toggle-active".to_owned())
            }]
        );

        let many: OffcanvasOptions = serde_json::from_value(json!({
            "toggleBy": ["kt_quick_user_toggle", { "target": "kt_quick_panel_toggle", "state": "active" }]
        }))
        .expect("array");
        assert_eq!(many.toggle_by.expect("toggle").targets().len(), 2);
    }

    #[test]
    fn toggle_target_state_is_optional() {
        let mut panel = aside(json!({
            "baseClass": "aside",
            "toggleBy": { "target": "kt_aside_mobile_toggle" }
        }));
        assert_eq!(
            panel.view().options.toggle_by.as_ref().expect("toggle").targets(),
            [ToggleTarget::Styled {
                target: "kt_aside_mobile_toggle".to_owned(),
                state: None
            }]
        );

        assert!(panel.click("kt_aside_mobile_toggle"));
        assert!(panel.is_shown());
        let toggler = panel.toggler("kt_aside_mobile_toggle").expect("toggler");
        assert_eq!(toggler.classes().count(), 0);

        assert!(panel.click("kt_aside_mobile_toggle"));
        assert!(!panel.is_shown());
    }

    #[test]
    fn show_and_hide_update_element_and_body() {
        let mut panel = aside(json!({ "baseClass": "aside", "attrCustom": "aside-minimize" }));

        panel.show();
        assert!(panel.is_shown());
        assert!(panel.element().has_class("aside-on"));
        assert_eq!(panel.body().attr("data-offcanvas-aside"), Some("on"));
        assert_eq!(panel.body().attr("data-offcanvas-aside-minimize"), Some("on"));

        panel.hide();
        assert!(!panel.is_shown());
        assert!(!panel.element().has_class("aside-on"));
        assert!(!panel.body().has_attr("data-offcanvas-aside"));
        assert!(!panel.body().has_attr("data-offcanvas-aside-minimize"));
    }

    #[test]
    fn repeated_show_is_ignored() {
        let shows = Rc::new(Cell::new(0));
        let mut panel = aside(json!({ "baseClass": "aside" }));
        let counter = Rc::clone(&shows);
        panel.on(OffcanvasHook::AfterShow, move |_, _| {
            counter.set(counter.get() + 1);
            Flow::Continue
        });

        panel.show();
        panel.show();
        assert_eq!(shows.get(), 1);
    }

    #[test]
    fn clicks_route_to_toggle_and_close() {
        let mut panel = aside(json!({
            "baseClass": "header-menu-wrapper",
            "overlay": true,
            "toggleBy": { "target": "kt_header_mobile_toggle", "state": "mobile-toggle-active" },
            "closeBy": "kt_header_menu_mobile_close_btn"
        }));

        assert!(!panel.click("kt_unrelated"));
        assert!(panel.click("kt_header_mobile_toggle"));
        assert!(panel.is_shown());
        assert!(panel.view().overlay_shown);
        assert!(
            panel
                .toggler("kt_header_mobile_toggle")
                .expect("toggler")
                .has_class("mobile-toggle-active")
        );

        assert!(panel.click("kt_header_menu_mobile_close_btn"));
        assert!(!panel.is_shown());
        assert!(
            !panel
                .toggler("kt_header_mobile_toggle")
                .expect("toggler")
                .has_class("mobile-toggle-active")
        );
    }

    #[test]
    fn overlay_click_hides_only_with_overlay() {
        let mut plain = aside(json!({ "baseClass": "aside", "toggleBy": "kt_aside_toggle" }));
        plain.click("kt_aside_toggle");
        assert!(!plain.click_overlay());
        assert!(plain.is_shown());

        let mut dimmed = aside(json!({ "baseClass": "aside", "overlay": true }));
        dimmed.show();
        assert!(dimmed.click_overlay());
        assert!(!dimmed.is_shown());
        assert!(!dimmed.click_overlay());
    }

    #[test]
    fn starts_shown_from_markup() {
        let options = OffcanvasOptions {
            base_class: "aside".to_owned(),
            ..OffcanvasOptions::default()
        };
        let panel = Offcanvas::new(
            Element::new("kt_aside").with_class("aside aside-on"),
            Element::new("body"),
            options,
        );
        assert!(panel.is_shown());
    }

    #[test]
    fn first_toggle_handler_responds() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut panel = aside(json!({ "baseClass": "aside" }));
        for count in [&first, &second] {
            let count = Rc::clone(count);
            panel.on(OffcanvasHook::Toggle, move |_, _| {
                count.set(count.get() + 1);
                Flow::Continue
            });
        }

        panel.toggle();
        panel.toggle();
        assert_eq!((first.get(), second.get()), (2, 0));
    }
}
