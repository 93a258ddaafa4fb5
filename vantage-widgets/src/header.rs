//! Page header: nested submenus plus sticky and minimize body classes.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::element::Element;
use crate::events::EventRegistry;
use crate::widget::{Hook, Widget};

const ITEM_OPEN_CLASS: &str = "menu-item-open";
const SUBMENU_SHOWN_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderHook {
    SubmenuShow,
    SubmenuHide,
}

impl Hook for HeaderHook {
    fn name(self) -> &'static str {
        match self {
            Self::SubmenuShow => "submenuShow",
            Self::SubmenuHide => "submenuHide",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

/// Classes for the active state and for a state that has been left.
///
/// Both classes must be given together when overridden.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClassPair {
    pub on: String,
    pub off: String,
}

impl ClassPair {
    fn new(on: &str, off: &str) -> Self {
        Self {
            on: on.to_owned(),
            off: off.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StickyOffsets {
    pub desktop: u32,
    pub mobile: u32,
}

impl Default for StickyOffsets {
    fn default() -> Self {
        Self {
            desktop: 200,
            mobile: 150,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderOffset {
    pub default: u32,
    pub sticky: StickyOffsets,
}

impl Default for HeaderOffset {
    fn default() -> Self {
        Self {
            default: 200,
            sticky: StickyOffsets::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MinimizeClasses {
    pub desktop: ClassPair,
    pub mobile: ClassPair,
}

impl Default for MinimizeClasses {
    fn default() -> Self {
        Self {
            desktop: ClassPair::new("header-minimize", "header-minimize-off"),
            mobile: ClassPair::new("header-minimize-mobile", "header-minimize-mobile-off"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderOptions {
    pub offset: HeaderOffset,
    pub minimize: MinimizeClasses,
    pub sticky: ClassPair,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            offset: HeaderOffset::default(),
            minimize: MinimizeClasses::default(),
            sticky: ClassPair::new("header-sticky", "header-sticky-off"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Submenu {
    pub item: Element,
    pub submenu: Element,
    pub parent: Option<String>,
}

impl Submenu {
    pub fn is_open(&self) -> bool {
        self.item.has_class(ITEM_OPEN_CLASS)
    }
}

#[derive(Clone, Debug)]
pub struct HeaderView {
    pub element: Element,
    pub body: Element,
    pub options: HeaderOptions,
    pub submenus: BTreeMap<String, Submenu>,
}

#[derive(Debug)]
pub struct Header {
    view: HeaderView,
    events: EventRegistry<HeaderView, String>,
}

impl Header {
    pub fn new(element: Element, body: Element, options: HeaderOptions) -> Self {
        Self {
            view: HeaderView {
                element,
                body,
                options,
                submenus: BTreeMap::new(),
            },
            events: EventRegistry::new(),
        }
    }

    pub fn view(&self) -> &HeaderView {
        &self.view
    }

    pub fn body(&self) -> &Element {
        &self.view.body
    }

    pub fn submenu(&self, item: &str) -> Option<&Submenu> {
        self.view.submenus.get(item)
    }

    pub fn is_open(&self, item: &str) -> bool {
        self.submenu(item).is_some_and(Submenu::is_open)
    }

    /// Register the submenu `submenu` opened by menu item `item`.
    ///
    /// Returns false when the item is already known or `parent` is not.
    pub fn add_submenu(&mut self, item: Element, submenu: Element, parent: Option<&str>) -> bool {
        if self.view.submenus.contains_key(item.id()) {
            return false;
        }
        if parent.is_some_and(|parent| !self.view.submenus.contains_key(parent)) {
            return false;
        }

        self.view.submenus.insert(
            item.id().to_owned(),
            Submenu {
                item,
                submenu,
                parent: parent.map(ToOwned::to_owned),
            },
        );
        true
    }

    /// Open `item` after opening its ancestors, outermost first.
    pub fn open(&mut self, item: &str) {
        let mut chain = self.ancestry(item);
        chain.reverse();
        for id in chain {
            self.set_open(&id, true);
        }
    }

    /// Close `item` and then its ancestors.
    pub fn close(&mut self, item: &str) {
        for id in self.ancestry(item) {
            self.set_open(&id, false);
        }
    }

    pub fn click(&mut self, item: &str) {
        if self.is_open(item) {
            self.close(item);
        } else {
            self.open(item);
        }
    }

    pub fn enter(&mut self, item: &str) {
        self.open(item);
    }

    pub fn leave(&mut self, item: &str) {
        self.close(item);
    }

    pub fn hide_all(&mut self) {
        let open: Vec<String> = self
            .view
            .submenus
            .iter()
            .filter(|(_, submenu)| submenu.is_open())
            .map(|(id, _)| id.clone())
            .collect();

        for id in open {
            self.set_open(&id, false);
        }
    }

    /// Update the body classes for the page scroll position.
    pub fn on_scroll(&mut self, scroll_top: u32, viewport: Viewport) {
        let options = &self.view.options;
        let sticky_offset = match viewport {
            Viewport::Desktop => options.offset.sticky.desktop,
            Viewport::Mobile => options.offset.sticky.mobile,
        };
        let minimize = match viewport {
            Viewport::Desktop => &options.minimize.desktop,
            Viewport::Mobile => &options.minimize.mobile,
        };

        let body = &mut self.view.body;
        switch_classes(body, &options.sticky, scroll_top > sticky_offset);
        switch_classes(body, minimize, scroll_top > options.offset.default);
    }

    /// Ids from `item` up to its root, or empty when `item` is unknown.
    fn ancestry(&self, item: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut cursor = Some(item);
        while let Some(id) = cursor {
            let Some(submenu) = self.view.submenus.get(id) else {
                break;
            };
            chain.push(id.to_owned());
            cursor = submenu.parent.as_deref();
        }
        chain
    }

    fn set_open(&mut self, item: &str, open: bool) {
        let Some(entry) = self.view.submenus.get_mut(item) else {
            return;
        };

        let hook = if open {
            entry.item.add_class(ITEM_OPEN_CLASS);
            entry.submenu.add_class(SUBMENU_SHOWN_CLASS);
            HeaderHook::SubmenuShow
        } else {
            entry.item.remove_class(ITEM_OPEN_CLASS);
            entry.submenu.remove_class(SUBMENU_SHOWN_CLASS);
            HeaderHook::SubmenuHide
        };
        let submenu_id = entry.submenu.id().to_owned();

        debug!(item, submenu = %submenu_id, open, "header submenu");
        self.events.trigger(hook.name(), &self.view, &submenu_id);
    }
}

impl Widget for Header {
    type State = HeaderView;
    type Args = String;
    type Hook = HeaderHook;

    fn registry(&mut self) -> &mut EventRegistry<HeaderView, String> {
        &mut self.events
    }
}

/// Apply `classes.on` while active. The `off` class only appears once the
/// state has been on, so a fresh page carries neither.
fn switch_classes(body: &mut Element, classes: &ClassPair, active: bool) {
    if active {
        body.add_class(&classes.on);
        body.remove_class(&classes.off);
    } else if body.has_class(&classes.on) {
        body.remove_class(&classes.on);
        body.add_class(&classes.off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Flow;
    use std::{cell::RefCell, rc::Rc};

    fn header() -> Header {
        let mut header = Header::new(
            Element::new("kt_header"),
            Element::new("body"),
            HeaderOptions::default(),
        );
        assert!(header.add_submenu(Element::new("reports"), Element::new("reports_sub"), None));
        assert!(header.add_submenu(
            Element::new("exports"),
            Element::new("exports_sub"),
            Some("reports")
        ));
        header
    }

    fn journal(header: &mut Header) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for hook in [HeaderHook::SubmenuShow, HeaderHook::SubmenuHide] {
            let log = Rc::clone(&log);
            header.on(hook, move |_: &HeaderView, submenu: &String| {
                log.borrow_mut().push(format!("{}:{submenu}", hook.name()));
                Flow::Continue
            });
        }
        log
    }

    #[test]
    fn options_override_field_by_field() {
        let options: HeaderOptions = serde_json::from_value(serde_json::json!({
            "offset": { "sticky": { "mobile": 90 } },
            "minimize": { "desktop": { "on": "compact", "off": "expanded" } }
        }))
        .expect("options");

        assert_eq!(options.offset.default, 200);
        assert_eq!(options.offset.sticky.desktop, 200);
        assert_eq!(options.offset.sticky.mobile, 90);
        assert_eq!(options.minimize.desktop.on, "compact");
        assert_eq!(options.minimize.desktop.off, "expanded");
        assert_eq!(options.minimize.mobile.on, "header-minimize-mobile");
        assert_eq!(options.sticky.off, "header-sticky-off");
    }

    #[test]
    fn rejects_unknown_parent_and_duplicates() {
        let mut header = header();
        assert!(!header.add_submenu(Element::new("orphan"), Element::new("orphan_sub"), Some("missing")));
        assert!(!header.add_submenu(Element::new("reports"), Element::new("again"), None));
    }

    #[test]
    fn open_opens_ancestors_first() {
        let mut header = header();
        let log = journal(&mut header);

        header.open("exports");
        assert!(header.is_open("reports"));
        assert!(header.is_open("exports"));
        assert!(header.submenu("exports").expect("exports").submenu.has_class("show"));

        // the first submenuShow handler answers every trigger
        assert_eq!(
            *log.borrow(),
            vec!["submenuShow:reports_sub", "submenuShow:exports_sub"]
        );
    }

    #[test]
    fn click_closes_open_item_and_its_parent() {
        let mut header = header();
        let log = journal(&mut header);

        header.click("exports");
        header.click("exports");

        assert!(!header.is_open("exports"));
        assert!(!header.is_open("reports"));
        assert_eq!(
            log.borrow()[2..],
            ["submenuHide:exports_sub", "submenuHide:reports_sub"]
        );
    }

    #[test]
    fn hide_all_closes_everything() {
        let mut header = header();
        header.enter("exports");
        header.hide_all();
        assert!(!header.is_open("reports"));
        assert!(!header.is_open("exports"));

        header.leave("missing");
        assert!(header.body().classes().next().is_none());
    }

    #[test]
    fn scroll_switches_body_classes() {
        let mut header = header();

        header.on_scroll(100, Viewport::Desktop);
        assert!(header.body().classes().next().is_none());

        header.on_scroll(250, Viewport::Desktop);
        assert!(header.body().has_classes("header-sticky header-minimize"));

        header.on_scroll(120, Viewport::Desktop);
        assert!(header.body().has_classes("header-sticky-off header-minimize-off"));
        assert!(!header.body().has_class("header-sticky"));

        header.on_scroll(160, Viewport::Mobile);
        assert!(header.body().has_class("header-sticky"));
        assert!(!header.body().has_class("header-minimize-mobile"));
    }
}
