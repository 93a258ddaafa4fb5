//! Collapsible card with header tools and a sticky header.

use serde::Deserialize;
use tracing::debug;

use crate::element::Element;
use crate::events::{EventRegistry, Flow};
use crate::widget::{Hook, Widget};

const COLLAPSE_CLASS: &str = "card-collapse";
const COLLAPSED_CLASS: &str = "card-collapsed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardHook {
    StickyOn,
    StickyOff,
    BeforeExpand,
    AfterExpand,
    BeforeCollapse,
    AfterCollapse,
    BeforeRemove,
    AfterRemove,
    Reload,
}

impl Hook for CardHook {
    fn name(self) -> &'static str {
        match self {
            Self::StickyOn => "stickyOn",
            Self::StickyOff => "stickyOff",
            Self::BeforeExpand => "beforeExpand",
            Self::AfterExpand => "afterExpand",
            Self::BeforeCollapse => "beforeCollapse",
            Self::AfterCollapse => "afterCollapse",
            Self::BeforeRemove => "beforeRemove",
            Self::AfterRemove => "afterRemove",
            Self::Reload => "reload",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardOptions {
    /// Collapse/expand animation length in milliseconds.
    pub toggle_speed: u64,
    pub sticky: StickyOptions,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            toggle_speed: 400,
            sticky: StickyOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StickyOptions {
    /// Accepted so existing option objects still parse. Scrolling back up
    /// releases the header at the same threshold whatever this is set to.
    #[serde(alias = "releseOnReverse")]
    pub release_on_reverse: bool,
    /// Scroll position at which the header sticks.
    pub offset: u32,
    pub z_index: i32,
    pub position: StickyPosition,
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self {
            release_on_reverse: false,
            offset: 300,
            z_index: 101,
            position: StickyPosition::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StickyPosition {
    pub top: i32,
    pub left: i32,
    pub right: i32,
}

/// Inline style applied to a stuck header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StickyStyle {
    pub z_index: i32,
    pub top: i32,
    pub left: i32,
    pub right: i32,
}

#[derive(Clone, Debug)]
pub struct CardState {
    pub element: Element,
    pub options: CardOptions,
    pub has_header: bool,
    pub body: String,
    pub collapsed: bool,
    pub removed: bool,
    pub sticky_enabled: bool,
    pub sticky_on: bool,
}

#[derive(Debug)]
pub struct Card {
    state: CardState,
    events: EventRegistry<CardState>,
}

impl Card {
    pub fn new(element: Element, options: CardOptions) -> Self {
        let collapsed = element.has_class(COLLAPSE_CLASS) || element.has_class(COLLAPSED_CLASS);
        Self {
            state: CardState {
                element,
                options,
                has_header: true,
                body: String::new(),
                collapsed,
                removed: false,
                sticky_enabled: false,
                sticky_on: false,
            },
            events: EventRegistry::new(),
        }
    }

    /// A card without a header; sticky tracking stays disabled.
    pub fn headless(mut self) -> Self {
        self.state.has_header = false;
        self
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn element(&self) -> &Element {
        &self.state.element
    }

    pub fn body(&self) -> &str {
        &self.state.body
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.collapsed
    }

    pub fn is_removed(&self) -> bool {
        self.state.removed
    }

    pub fn set_content(&mut self, html: &str) {
        if !html.is_empty() {
            self.state.body = html.to_owned();
        }
    }

    pub fn reload(&mut self) {
        self.trigger(CardHook::Reload);
    }

    pub fn toggle(&mut self) -> bool {
        self.change_state(self.state.collapsed)
    }

    pub fn collapse(&mut self) -> bool {
        self.change_state(false)
    }

    pub fn expand(&mut self) -> bool {
        self.change_state(true)
    }

    /// Remove the card unless a `beforeRemove` hook cancels.
    pub fn remove(&mut self) -> bool {
        if self.trigger(CardHook::BeforeRemove).is_cancel() {
            return false;
        }

        self.state.removed = true;
        self.trigger(CardHook::AfterRemove);
        true
    }

    /// Start following scroll updates. Cards without a header cannot stick.
    pub fn init_sticky(&mut self) -> bool {
        self.state.sticky_enabled = self.state.has_header;
        self.state.sticky_enabled
    }

    pub fn destroy_sticky(&mut self) {
        self.state.sticky_enabled = false;
        self.state.sticky_on = false;
    }

    /// Feed the page scroll position.
    ///
    /// The header sticks once the scroll reaches the offset and releases when
    /// one and a half times the scroll drops to the offset or below.
    pub fn on_scroll(&mut self, scroll_top: u32) {
        if !self.state.sticky_enabled {
            return;
        }

        let offset = u64::from(self.state.options.sticky.offset);
        let scroll_top = u64::from(scroll_top);

        if scroll_top >= offset && !self.state.sticky_on {
            self.trigger(CardHook::StickyOn);
            self.state.sticky_on = true;
        } else if scroll_top * 3 <= offset * 2 && self.state.sticky_on {
            self.trigger(CardHook::StickyOff);
            self.state.sticky_on = false;
        }
    }

    pub fn sticky_style(&self) -> Option<StickyStyle> {
        if !self.state.has_header || !self.state.sticky_on {
            return None;
        }

        let sticky = &self.state.options.sticky;
        Some(StickyStyle {
            z_index: sticky.z_index,
            top: sticky.position.top,
            left: sticky.position.left,
            right: sticky.position.right,
        })
    }

    fn change_state(&mut self, collapsed: bool) -> bool {
        if collapsed {
            if self.trigger(CardHook::BeforeExpand).is_cancel() {
                return false;
            }
            self.state.element.remove_class(COLLAPSE_CLASS);
            self.state.element.remove_class(COLLAPSED_CLASS);
            self.state.collapsed = false;
            self.trigger(CardHook::AfterExpand);
        } else {
            if self.trigger(CardHook::BeforeCollapse).is_cancel() {
                return false;
            }
            self.state.element.add_class(COLLAPSE_CLASS);
            self.state.collapsed = true;
            self.trigger(CardHook::AfterCollapse);
        }

        debug!(card = self.state.element.id(), collapsed = self.state.collapsed, "card toggled");
        true
    }

    fn trigger(&mut self, hook: CardHook) -> Flow {
        self.events
            .trigger(hook.name(), &self.state, &())
            .unwrap_or_default()
    }
}

impl Widget for Card {
    type State = CardState;
    type Args = ();
    type Hook = CardHook;

    fn registry(&mut self) -> &mut EventRegistry<CardState> {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn card() -> Card {
        Card::new(Element::new("kt_card"), CardOptions::default())
    }

    fn journal() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn record(log: &Rc<RefCell<Vec<&'static str>>>, entry: &'static str) -> impl FnMut(&CardState, &()) -> Flow + 'static {
        let log = Rc::clone(log);
        move |_: &CardState, _: &()| {
            log.borrow_mut().push(entry);
            Flow::Continue
        }
    }

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let options: CardOptions = serde_json::from_value(serde_json::json!({
            "sticky": { "offset": 120, "position": { "top": 65 } }
        }))
        .expect("options");

        assert_eq!(options.toggle_speed, 400);
        assert_eq!(options.sticky.offset, 120);
        assert_eq!(options.sticky.z_index, 101);
        assert_eq!(options.sticky.position.top, 65);
        assert_eq!(options.sticky.position.left, 0);
    }

    #[test]
    fn toggle_runs_collapse_then_expand_hooks() {
        let log = journal();
        let mut card = card();
        card.on(CardHook::BeforeCollapse, record(&log, "beforeCollapse"))
            .on(CardHook::AfterCollapse, record(&log, "afterCollapse"))
            .on(CardHook::BeforeExpand, record(&log, "beforeExpand"))
            .on(CardHook::AfterExpand, record(&log, "afterExpand"));

        assert!(card.toggle());
        assert!(card.is_collapsed());
        assert!(card.element().has_class("card-collapse"));

        assert!(card.toggle());
        assert!(!card.is_collapsed());
        assert!(!card.element().has_class("card-collapse"));

        assert_eq!(
            *log.borrow(),
            vec!["beforeCollapse", "afterCollapse", "beforeExpand", "afterExpand"]
        );
    }

    #[test]
    fn before_hook_can_cancel() {
        let mut card = card();
        card.one(CardHook::BeforeCollapse, |_, _| Flow::Cancel);

        assert!(!card.collapse());
        assert!(!card.is_collapsed());

        assert!(card.collapse());
        assert!(card.is_collapsed());
    }

    #[test]
    fn collapsed_markup_starts_collapsed() {
        let mut card = Card::new(
            Element::new("kt_card").with_class("card card-collapsed"),
            CardOptions::default(),
        );
        assert!(card.is_collapsed());

        assert!(card.toggle());
        assert!(!card.element().has_class("card-collapsed"));
    }

    #[test]
    fn remove_respects_cancel() {
        let log = journal();
        let mut card = card();
        card.on(CardHook::BeforeRemove, |state, _| {
            if state.body.is_empty() {
                Flow::Cancel
            } else {
                Flow::Continue
            }
        })
        .on(CardHook::AfterRemove, record(&log, "afterRemove"));

        assert!(!card.remove());
        card.set_content("");
        assert!(!card.remove());

        card.set_content("<p>camera offline</p>");
        assert!(card.remove());
        assert!(card.is_removed());
        assert_eq!(*log.borrow(), vec!["afterRemove"]);
    }

    #[test]
    fn sticky_header_follows_scroll() {
        let log = journal();
        let mut card = card();
        card.on(CardHook::StickyOn, record(&log, "stickyOn"))
            .on(CardHook::StickyOff, record(&log, "stickyOff"));

        card.on_scroll(500);
        assert!(card.sticky_style().is_none());

        assert!(card.init_sticky());
        card.on_scroll(299);
        assert!(card.sticky_style().is_none());

        card.on_scroll(300);
        assert_eq!(
            card.sticky_style(),
            Some(StickyStyle {
                z_index: 101,
                top: 0,
                left: 0,
                right: 0
            })
        );

        card.on_scroll(250);
        assert!(card.sticky_style().is_some());

        card.on_scroll(200);
        assert!(card.sticky_style().is_none());
        assert_eq!(*log.borrow(), vec!["stickyOn", "stickyOff"]);
    }

    #[test]
    fn release_on_reverse_keeps_the_usual_thresholds() {
        let options: CardOptions = serde_json::from_value(serde_json::json!({
            "sticky": { "releseOnReverse": true, "offset": 90 }
        }))
        .expect("options");
        assert!(options.sticky.release_on_reverse);

        let mut card = Card::new(Element::new("kt_card"), options);
        assert!(card.init_sticky());
        card.on_scroll(120);
        card.on_scroll(100);
        assert!(card.sticky_style().is_some());

        card.on_scroll(60);
        assert!(card.sticky_style().is_none());
    }

    #[test]
    fn headless_cards_never_stick() {
        let mut card = card().headless();
        assert!(!card.init_sticky());
        card.on_scroll(1_000);
        assert!(card.sticky_style().is_none());
    }

    #[test]
    fn reload_fires_reload_hook() {
        let log = journal();
        let mut card = card();
        card.on(CardHook::Reload, record(&log, "reload"));
        card.reload();
        card.off(CardHook::Reload);
        card.reload();
        assert_eq!(*log.borrow(), vec!["reload"]);
    }
}
