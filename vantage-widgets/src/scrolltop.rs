//! Back-to-top button that flags the body once the page is scrolled down.

use serde::Deserialize;
use tracing::debug;

use crate::element::Element;
use crate::events::EventRegistry;
use crate::widget::{Hook, Widget};

const SCROLLTOP_ATTR: &str = "data-scrolltop";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrolltopHook {
    Shown,
    Hidden,
}

impl Hook for ScrolltopHook {
    fn name(self) -> &'static str {
        match self {
            Self::Shown => "shown",
            Self::Hidden => "hidden",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrolltopOptions {
    /// Scroll position past which the button shows.
    pub offset: u32,
    /// Scroll animation length in milliseconds.
    pub speed: u64,
}

impl Default for ScrolltopOptions {
    fn default() -> Self {
        Self {
            offset: 300,
            speed: 6000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrolltopView {
    pub element: Element,
    pub body: Element,
    pub options: ScrolltopOptions,
}

impl ScrolltopView {
    pub fn is_shown(&self) -> bool {
        self.body.has_attr(SCROLLTOP_ATTR)
    }
}

/// Where a button click asks the page to scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: u32,
    pub speed: u64,
}

#[derive(Debug)]
pub struct Scrolltop {
    view: ScrolltopView,
    events: EventRegistry<ScrolltopView>,
}

impl Scrolltop {
    pub fn new(element: Element, body: Element, options: ScrolltopOptions) -> Self {
        Self {
            view: ScrolltopView {
                element,
                body,
                options,
            },
            events: EventRegistry::new(),
        }
    }

    pub fn body(&self) -> &Element {
        &self.view.body
    }

    pub fn is_shown(&self) -> bool {
        self.view.is_shown()
    }

    /// Feed the page scroll position.
    pub fn on_scroll(&mut self, scroll_top: u32) {
        let past = scroll_top > self.view.options.offset;
        if past == self.view.is_shown() {
            return;
        }

        if past {
            self.view.body.set_attr(SCROLLTOP_ATTR, "on");
        } else {
            self.view.body.remove_attr(SCROLLTOP_ATTR);
        }
        debug!(element = self.view.element.id(), scroll_top, shown = past, "scrolltop switched");

        let hook = if past {
            ScrolltopHook::Shown
        } else {
            ScrolltopHook::Hidden
        };
        self.events.trigger(hook.name(), &self.view, &());
    }

    pub fn click(&self) -> ScrollRequest {
        ScrollRequest {
            top: 0,
            speed: self.view.options.speed,
        }
    }
}

impl Widget for Scrolltop {
    type State = ScrolltopView;
    type Args = ();
    type Hook = ScrolltopHook;

    fn registry(&mut self) -> &mut EventRegistry<ScrolltopView> {
        &mut self.events
    }
}
