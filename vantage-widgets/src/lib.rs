//! DOM-free models of the dashboard widgets and their lifecycle events.

pub mod card;
pub mod element;
pub mod events;
pub mod header;
pub mod offcanvas;
pub mod scrolltop;
pub mod toggle;
pub mod widget;

pub use card::{Card, CardHook, CardOptions};
pub use element::Element;
pub use events::{EventRegistry, Flow, NamedCallback};
pub use header::{Header, HeaderHook, HeaderOptions, Viewport};
pub use offcanvas::{Offcanvas, OffcanvasHook, OffcanvasOptions};
pub use scrolltop::{ScrollRequest, Scrolltop, ScrolltopHook, ScrolltopOptions};
pub use toggle::{Toggle, ToggleHook, ToggleOptions, ToggleState};
pub use widget::{Hook, Widget};
