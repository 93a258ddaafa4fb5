use std::sync::Arc;

use vantage_store::Store;

/// Display settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Number of page buttons the pager shows.
    pub pager_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { pager_size: 5 }
    }
}

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone, Debug)]
pub struct Context {
    pub store: Arc<Store>,
    pub settings: Arc<Settings>,
}

impl Context {
    /// Create a new application context.
    pub fn new(store: Arc<Store>, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }
}
