//! # Shop List Screen
//!
//! Screen-level state for the item list. One fetch per mount:
//!
//! ```text
//! on_appear() ──► Loading ──► apply_fetch(Ok)  ──► Loaded(items)
//!                         └─► apply_fetch(Err) ──► Failed(message)
//! ```
//!
//! Each mount gets a new id. A result tagged with an older id, or arriving
//! after `on_disappear()`, is dropped.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::session::Session;
use crate::store::{FetchError, Item};

pub const HEADER_TITLE: &str = "Shop";
pub const BACK_LABEL: &str = "← Back";
pub const EMPTY_MESSAGE: &str = "No shop items available";
pub const ERROR_PREFIX: &str = "Failed to load shop items";

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Loading,
    Failed(String),
    Loaded(Vec<Item>),
}

/// The single visual branch the content area shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShopView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    List(&'a [Item]),
}

pub struct ShopListScreen {
    session: Arc<Session>,
    state: ScreenState,
    mount_id: u64,
    mounted: bool,
}

impl ShopListScreen {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            state: ScreenState::Loading,
            mount_id: 0,
            mounted: false,
        }
    }

    /// Starts a new mount and returns its id. The caller runs the fetch.
    pub fn on_appear(&mut self) -> u64 {
        self.mount_id += 1;
        self.mounted = true;
        self.state = ScreenState::Loading;
        info!("Shop list mounted (mount={})", self.mount_id);
        self.mount_id
    }

    pub fn on_disappear(&mut self) {
        if self.mounted {
            info!("Shop list unmounted (mount={})", self.mount_id);
        }
        self.mounted = false;
    }

    /// Applies a fetch result. Returns false if it was discarded as stale.
    pub fn apply_fetch(&mut self, mount_id: u64, result: Result<Vec<Item>, FetchError>) -> bool {
        if !self.mounted || mount_id != self.mount_id {
            debug!(
                "Dropping fetch result for mount {} (current={}, mounted={})",
                mount_id, self.mount_id, self.mounted
            );
            return false;
        }

        self.state = match result {
            Ok(items) => {
                info!("Loaded {} shop items", items.len());
                ScreenState::Loaded(items)
            }
            Err(e) => {
                warn!("Failed to fetch shop items: {e}");
                ScreenState::Failed(format!("{ERROR_PREFIX}: {e}"))
            }
        };
        true
    }

    pub fn view(&self) -> ShopView<'_> {
        match &self.state {
            ScreenState::Loading => ShopView::Loading,
            ScreenState::Failed(message) => ShopView::Error(message),
            ScreenState::Loaded(items) if items.is_empty() => ShopView::Empty,
            ScreenState::Loaded(items) => ShopView::List(items),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.mounted && matches!(self.state, ScreenState::Loading)
    }
}
