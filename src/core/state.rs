//! # Application State
//!
//! Core business state for shoplist. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Arc<dyn ItemStore>     // fetch collaborator
//! ├── session: Arc<Session>         // explicit auth context
//! ├── nav: NavigationStack          // Home / ShopList routes
//! ├── shop: ShopListScreen          // item list screen state
//! └── status_message: String        // footer text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::navigation::{NavigationStack, Route};
use crate::core::screen::ShopListScreen;
use crate::core::session::Session;
use crate::store::ItemStore;

pub struct App {
    pub store: Arc<dyn ItemStore>,
    pub session: Arc<Session>,
    pub nav: NavigationStack,
    pub shop: ShopListScreen,
    pub status_message: String,
}

impl App {
    /// Opens straight onto the shop, with Home underneath so back has somewhere to go.
    pub fn new(store: Arc<dyn ItemStore>, session: Arc<Session>) -> Self {
        Self {
            store,
            shop: ShopListScreen::new(session.clone()),
            session,
            nav: NavigationStack::new(vec![Route::Home, Route::ShopList]),
            status_message: String::new(),
        }
    }

    pub fn current_route(&self) -> Route {
        self.nav.current()
    }
}
