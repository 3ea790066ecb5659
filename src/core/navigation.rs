//! # Navigation
//!
//! An ordered stack of routes. The last entry is the visible screen; an empty
//! stack shows the root (Home).

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    ShopList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<Route>,
}

impl NavigationStack {
    pub fn new(entries: Vec<Route>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, route: Route) {
        debug!("Navigate: push {:?}", route);
        self.entries.push(route);
    }

    /// Removes the top entry. Popping an empty stack is a no-op.
    pub fn pop(&mut self) -> Option<Route> {
        let popped = self.entries.pop();
        debug!("Navigate: pop {:?} (depth now {})", popped, self.entries.len());
        popped
    }

    /// The visible route. Falls back to Home when the stack is empty.
    pub fn current(&self) -> Route {
        self.entries.last().copied().unwrap_or(Route::Home)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
