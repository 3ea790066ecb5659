//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::core::session::Session;
use crate::store::{FetchError, Item, ItemStore};

/// A store that always returns the same items.
pub struct StaticStore {
    items: Vec<Item>,
}

impl StaticStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemStore for StaticStore {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_purchasable_items(&self) -> Result<Vec<Item>, FetchError> {
        Ok(self.items.clone())
    }
}

/// A store that always fails with the given error.
pub struct FailingStore {
    error: FetchError,
}

impl FailingStore {
    pub fn network(message: &str) -> Self {
        Self {
            error: FetchError::Network(message.to_string()),
        }
    }
}

#[async_trait]
impl ItemStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_purchasable_items(&self) -> Result<Vec<Item>, FetchError> {
        Err(self.error.clone())
    }
}

/// Two items in a fixed order: Apple then Bread.
pub fn apple_and_bread() -> Vec<Item> {
    vec![Item::new("1", "Apple", 0.5), Item::new("2", "Bread", 2.25)]
}

/// Creates a test App backed by an empty StaticStore.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(StaticStore::new(Vec::new())),
        Arc::new(Session::anonymous()),
    )
}
