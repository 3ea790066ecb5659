use std::fmt;

use async_trait::async_trait;

use super::types::Item;

/// Errors that can occur while fetching the item list.
/// The screen shows every variant the same way; the split exists for the log.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Store misconfigured (missing project id, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The store rejected the credentials (HTTP 401/403).
    Permission(String),
    /// Any other non-success response.
    Api { status: u16, message: String },
    /// The response body could not be decoded into items.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Permission(msg) => write!(f, "permission denied: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "store error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of purchasable items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Short label shown in logs and the footer.
    fn name(&self) -> &str;

    /// Fetches the full list of purchasable items in store order.
    async fn fetch_purchasable_items(&self) -> Result<Vec<Item>, FetchError>;
}
