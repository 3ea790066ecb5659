pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{FetchError, ItemStore};
pub use providers::FirestoreStore;
pub use types::Item;
