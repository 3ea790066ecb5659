//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Header`: back control, static title, signed-in user
//! - `ItemCard`: one item as a bordered card
//! - `LoadingIndicator` / `Notice`: the loading, error and empty views
//! - `HomePage`, `Footer`
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `ItemList`: scrollable card column; scroll state lives in `ItemListState`
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state:
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! Header::new(app.session.display_name()).render(frame, area);
//! ```

pub mod footer;
pub mod header;
pub mod home;
pub mod item_card;
pub mod item_list;
pub mod notice;

pub use footer::Footer;
pub use header::{HEADER_HEIGHT, Header};
pub use home::HomePage;
pub use item_list::{ItemList, ItemListState};
pub use notice::{LoadingIndicator, Notice};
