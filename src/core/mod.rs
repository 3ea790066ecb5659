//! # Core Application Logic
//!
//! This module contains shoplist's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   store    │
//!          │  Adapter   │                │ (Firestore)│
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`screen`]: The shop list screen and its render branches
//! - [`navigation`]: The route stack behind the back control
//! - [`session`]: The explicit authentication context
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod navigation;
pub mod screen;
pub mod session;
pub mod state;
