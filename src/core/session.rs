//! # Session
//!
//! The signed-in user's authentication context. Built once at startup from
//! the resolved config and handed explicitly to whoever needs it (the item
//! store for its bearer token, the shop screen for the header label).

use crate::core::config::ResolvedConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Display name or email of the signed-in user.
    pub user: Option<String>,
    /// Identity token sent to the store as `Authorization: Bearer`.
    pub id_token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            user: config.user.clone(),
            id_token: config.id_token.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.id_token.is_some()
    }

    /// Label for the header: the user name, or a placeholder.
    pub fn display_name(&self) -> &str {
        match (&self.user, self.is_authenticated()) {
            (Some(user), _) => user,
            (None, true) => "signed in",
            (None, false) => "guest",
        }
    }
}
