use serde::{Deserialize, Serialize};

/// A purchasable product record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    /// Document id. Unique and stable within a collection.
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: None,
            description: None,
        }
    }

    /// Price formatted for display, e.g. `$1.50`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}
