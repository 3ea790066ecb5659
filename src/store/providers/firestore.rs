//! Firestore store implementation using the REST `documents` endpoint.
//!
//! Firestore terminology:
//! - a "collection" holds "documents"
//! - a document's `name` is its full resource path, the id is the last segment
//! - field values are wrapped by type (`stringValue`, `integerValue`, ...)

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::session::Session;
use crate::store::{FetchError, Item, ItemStore};

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

// ============================================================================
// Firestore REST Types
// ============================================================================

/// Response body of `GET .../documents/{collection}`.
/// An empty collection comes back as `{}`.
#[derive(Deserialize, Debug)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Deserialize, Debug)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, FieldValue>,
}

/// A typed Firestore value. Only the variants an item uses are decoded;
/// others (maps, timestamps, ...) are ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct FieldValue {
    string_value: Option<String>,
    /// Firestore encodes 64-bit integers as JSON strings.
    integer_value: Option<String>,
    double_value: Option<f64>,
}

/// Error envelope returned alongside non-2xx statuses.
#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn string_field(doc: &Document, key: &str) -> Option<String> {
    doc.fields.get(key).and_then(|v| v.string_value.clone())
}

fn number_field(doc: &Document, key: &str) -> Result<Option<f64>, FetchError> {
    let Some(value) = doc.fields.get(key) else {
        return Ok(None);
    };
    if let Some(d) = value.double_value {
        return Ok(Some(d));
    }
    match value.integer_value.as_deref() {
        Some(raw) => raw.parse::<i64>().map(|i| Some(i as f64)).map_err(|e| {
            FetchError::Parse(format!("field '{key}' in {}: {e}", doc.name))
        }),
        None => Ok(None),
    }
}

/// Converts one document into an `Item`. `name` and `price` are required.
fn document_to_item(doc: &Document) -> Result<Item, FetchError> {
    let id = doc
        .name
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| FetchError::Parse(format!("document without id: '{}'", doc.name)))?;

    let name = string_field(doc, "name")
        .ok_or_else(|| FetchError::Parse(format!("document {id} has no 'name' field")))?;

    let price = number_field(doc, "price")?
        .ok_or_else(|| FetchError::Parse(format!("document {id} has no 'price' field")))?;

    Ok(Item {
        id: id.to_string(),
        name,
        price,
        image_url: string_field(doc, "imageUrl"),
        description: string_field(doc, "description"),
    })
}

/// Decodes a list response body, preserving document order.
fn parse_items(body: &str) -> Result<Vec<Item>, FetchError> {
    let response: ListDocumentsResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    response.documents.iter().map(document_to_item).collect()
}

/// Pulls `error.message` out of a Firestore error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

// ============================================================================
// Store Implementation
// ============================================================================

/// Reads purchasable items from a Firestore collection.
pub struct FirestoreStore {
    base_url: String,
    project_id: String,
    collection: String,
    api_key: Option<String>,
    session: Arc<Session>,
    client: reqwest::Client,
}

impl FirestoreStore {
    /// Creates a new Firestore store.
    ///
    /// # Arguments
    /// * `project_id` - Google Cloud project that owns the database
    /// * `collection` - Collection holding the item documents
    /// * `base_url` - Optional custom base URL (defaults to the public Firestore API)
    /// * `session` - Signed-in session; its id token is sent as a bearer token
    pub fn new(
        project_id: String,
        collection: String,
        base_url: Option<String>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            project_id,
            collection,
            api_key: None,
            session,
            client: reqwest::Client::new(),
        }
    }

    /// Web API key sent as the `key` query parameter.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Per-request timeout. Without one the request can wait forever.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => self.client = client,
            Err(e) => warn!("Failed to build HTTP client with timeout, keeping default: {e}"),
        }
        self
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, self.collection
        )
    }
}

#[async_trait]
impl ItemStore for FirestoreStore {
    fn name(&self) -> &str {
        "firestore"
    }

    async fn fetch_purchasable_items(&self) -> Result<Vec<Item>, FetchError> {
        if self.project_id.is_empty() {
            return Err(FetchError::Config(
                "no Firestore project id configured".to_string(),
            ));
        }
        if self.collection.is_empty() {
            return Err(FetchError::Config("no collection configured".to_string()));
        }

        let url = self.documents_url();
        info!("Fetching items from {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.session.id_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Firestore response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = api_error_message(&body);
            warn!("Firestore error: {} - {}", status.as_u16(), message);
            return Err(match status.as_u16() {
                401 | 403 => FetchError::Permission(message),
                code => FetchError::Api {
                    status: code,
                    message,
                },
            });
        }

        let items = parse_items(&body)?;
        info!("Fetched {} items from '{}'", items.len(), self.collection);
        Ok(items)
    }
}
