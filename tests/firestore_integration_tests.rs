use std::sync::Arc;
use std::time::Duration;

use shoplist::core::action::{Action, Effect, update};
use shoplist::core::screen::ShopView;
use shoplist::core::session::Session;
use shoplist::core::state::App;
use shoplist::store::{FetchError, FirestoreStore, ItemStore};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const DOCUMENTS_PATH: &str = "/projects/demo/databases/(default)/documents/buyItems";

fn store_for(server: &MockServer, session: Session) -> FirestoreStore {
    FirestoreStore::new(
        "demo".to_string(),
        "buyItems".to_string(),
        Some(server.uri()),
        Arc::new(session),
    )
}

fn apple_and_bread_body() -> serde_json::Value {
    serde_json::json!({
        "documents": [
            {
                "name": "projects/demo/databases/(default)/documents/buyItems/1",
                "fields": {
                    "name": {"stringValue": "Apple"},
                    "price": {"doubleValue": 0.5},
                    "imageUrl": {"stringValue": "https://cdn.example.com/apple.png"}
                },
                "createTime": "2024-05-01T10:00:00.000000Z",
                "updateTime": "2024-05-01T10:00:00.000000Z"
            },
            {
                "name": "projects/demo/databases/(default)/documents/buyItems/2",
                "fields": {
                    "name": {"stringValue": "Bread"},
                    "price": {"integerValue": "3"}
                }
            }
        ]
    })
}

// ============================================================================
// FirestoreStore Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_items_in_server_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_and_bread_body()))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server, Session::anonymous());
    let items = assert_ok!(store.fetch_purchasable_items().await);

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Bread"]);
    assert_eq!(items[0].id, "1");
    assert_eq!(items[0].image_url.as_deref(), Some("https://cdn.example.com/apple.png"));
    assert_eq!(items[1].price, 3.0);
}

#[tokio::test]
async fn test_empty_collection_returns_no_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server, Session::anonymous());
    let items = assert_ok!(store.fetch_purchasable_items().await);
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_session_token_and_api_key_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .and(header("authorization", "Bearer id-token-123"))
        .and(query_param("key", "web-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = Session {
        user: Some("ada@example.com".to_string()),
        id_token: Some("id-token-123".to_string()),
    };
    let store = store_for(&mock_server, session).with_api_key(Some("web-key".to_string()));
    assert_ok!(store.fetch_purchasable_items().await);
}

#[tokio::test]
async fn test_permission_denied_maps_to_permission_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": 403,
                "message": "Missing or insufficient permissions.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server, Session::anonymous());
    let err = assert_err!(store.fetch_purchasable_items().await);
    assert_eq!(
        err,
        FetchError::Permission("Missing or insufficient permissions.".to_string())
    );
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server, Session::anonymous());
    match store.fetch_purchasable_items().await {
        Err(FetchError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server, Session::anonymous());
    let err = assert_err!(store.fetch_purchasable_items().await);
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn test_slow_server_hits_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let store = store_for(&mock_server, Session::anonymous())
        .with_timeout(Duration::from_millis(100));
    let err = assert_err!(store.fetch_purchasable_items().await);
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let store = FirestoreStore::new(
        "demo".to_string(),
        "buyItems".to_string(),
        Some("http://127.0.0.1:9".to_string()),
        Arc::new(Session::anonymous()),
    );
    let err = assert_err!(store.fetch_purchasable_items().await);
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_missing_project_is_config_error() {
    let store = FirestoreStore::new(
        String::new(),
        "buyItems".to_string(),
        None,
        Arc::new(Session::anonymous()),
    );
    let err = assert_err!(store.fetch_purchasable_items().await);
    assert!(matches!(err, FetchError::Config(_)));
}

// ============================================================================
// End-to-end: store result through the reducer
// ============================================================================

async fn run_mount(app: &mut App) {
    let Effect::FetchItems { mount } = update(app, Action::Start) else {
        panic!("expected a fetch on start");
    };
    let result = app.store.fetch_purchasable_items().await;
    update(app, Action::ItemsLoaded { mount, result });
}

#[tokio::test]
async fn test_screen_lists_fetched_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(apple_and_bread_body()))
        .mount(&mock_server)
        .await;

    let session = Arc::new(Session::anonymous());
    let store: Arc<dyn ItemStore> = Arc::new(store_for(&mock_server, Session::anonymous()));
    let mut app = App::new(store, session);
    run_mount(&mut app).await;

    match app.shop.view() {
        ShopView::List(items) => {
            assert_eq!(items[0].name, "Apple");
            assert_eq!(items[1].name, "Bread");
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[tokio::test]
async fn test_screen_contains_store_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DOCUMENTS_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let session = Arc::new(Session::anonymous());
    let store: Arc<dyn ItemStore> = Arc::new(store_for(&mock_server, Session::anonymous()));
    let mut app = App::new(store, session);
    run_mount(&mut app).await;

    match app.shop.view() {
        ShopView::Error(message) => {
            assert!(message.starts_with("Failed to load shop items"));
            assert!(message.contains("unavailable"));
        }
        other => panic!("expected error, got {other:?}"),
    }

    // Header navigation still works after a failure
    update(&mut app, Action::Back);
    assert_eq!(app.nav.len(), 1);
}
