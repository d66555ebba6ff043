//! Integration tests for contact store create/read/update/delete.

mod helpers;

use contact_manager::{Contact, ContactStore, ErrorKind, StoreError, StoreEvent};
use helpers::{full_contact, open_test_store};
use sqlx::Row;
use tempfile::TempDir;

#[tokio::test]
async fn test_add_then_get_returns_same_fields() {
    let (mut store, _dir) = open_test_store().await;
    let contact = full_contact("Ann", "Lee");

    let id = store.add(&contact).await.expect("add should succeed");
    assert!(id > 0);

    let stored = store.get(id).await.expect("contact should exist");
    assert_eq!(stored.id, Some(id));
    assert_eq!(
        stored,
        Contact {
            id: Some(id),
            ..contact
        }
    );
}

#[tokio::test]
async fn test_add_ignores_preset_id() {
    let (mut store, _dir) = open_test_store().await;
    let contact = Contact {
        id: Some(999),
        ..Contact::new("Ann", "Lee")
    };
    let id = store.add(&contact).await.unwrap();
    assert_eq!(id, 1);
    assert!(matches!(store.get(999).await, Err(StoreError::NotFound(999))));
}

#[tokio::test]
async fn test_add_assigns_increasing_ids() {
    let (mut store, _dir) = open_test_store().await;
    let first = store.add(&Contact::new("Ann", "Lee")).await.unwrap();
    let second = store.add(&Contact::new("Bob", "Ng")).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_add_rejects_missing_names_regardless_of_other_fields() {
    let (mut store, _dir) = open_test_store().await;
    let invalid = [
        Contact::new("", "Lee"),
        Contact::new("Ann", ""),
        Contact::new("", ""),
        full_contact("", "Lee"),
        full_contact("Ann", ""),
    ];

    for contact in &invalid {
        let err = store.add(contact).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidContact, "{contact:?}");
    }
    assert!(store.list_all().await.unwrap().is_empty());
    assert_eq!(store.last_error(), Some("Invalid contact data"));
}

#[tokio::test]
async fn test_update_replaces_every_field() {
    let (mut store, _dir) = open_test_store().await;
    let id = store.add(&full_contact("Ann", "Lee")).await.unwrap();

    let replacement = Contact {
        id: Some(id),
        first_name: "Anna".into(),
        last_name: "Leigh".into(),
        email: "anna@example.org".into(),
        phone: String::new(),
        city: String::new(),
        country: "Belgium".into(),
    };
    store.update(&replacement).await.expect("update should succeed");

    assert_eq!(store.get(id).await.unwrap(), replacement);
}

#[tokio::test]
async fn test_update_of_unknown_id_succeeds_without_changes() {
    let (mut store, _dir) = open_test_store().await;
    let id = store.add(&full_contact("Ann", "Lee")).await.unwrap();

    let ghost = Contact {
        id: Some(id + 100),
        ..Contact::new("Ghost", "Writer")
    };
    store.update(&ghost).await.expect("no-op update reports success");

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].first_name, "Ann");
}

#[tokio::test]
async fn test_update_rejects_bad_id_or_invalid_record() {
    let (mut store, _dir) = open_test_store().await;
    let id = store.add(&full_contact("Ann", "Lee")).await.unwrap();

    let cases = [
        Contact::new("Ann", "Lee"),
        Contact {
            id: Some(0),
            ..Contact::new("Ann", "Lee")
        },
        Contact {
            id: Some(-4),
            ..Contact::new("Ann", "Lee")
        },
        Contact {
            id: Some(id),
            ..Contact::new("", "Lee")
        },
    ];
    for contact in &cases {
        let err = store.update(contact).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidContact), "{contact:?}");
    }
    assert_eq!(store.get(id).await.unwrap().first_name, "Ann");
}

#[tokio::test]
async fn test_remove_then_get_is_not_found() {
    let (mut store, _dir) = open_test_store().await;
    let id = store.add(&full_contact("Ann", "Lee")).await.unwrap();

    store.remove(id).await.expect("remove should succeed");

    let err = store.get(id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
}

#[tokio::test]
async fn test_remove_unknown_id_succeeds() {
    let (mut store, _dir) = open_test_store().await;
    assert!(store.remove(42).await.is_ok());
}

#[tokio::test]
async fn test_remove_rejects_non_positive_id() {
    let (mut store, _dir) = open_test_store().await;
    for id in [0, -1] {
        let err = store.remove(id).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(bad) if bad == id));
    }
    assert_eq!(store.last_error(), Some("Invalid contact ID: -1"));
}

#[tokio::test]
async fn test_operations_require_connection() {
    let mut store = ContactStore::new();
    let contact = Contact {
        id: Some(1),
        ..Contact::new("Ann", "Lee")
    };

    assert!(matches!(
        store.add(&contact).await,
        Err(StoreError::NotConnected)
    ));
    assert!(matches!(
        store.update(&contact).await,
        Err(StoreError::NotConnected)
    ));
    assert!(matches!(store.remove(1).await, Err(StoreError::NotConnected)));
    assert!(matches!(
        store.ensure_schema().await,
        Err(StoreError::NotConnected)
    ));
}

#[tokio::test]
async fn test_not_connected_checked_before_validation() {
    let mut store = ContactStore::new();
    assert!(matches!(
        store.add(&Contact::default()).await,
        Err(StoreError::NotConnected)
    ));
    assert!(matches!(store.remove(0).await, Err(StoreError::NotConnected)));
}

#[tokio::test]
async fn test_connect_failure_reports_connect_error() {
    let dir = TempDir::new().unwrap();
    let mut store = ContactStore::new();

    let err = store
        .connect(dir.path().join("no-such-dir").join("contacts.db"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConnectError);
    assert!(!store.is_connected());
    assert!(store
        .last_error()
        .is_some_and(|msg| msg.starts_with("Failed to connect")));
}

#[tokio::test]
async fn test_data_survives_reconnect() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.db");

    let mut store = ContactStore::new();
    store.connect(&path).await.unwrap();
    store.ensure_schema().await.unwrap();
    let id = store.add(&full_contact("Ann", "Lee")).await.unwrap();
    store.disconnect().await;
    assert!(!store.is_connected());

    store.connect(&path).await.unwrap();
    store.ensure_schema().await.expect("schema creation is idempotent");
    assert!(store.is_connected());
    assert_eq!(store.get(id).await.unwrap().full_name(), "Ann Lee");
}

#[tokio::test]
async fn test_schema_populates_created_at() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.db");

    let mut store = ContactStore::new();
    store.connect(&path).await.unwrap();
    store.ensure_schema().await.unwrap();
    let id = store.add(&Contact::new("Ann", "Lee")).await.unwrap();
    store.disconnect().await;

    let pool = sqlx::SqlitePool::connect(&format!("sqlite:{}", path.display()))
        .await
        .expect("Failed to reopen database");
    let row = sqlx::query("SELECT created_at, email FROM contacts WHERE id = ?")
        .bind(id)
        .fetch_one(&pool)
        .await
        .expect("row should exist");
    let created_at: Option<String> = row.get("created_at");
    assert!(created_at.is_some());
    assert_eq!(row.get::<Option<String>, _>("email").as_deref(), Some(""));
    pool.close().await;
}

#[tokio::test]
async fn test_events_follow_operations() {
    let dir = TempDir::new().unwrap();
    let mut store = ContactStore::new();
    let mut events = store.subscribe();

    store.connect(dir.path().join("contacts.db")).await.unwrap();
    store.ensure_schema().await.unwrap();
    let id = store.add(&Contact::new("Ann", "Lee")).await.unwrap();
    let updated = Contact {
        id: Some(id),
        ..Contact::new("Ann", "Leigh")
    };
    store.update(&updated).await.unwrap();
    store.remove(id).await.unwrap();
    let _ = store.add(&Contact::new("", "")).await;
    store.disconnect().await;

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert_eq!(
        received,
        vec![
            StoreEvent::Connected,
            StoreEvent::ContactAdded(id),
            StoreEvent::ContactUpdated(id),
            StoreEvent::ContactDeleted(id),
            StoreEvent::Error("Invalid contact data".to_string()),
            StoreEvent::Disconnected,
        ]
    );
}

#[tokio::test]
async fn test_missing_table_surfaces_storage_errors() {
    let dir = TempDir::new().unwrap();
    let mut store = ContactStore::new();
    store.connect(dir.path().join("contacts.db")).await.unwrap();
    let mut events = store.subscribe();

    let err = store.add(&Contact::new("Ann", "Lee")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StorageError);
    assert!(store
        .last_error()
        .is_some_and(|msg| msg.starts_with("Failed to add contact:")));
    assert!(matches!(
        events.try_recv().unwrap(),
        StoreEvent::Error(msg) if msg.starts_with("Failed to add contact:")
    ));

    let err = store.list_all().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StorageError);
    assert!(err.to_string().starts_with("Failed to fetch contacts:"));

    let err = store.search("ann").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StorageError);

    let err = store.get(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StorageError);
    assert!(store
        .last_error()
        .is_some_and(|msg| msg.starts_with("Failed to fetch contact:")));
}
