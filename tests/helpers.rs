// Shared test helpers for contact store setup and test data creation.

use contact_manager::{Contact, ContactStore};
use tempfile::TempDir;

/// Opens a store on a fresh SQLite file with the schema in place.
///
/// The returned `TempDir` owns the file; keep it alive for the whole test.
pub async fn open_test_store() -> (ContactStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let mut store = ContactStore::new();
    store
        .connect(dir.path().join("contacts.db"))
        .await
        .expect("Failed to connect test store");
    store
        .ensure_schema()
        .await
        .expect("Failed to create contacts table");
    (store, dir)
}

/// A contact with every field populated.
#[allow(dead_code)] // Not every test file uses it
pub fn full_contact(first: &str, last: &str) -> Contact {
    Contact::new(first, last)
        .with_email(format!("{}@example.com", first.to_lowercase()))
        .with_phone("555-0100")
        .with_city("Paris")
        .with_country("France")
}

/// Adds each contact and returns the assigned ids in the same order.
#[allow(dead_code)]
pub async fn add_all(store: &mut ContactStore, contacts: &[Contact]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(contacts.len());
    for contact in contacts {
        ids.push(store.add(contact).await.expect("Failed to add contact"));
    }
    ids
}
