//! The contact store.
//!
//! [`ContactStore`] owns at most one open database and exposes CRUD and
//! substring search over the `contacts` table. Every failure is returned to
//! the caller, recorded as the store's last error, logged, and published as
//! [`StoreEvent::Error`] to subscribers.

use std::path::Path;

use log::{debug, info, warn};
use sqlx::SqlitePool;
use tokio::sync::broadcast;

use super::pool::open_pool;
use super::queries::{
    contact_from_row, like_pattern, DELETE_CONTACT, INSERT_CONTACT, SEARCH_CONTACTS,
    SEARCH_FIELD_COUNT, SELECT_ALL_CONTACTS, SELECT_CONTACT, UPDATE_CONTACT,
};
use super::schema::create_contacts_table;
use crate::config::EVENT_CHANNEL_CAPACITY;
use crate::error_handling::StoreError;
use crate::models::Contact;

/// Notifications published by [`ContactStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Connected,
    Disconnected,
    ContactAdded(i64),
    ContactUpdated(i64),
    ContactDeleted(i64),
    /// Human-readable message of a failed operation.
    Error(String),
}

/// SQLite-backed contact storage.
///
/// Operations are expected to be driven from one control flow at a time;
/// they take `&mut self` and run on a single connection.
///
/// # Example
///
/// ```no_run
/// use contact_manager::{Contact, ContactStore};
///
/// # async fn example() -> Result<(), contact_manager::StoreError> {
/// let mut store = ContactStore::new();
/// store.connect("contacts.db").await?;
/// store.ensure_schema().await?;
///
/// let id = store.add(&Contact::new("Ann", "Lee").with_city("Paris")).await?;
/// let found = store.search("paris").await?;
/// assert_eq!(found[0].id, Some(id));
/// # Ok(())
/// # }
/// ```
pub struct ContactStore {
    pool: Option<SqlitePool>,
    last_error: Option<String>,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore {
    /// Creates a disconnected store.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            pool: None,
            last_error: None,
            events,
        }
    }

    /// Subscribes to store notifications emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Message of the most recent failed operation, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.pool.as_ref().is_some_and(|pool| !pool.is_closed())
    }

    /// Opens (creating if absent) the database file at `path`.
    ///
    /// An already open database is closed first. Existing data in the file is
    /// left untouched; call [`ensure_schema`](Self::ensure_schema) afterwards.
    pub async fn connect(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        self.disconnect().await;

        match open_pool(path).await {
            Ok(pool) => {
                self.pool = Some(pool);
                info!("Connected to SQLite database: {}", path.display());
                self.emit(StoreEvent::Connected);
                Ok(())
            }
            Err(e) => Err(self.fail(StoreError::Connect(e))),
        }
    }

    /// Closes the connection if one is open. Always succeeds.
    pub async fn disconnect(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.close().await;
            info!("Database disconnected");
            self.emit(StoreEvent::Disconnected);
        }
    }

    /// Creates the `contacts` table if it does not exist yet.
    pub async fn ensure_schema(&mut self) -> Result<(), StoreError> {
        let pool = self.connected_pool()?;
        create_contacts_table(&pool)
            .await
            .map_err(|e| self.fail(StoreError::Schema(e)))
    }

    /// Inserts `contact` and returns the id assigned to it.
    ///
    /// Any id already set on `contact` is ignored.
    pub async fn add(&mut self, contact: &Contact) -> Result<i64, StoreError> {
        let pool = self.connected_pool()?;
        if !contact.is_valid() {
            return Err(self.fail(StoreError::InvalidContact));
        }

        let result = sqlx::query(INSERT_CONTACT)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.city)
            .bind(&contact.country)
            .execute(&pool)
            .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                debug!("Contact added with ID: {id}");
                self.emit(StoreEvent::ContactAdded(id));
                Ok(id)
            }
            Err(e) => Err(self.fail(StoreError::Storage {
                action: "add contact",
                source: e,
            })),
        }
    }

    /// Overwrites every field of the row whose id matches `contact.id`.
    ///
    /// Reports success without changing anything when no such row exists.
    pub async fn update(&mut self, contact: &Contact) -> Result<(), StoreError> {
        let pool = self.connected_pool()?;
        let id = match contact.id {
            Some(id) if id > 0 && contact.is_valid() => id,
            _ => return Err(self.fail(StoreError::InvalidContact)),
        };

        let result = sqlx::query(UPDATE_CONTACT)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.city)
            .bind(&contact.country)
            .bind(id)
            .execute(&pool)
            .await;

        match result {
            Ok(done) => {
                if done.rows_affected() == 0 {
                    debug!("Update matched no contact with ID: {id}");
                } else {
                    debug!("Contact updated, ID: {id}");
                }
                self.emit(StoreEvent::ContactUpdated(id));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreError::Storage {
                action: "update contact",
                source: e,
            })),
        }
    }

    /// Deletes the row with `id`. Deleting an id that does not exist succeeds.
    pub async fn remove(&mut self, id: i64) -> Result<(), StoreError> {
        let pool = self.connected_pool()?;
        if id <= 0 {
            return Err(self.fail(StoreError::InvalidId(id)));
        }

        match sqlx::query(DELETE_CONTACT).bind(id).execute(&pool).await {
            Ok(_) => {
                debug!("Contact deleted, ID: {id}");
                self.emit(StoreEvent::ContactDeleted(id));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreError::Storage {
                action: "delete contact",
                source: e,
            })),
        }
    }

    /// Returns the contact with `id`.
    ///
    /// A disconnected store returns [`StoreError::NotFound`]; the missing
    /// connection is what gets recorded as the last error.
    pub async fn get(&mut self, id: i64) -> Result<Contact, StoreError> {
        let Some(pool) = self.pool.clone() else {
            self.fail(StoreError::NotConnected);
            return Err(StoreError::NotFound(id));
        };

        let row = sqlx::query(SELECT_CONTACT)
            .bind(id)
            .fetch_optional(&pool)
            .await
            .and_then(|row| row.map(|r| contact_from_row(&r)).transpose());

        match row {
            Ok(Some(contact)) => Ok(contact),
            Ok(None) => Err(self.fail(StoreError::NotFound(id))),
            Err(e) => Err(self.fail(StoreError::Storage {
                action: "fetch contact",
                source: e,
            })),
        }
    }

    /// Returns every contact ordered by first name, then last name.
    ///
    /// Ordering uses SQLite's default binary collation, so it is
    /// case-sensitive. A disconnected store returns an empty list and records
    /// "Database not connected" as the last error.
    pub async fn list_all(&mut self) -> Result<Vec<Contact>, StoreError> {
        let Some(pool) = self.pool.clone() else {
            self.fail(StoreError::NotConnected);
            return Ok(Vec::new());
        };

        let rows = sqlx::query(SELECT_ALL_CONTACTS).fetch_all(&pool).await;
        self.collect_rows(rows, "fetch contacts")
    }

    /// Returns contacts where any text field contains `term`, ignoring ASCII case.
    ///
    /// Case folding is SQLite `LIKE`'s: only ASCII letters are folded, so
    /// `"ålesund"` does not find "Ålesund" while `"ÅLESUND"` and `"lesund"` do.
    ///
    /// An empty `term` behaves exactly like [`list_all`](Self::list_all). A
    /// disconnected store returns an empty list and records the error.
    pub async fn search(&mut self, term: &str) -> Result<Vec<Contact>, StoreError> {
        if term.is_empty() {
            return self.list_all().await;
        }
        let Some(pool) = self.pool.clone() else {
            self.fail(StoreError::NotConnected);
            return Ok(Vec::new());
        };

        let pattern = like_pattern(term);
        let mut query = sqlx::query(SEARCH_CONTACTS);
        for _ in 0..SEARCH_FIELD_COUNT {
            query = query.bind(pattern.clone());
        }
        let rows = query.fetch_all(&pool).await;
        self.collect_rows(rows, "search contacts")
    }

    fn collect_rows(
        &mut self,
        rows: Result<Vec<sqlx::sqlite::SqliteRow>, sqlx::Error>,
        action: &'static str,
    ) -> Result<Vec<Contact>, StoreError> {
        rows.and_then(|rows| rows.iter().map(contact_from_row).collect::<Result<Vec<_>, _>>())
            .map_err(|e| self.fail(StoreError::Storage { action, source: e }))
    }

    /// Clone of the open pool, or `NotConnected` recorded as the last error.
    fn connected_pool(&mut self) -> Result<SqlitePool, StoreError> {
        match self.pool.clone() {
            Some(pool) => Ok(pool),
            None => Err(self.fail(StoreError::NotConnected)),
        }
    }

    fn fail(&mut self, err: StoreError) -> StoreError {
        let message = err.to_string();
        warn!("Contact store error: {message}");
        self.last_error = Some(message.clone());
        self.emit(StoreEvent::Error(message));
        err
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is not an error
        let _ = self.events.send(event);
    }
}
