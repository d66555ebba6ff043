//! contact_manager library: contact persistence and random contact import.
//!
//! Two independent components make up the core:
//! - [`ContactStore`]: CRUD and substring search over a `contacts` table in a
//!   local SQLite file.
//! - [`ContactFetcher`]: one GET to a random-user web API, parsed into an
//!   unsaved [`Contact`] that a caller may hand to [`ContactStore::add`].
//!
//! Both publish notifications on tokio broadcast channels and never assume a
//! particular UI event loop.
//!
//! # Example
//!
//! ```no_run
//! use contact_manager::{Config, ContactFetcher, ContactStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//!
//! let mut store = ContactStore::new();
//! store.connect(&config.db_path).await?;
//! store.ensure_schema().await?;
//!
//! let fetcher = ContactFetcher::new(&config)?;
//! let contact = fetcher.fetch_one().await?;
//! let id = store.add(&contact).await?;
//! println!("Imported {} as #{id}", contact.full_name());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod storage;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use error_handling::{ErrorKind, FetchError, InitializationError, StoreError};
pub use fetch::{parse_contact, ContactFetcher, FetchEvent};
pub use models::Contact;
pub use storage::{ContactStore, StoreEvent};
