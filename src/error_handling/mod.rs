//! Error types for the store, the fetcher and application setup.
//!
//! Every failure that can cross a component boundary is one of the enums
//! re-exported here. Each carries a stable [`ErrorKind`] so callers can branch
//! on the category without matching message text.

mod types;

// Re-export public API
pub use types::{ErrorKind, FetchError, InitializationError, StoreError};
