// storage/mod.rs
// Contact persistence on SQLite

pub mod pool;
mod queries;
pub mod schema;
mod store;

// Re-export commonly used items
pub use pool::open_pool;
pub use schema::create_contacts_table;
pub use store::{ContactStore, StoreEvent};
