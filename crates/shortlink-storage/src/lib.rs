//! URL store implementations.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryUrlStore;
pub use mysql::MySqlUrlStore;
pub use shortlink_core::repository::Result;
pub use shortlink_core::{ReadUrlStore, StorageError, UrlRecord, UrlStore};
