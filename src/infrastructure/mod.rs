//! Infrastructure module for persistence.
//!
//! The entire persistence layer is one flat JSON file; this module
//! contains the store that reads and rewrites it.

pub mod store;

pub use store::{DEFAULT_DB_FILE, FileStore, StoreError};
