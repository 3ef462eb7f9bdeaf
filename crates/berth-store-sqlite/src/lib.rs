//! SQLite backend for the Berth stable maps.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime.

mod map;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use map::SqliteMap;
pub use store::SqliteStore;
