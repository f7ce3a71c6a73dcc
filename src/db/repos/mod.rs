//! Repository implementations for database access
//!
//! Repositories borrow the pool per call; handlers construct them from
//! shared state instead of reaching for a global connection.

pub mod albums;

pub use albums::{AlbumRepo, DbError};
