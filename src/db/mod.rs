//! Database layer - connection pool and repositories

pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping};
pub use repos::{AlbumRepo, DbError};
