//! recordshelf: HTTP API for a small album catalog backed by Postgres.
//!
//! Three operations over one table: list albums, fetch an album by id,
//! create an album with a server-assigned id. No business logic beyond
//! mapping requests to parameterized SQL and serializing results as JSON.

pub mod db;
pub mod http;
pub mod models;
