//! Album entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog record.
///
/// `id` is assigned by the database (a bigserial) and rendered as a string
/// at the API boundary; clients never set it.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Create-request payload.
///
/// A client-supplied `id` (or any other unknown field) is dropped during
/// deserialization. `price` is expected non-negative but not validated.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}
