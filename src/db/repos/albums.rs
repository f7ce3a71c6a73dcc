//! Album repository
//!
//! One parameterized statement per operation. The `album` table is owned
//! by database administration, not this service:
//!
//! ```sql
//! CREATE TABLE album (
//!     id     BIGSERIAL PRIMARY KEY,
//!     title  TEXT NOT NULL,
//!     artist TEXT NOT NULL,
//!     price  DOUBLE PRECISION NOT NULL
//! );
//! ```

use sqlx::PgPool;

use crate::models::{Album, NewAlbum};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("album '{id}' not found")]
    NotFound { id: String },
}

/// Album repository
pub struct AlbumRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AlbumRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every album in the table.
    pub async fn list(&self) -> Result<Vec<Album>, DbError> {
        let albums = sqlx::query_as::<_, Album>(
            "SELECT id::TEXT AS id, title, artist, price FROM album",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(albums)
    }

    /// Fetch a single album by id.
    ///
    /// The id column is a bigserial; comparing as text means a non-numeric
    /// path segment falls out as not-found rather than a type error.
    pub async fn get(&self, id: &str) -> Result<Album, DbError> {
        sqlx::query_as::<_, Album>(
            "SELECT id::TEXT AS id, title, artist, price FROM album WHERE id::TEXT = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound { id: id.to_owned() })
    }

    /// Insert an album and return it with the server-assigned id.
    pub async fn create(&self, album: &NewAlbum) -> Result<Album, DbError> {
        let created = sqlx::query_as::<_, Album>(
            "INSERT INTO album (title, artist, price) VALUES ($1, $2, $3) \
             RETURNING id::TEXT AS id, title, artist, price",
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::create_pool(&url).await.expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let pool = test_pool().await;
        let repo = AlbumRepo::new(&pool);

        let created = repo
            .create(&NewAlbum {
                title: "Blue Train".into(),
                artist: "John Coltrane".into(),
                price: 56.99,
            })
            .await
            .expect("insert failed");
        assert!(!created.id.is_empty());

        let fetched = repo.get(&created.id).await.expect("get failed");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_id_is_not_found() {
        let pool = test_pool().await;
        let repo = AlbumRepo::new(&pool);

        let err = repo.get("999999").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn non_numeric_id_is_not_found() {
        let pool = test_pool().await;
        let repo = AlbumRepo::new(&pool);

        let err = repo.get("not-an-id").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_grows_after_create() {
        let pool = test_pool().await;
        let repo = AlbumRepo::new(&pool);

        let before = repo.list().await.expect("list failed").len();
        repo.create(&NewAlbum {
            title: "Jeru".into(),
            artist: "Gerry Mulligan".into(),
            price: 17.99,
        })
        .await
        .expect("insert failed");
        let after = repo.list().await.expect("list failed").len();

        assert_eq!(after, before + 1);
    }
}
