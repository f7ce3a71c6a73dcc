//! Album endpoints
//!
//! GET /albums, GET /albums/{id}, POST /albums. Each handler issues one
//! repository call and writes a pretty-printed JSON body.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::db::repos::AlbumRepo;
use crate::http::error::ApiError;
use crate::http::extract::JsonBody;
use crate::http::respond::Pretty;
use crate::http::server::AppState;
use crate::models::{Album, NewAlbum};

/// GET /albums - list every album
async fn list_albums(
    State(state): State<Arc<AppState>>,
) -> Result<Pretty<Vec<Album>>, ApiError> {
    let albums = AlbumRepo::new(&state.pool).list().await?;
    Ok(Pretty(albums))
}

/// GET /albums/{id} - fetch a single album
async fn get_album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Pretty<Album>, ApiError> {
    let album = AlbumRepo::new(&state.pool).get(&id).await?;
    Ok(Pretty(album))
}

/// POST /albums - create an album with a server-assigned id
async fn create_album(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NewAlbum>,
) -> Result<(StatusCode, Pretty<Album>), ApiError> {
    let album = AlbumRepo::new(&state.pool).create(&body).await?;
    Ok((StatusCode::CREATED, Pretty(album)))
}

/// Album routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/{id}", get(get_album))
}
