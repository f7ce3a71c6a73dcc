//! Pretty-printed JSON responder
//!
//! Every body this service writes is indented JSON, so responses stay
//! readable with plain curl.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Wrapper that serializes its payload with `serde_json::to_vec_pretty`.
pub struct Pretty<T>(pub T);

impl<T: Serialize> IntoResponse for Pretty<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(buf) => (
                [(header::CONTENT_TYPE, "application/json")],
                buf,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("response serialization failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
