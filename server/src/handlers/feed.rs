//! Feed handlers
//!
//! One request is one render cycle.
//! Supports content negotiation: Accept: application/json for JSON, otherwise HTML.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::entities::Viewport;
use crate::error::AppError;
use crate::feed::render_feed;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub width: Option<String>,
}

impl FeedQuery {
    fn viewport(&self) -> Result<Viewport, AppError> {
        match self.width.as_deref().map(str::trim) {
            None | Some("") => Ok(Viewport::default()),
            Some(raw) => raw.parse().map(Viewport::with_width).map_err(|_| {
                AppError::BadRequest(format!(
                    "width must be a non-negative integer, got '{}'",
                    raw
                ))
            }),
        }
    }
}

/// GET /feed?width=N
///
/// Fetches discussions and returns the container's new contents.
/// Upstream failures still answer 200 with the error block.
/// - Accept: application/json → JSON view
/// - Otherwise → HTML fragment
pub async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let viewport = query.viewport()?;
    let cycle_id = Uuid::new_v4();

    let view = state
        .feed_service
        .load(viewport)
        .instrument(tracing::info_span!("render_cycle", %cycle_id, width = ?viewport.width))
        .await;

    if wants_json(&headers) {
        Ok(Json(view).into_response())
    } else {
        Ok((
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            render_feed(&view)?,
        )
            .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn query(width: Option<&str>) -> FeedQuery {
        FeedQuery {
            width: width.map(str::to_string),
        }
    }

    #[test]
    fn viewport_from_width() {
        assert_eq!(query(Some("412")).viewport().unwrap(), Viewport::with_width(412));
        assert_eq!(query(Some(" 900 ")).viewport().unwrap(), Viewport::with_width(900));
    }

    #[test]
    fn viewport_missing_width_is_unknown() {
        assert_eq!(query(None).viewport().unwrap(), Viewport::default());
        assert_eq!(query(Some("")).viewport().unwrap(), Viewport::default());
    }

    #[test]
    fn viewport_rejects_garbage() {
        for raw in ["wide", "-5", "12.5"] {
            assert!(matches!(
                query(Some(raw)).viewport(),
                Err(AppError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn wants_json_checks_accept() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        assert!(!wants_json(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain"),
        );
        assert!(wants_json(&headers));
    }
}
