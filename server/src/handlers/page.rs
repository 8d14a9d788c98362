//! Page handlers

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

use crate::error::AppError;
use crate::feed::render_page;

const FEED_SCRIPT: &str = include_str!("../../static/feed.js");

/// GET /
pub async fn index() -> Result<Html<String>, AppError> {
    Ok(Html(render_page()?))
}

/// GET /static/feed.js
pub async fn feed_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        FEED_SCRIPT,
    )
}
