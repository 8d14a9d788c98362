//! HTTP handlers
//!
//! Axum request handlers for the page, its script and the feed fragment.

pub mod feed;
pub mod page;

pub use feed::get_feed;
pub use page::{feed_script, index};
