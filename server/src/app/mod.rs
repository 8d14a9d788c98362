//! Application layer
//!
//! Turns fetched discussions into the view a render cycle displays.

pub mod feed_service;

pub use feed_service::{FeedCard, FeedService, FeedTag, FeedView};
