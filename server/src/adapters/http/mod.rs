//! HTTP adapter
//!
//! Fetches discussions from the upstream JSON endpoint.

pub mod client;

pub use client::HttpDiscussionSource;
