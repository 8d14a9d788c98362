//! Mock implementations of port traits
//!
//! In-memory discussion sources that count how often they are fetched.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::entities::{Discussion, DiscussionList};
use crate::domain::ports::DiscussionSource;
use crate::error::SourceError;

// ============================================================================
// Static Discussion Source
// ============================================================================

/// Always returns the same collection
#[derive(Default)]
pub struct StaticDiscussionSource {
    discussions: Vec<Discussion>,
    fetches: AtomicUsize,
}

impl StaticDiscussionSource {
    pub fn new(discussions: Vec<Discussion>) -> Self {
        Self {
            discussions,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscussionSource for StaticDiscussionSource {
    async fn fetch_discussions(&self) -> Result<DiscussionList, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(DiscussionList {
            discussions: self.discussions.clone(),
        })
    }
}

// ============================================================================
// Failing Discussion Source
// ============================================================================

/// Simulates an unreachable upstream
#[derive(Default)]
pub struct FailingDiscussionSource {
    fetches: AtomicUsize,
}

impl FailingDiscussionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscussionSource for FailingDiscussionSource {
    async fn fetch_discussions(&self) -> Result<DiscussionList, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Err(SourceError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}
