//! Discussion source port trait
//!
//! Where a render cycle gets its discussions from.

use async_trait::async_trait;

use crate::domain::entities::DiscussionList;
use crate::error::SourceError;

#[async_trait]
pub trait DiscussionSource: Send + Sync {
    /// Fetch the current discussion collection. One call is one upstream request.
    async fn fetch_discussions(&self) -> Result<DiscussionList, SourceError>;
}
