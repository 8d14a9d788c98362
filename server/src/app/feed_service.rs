//! Feed service
//!
//! One render cycle: fetch the discussion collection once, then transform it
//! into cards for the requesting viewport. Nothing is carried between cycles.

use std::sync::Arc;

use reqwest::Url;
use serde::Serialize;

use crate::domain::entities::{Discussion, ResponsiveLimit, TagIcon, Viewport};
use crate::domain::ports::DiscussionSource;

/// Shown when the upstream returned no discussions
pub const EMPTY_MESSAGE: &str = "No discussions found.";

/// Shown when the fetch failed for any reason
pub const ERROR_MESSAGE: &str = "Failed to load discussions. Please try again later.";

/// What the container displays after a render cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FeedView {
    Cards {
        cards: Vec<FeedCard>,
        /// Discussions received before the viewport cap
        total: usize,
    },
    Empty {
        message: &'static str,
    },
    Error {
        message: &'static str,
    },
}

/// A discussion ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedCard {
    pub title: String,
    pub content: String,
    pub tags: Vec<FeedTag>,
    pub message_count: i64,
    pub reaction_count: i64,
    pub time_ago: String,
    /// Activation target; `None` leaves the card inert
    pub link: Option<String>,
}

/// A visible tag and its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedTag {
    pub label: String,
    pub icon: TagIcon,
}

impl FeedCard {
    pub fn from_discussion(discussion: &Discussion) -> Self {
        Self {
            title: discussion.title.clone(),
            content: discussion.content.clone(),
            tags: discussion
                .visible_tags()
                .map(|label| FeedTag {
                    label: label.to_string(),
                    icon: TagIcon::for_tag(label),
                })
                .collect(),
            message_count: discussion.message_count,
            reaction_count: discussion.reaction_count,
            time_ago: discussion.time_ago.clone(),
            link: activation_link(discussion.discord_url.as_deref()),
        }
    }
}

/// Only absolute http(s) URLs may open from a card
fn activation_link(url: Option<&str>) -> Option<String> {
    let parsed = Url::parse(url?.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.to_string())
}

/// Build the view for one viewport from a fetched collection
pub fn build_view(
    discussions: &[Discussion],
    viewport: Viewport,
    limit: ResponsiveLimit,
) -> FeedView {
    if discussions.is_empty() {
        return FeedView::Empty {
            message: EMPTY_MESSAGE,
        };
    }

    let shown = limit.visible_count(viewport, discussions.len());
    let cards = discussions[..shown]
        .iter()
        .map(FeedCard::from_discussion)
        .collect();

    FeedView::Cards {
        cards,
        total: discussions.len(),
    }
}

/// Service running render cycles against a discussion source
pub struct FeedService {
    source: Arc<dyn DiscussionSource>,
    limit: ResponsiveLimit,
}

impl FeedService {
    pub fn new(source: Arc<dyn DiscussionSource>, limit: ResponsiveLimit) -> Self {
        Self { source, limit }
    }

    /// Fetch and transform. Failures are logged and become the error view;
    /// there is no retry and no partial rendering.
    pub async fn load(&self, viewport: Viewport) -> FeedView {
        match self.source.fetch_discussions().await {
            Ok(list) => {
                let view = build_view(&list.discussions, viewport, self.limit);
                if let FeedView::Cards { cards, total } = &view {
                    tracing::debug!(
                        shown = cards.len(),
                        total,
                        narrow = self.limit.is_narrow(viewport),
                        "Rendered discussions"
                    );
                }
                view
            }
            Err(e) => {
                tracing::error!("Error fetching discussions: {}", e);
                FeedView::Error {
                    message: ERROR_MESSAGE,
                }
            }
        }
    }
}
