//! Discussion domain entity
//!
//! A single feed item as delivered by the upstream discussion endpoint.
//! Read-only: the whole set is discarded and rebuilt on every fetch.

use serde::{Deserialize, Deserializer, Serialize};

/// Tag value the upstream uses for "no category"
pub const PLACEHOLDER_TAG: &str = "None";

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A discussion card's source data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub message_count: i64,
    #[serde(default)]
    pub reaction_count: i64,
    /// Pre-formatted relative time, shown verbatim
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub time_ago: String,
    #[serde(default)]
    pub discord_url: Option<String>,
}

impl Discussion {
    /// Tags worth showing: drops empty labels and the placeholder value
    pub fn visible_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !tag.is_empty() && *tag != PLACEHOLDER_TAG)
    }
}

/// Response body of the discussion endpoint: `{ "discussions": [...] }`
///
/// A missing or null `discussions` field is the normal empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionList {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub discussions: Vec<Discussion>,
}
