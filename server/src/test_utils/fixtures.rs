//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Discussion;

/// Create a test discussion with default values
pub fn test_discussion() -> Discussion {
    test_discussion_titled("Test discussion")
}

/// Create a test discussion with a specific title
pub fn test_discussion_titled(title: &str) -> Discussion {
    Discussion {
        title: title.to_string(),
        content: "Has anyone benchmarked this yet?".to_string(),
        tags: vec!["AI Tools".to_string()],
        message_count: 1,
        reaction_count: 0,
        time_ago: "Monday, 03 March 2025 at 10:00:00".to_string(),
        discord_url: Some("https://discord.com/channels/1/2/3".to_string()),
    }
}

/// Create `count` discussions titled "Discussion 1", "Discussion 2", ...
pub fn test_discussions(count: usize) -> Vec<Discussion> {
    (1..=count)
        .map(|i| test_discussion_titled(&format!("Discussion {}", i)))
        .collect()
}
