//! Tag categories
//!
//! Maps a free-form tag label to the icon shown on its badge.

use serde::Serialize;

/// Icon category of a tag badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagIcon {
    Tools,
    Research,
    News,
    Data,
    Default,
}

/// Keyword table, checked in order. The first keyword contained in the
/// label wins, so "Tools & Data" is a Tools tag.
const KEYWORDS: [(&str, TagIcon); 4] = [
    ("Tools", TagIcon::Tools),
    ("Research", TagIcon::Research),
    ("News", TagIcon::News),
    ("Data", TagIcon::Data),
];

impl TagIcon {
    /// Pick the icon for a tag label (case-sensitive substring match)
    pub fn for_tag(tag: &str) -> Self {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| tag.contains(keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or(TagIcon::Default)
    }
}

impl std::fmt::Display for TagIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagIcon::Tools => write!(f, "tools"),
            TagIcon::Research => write!(f, "research"),
            TagIcon::News => write!(f, "news"),
            TagIcon::Data => write!(f, "data"),
            TagIcon::Default => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_tag_each_keyword() {
        assert_eq!(TagIcon::for_tag("AI Tools"), TagIcon::Tools);
        assert_eq!(TagIcon::for_tag("Research Papers"), TagIcon::Research);
        assert_eq!(TagIcon::for_tag("Weekly News"), TagIcon::News);
        assert_eq!(TagIcon::for_tag("Datasets"), TagIcon::Data);
    }

    #[test]
    fn for_tag_first_keyword_wins() {
        assert_eq!(TagIcon::for_tag("Tools & Data"), TagIcon::Tools);
        assert_eq!(TagIcon::for_tag("Data News"), TagIcon::News);
        assert_eq!(TagIcon::for_tag("News about Research"), TagIcon::Research);
    }

    #[test]
    fn for_tag_falls_back_to_default() {
        assert_eq!(TagIcon::for_tag("Discussion"), TagIcon::Default);
        assert_eq!(TagIcon::for_tag(""), TagIcon::Default);
    }

    #[test]
    fn for_tag_is_case_sensitive() {
        assert_eq!(TagIcon::for_tag("tools"), TagIcon::Default);
        assert_eq!(TagIcon::for_tag("DATA"), TagIcon::Default);
    }

    #[test]
    fn display_matches_serde_name() {
        for icon in [
            TagIcon::Tools,
            TagIcon::Research,
            TagIcon::News,
            TagIcon::Data,
            TagIcon::Default,
        ] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon));
        }
    }
}
