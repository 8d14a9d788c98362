//! Feed renderer
//!
//! Renders a feed view to the markup that replaces the container contents.
//! Templates are HTML-escaped, so nothing from upstream reaches the page raw.

use askama::Template;

use crate::app::{FeedCard, FeedView};
// Matched on by feed/tag_icon.html
use crate::domain::entities::TagIcon;

/// One card per discussion; the whole card is the activation target when it
/// has a link
#[derive(Template)]
#[template(path = "feed/cards.html")]
struct CardListTemplate<'a> {
    cards: &'a [FeedCard],
}

/// Empty-state and error placeholders
#[derive(Template)]
#[template(source = "<div class=\"{{ class }}\">{{ message }}</div>", ext = "html")]
struct NoticeTemplate<'a> {
    class: &'static str,
    message: &'a str,
}

/// Render the container's new contents in one pass
pub fn render_feed(view: &FeedView) -> askama::Result<String> {
    match view {
        FeedView::Cards { cards, .. } => CardListTemplate { cards }.render(),
        FeedView::Empty { message } => NoticeTemplate {
            class: "no-discussions",
            message,
        }
        .render(),
        FeedView::Error { message } => NoticeTemplate {
            class: "error-message",
            message,
        }
        .render(),
    }
}
