//! Page shell
//!
//! The document hosting the feed. Its container starts empty and is filled
//! by the client script with fragments from `/feed`.

use askama::Template;

/// Id of the element whose contents each render cycle replaces
pub const CONTAINER_ID: &str = "discussions-container";

/// Path the client script is served from
pub const SCRIPT_PATH: &str = "/static/feed.js";

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate {
    container_id: &'static str,
    script_path: &'static str,
}

pub fn render_page() -> askama::Result<String> {
    PageTemplate {
        container_id: CONTAINER_ID,
        script_path: SCRIPT_PATH,
    }
    .render()
}
