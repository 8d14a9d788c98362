//! Feed module
//!
//! HTML rendering of the discussion feed and the page that hosts it.
//! Markup lives in askama templates under `templates/`.

pub mod page;
pub mod renderer;

pub use page::{render_page, SCRIPT_PATH};
pub use renderer::render_feed;
