//! Domain entities
//!
//! The discussion payload as received from upstream, plus the small
//! value types the renderer derives from it.

pub mod discussion;
pub mod tag;
pub mod viewport;

pub use discussion::{Discussion, DiscussionList};
pub use tag::TagIcon;
pub use viewport::{ResponsiveLimit, Viewport};
