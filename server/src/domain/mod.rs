//! Domain layer
//!
//! Contains the feed's data model with no knowledge of HTTP or markup.
//! - `entities`: Discussion payload, tag categories and viewport rules
//! - `ports`: Trait definitions for the upstream discussion source

pub mod entities;
pub mod ports;
