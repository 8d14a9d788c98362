use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::entities::ResponsiveLimit;

#[derive(Clone, Debug)]
pub struct Config {
    /// Upstream endpoint returning `{ "discussions": [...] }`
    pub discussions_url: String,
    pub port: u16,
    /// Viewports at or below this width get the narrow layout
    pub mobile_breakpoint_px: u32,
    /// Cards shown in the narrow layout
    pub mobile_max_cards: usize,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            discussions_url: env::var("DISCUSSIONS_URL")
                .unwrap_or_else(|_| "http://localhost:3010/api/discussions".to_string()),
            port: parse_or(env::var("PORT").ok(), 8080),
            mobile_breakpoint_px: parse_or(
                env::var("MOBILE_BREAKPOINT_PX").ok(),
                ResponsiveLimit::DEFAULT_BREAKPOINT_PX,
            ),
            mobile_max_cards: parse_or(
                env::var("MOBILE_MAX_CARDS").ok(),
                ResponsiveLimit::DEFAULT_MAX_NARROW_CARDS,
            ),
            upstream_timeout: Duration::from_secs(parse_or(
                env::var("UPSTREAM_TIMEOUT_SECS").ok(),
                10,
            )),
        }
    }

    pub fn responsive_limit(&self) -> ResponsiveLimit {
        ResponsiveLimit {
            breakpoint_px: self.mobile_breakpoint_px,
            max_narrow_cards: self.mobile_max_cards,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discussions_url: "http://localhost:3010/api/discussions".to_string(),
            port: 8080,
            mobile_breakpoint_px: ResponsiveLimit::DEFAULT_BREAKPOINT_PX,
            mobile_max_cards: ResponsiveLimit::DEFAULT_MAX_NARROW_CARDS,
            upstream_timeout: Duration::from_secs(10),
        }
    }
}

/// Parse an optional raw value, keeping the default when absent or invalid
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
