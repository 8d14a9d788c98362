//! Viewport rules
//!
//! Narrow layouts show a single column, so only a couple of cards fit.

use serde::{Deserialize, Serialize};

/// Viewport width reported by the client, in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// `None` when the client did not report a width (treated as wide)
    pub width: Option<u32>,
}

impl Viewport {
    pub fn with_width(width: u32) -> Self {
        Self { width: Some(width) }
    }
}

/// Card cap applied at or below the breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveLimit {
    pub breakpoint_px: u32,
    pub max_narrow_cards: usize,
}

impl ResponsiveLimit {
    pub const DEFAULT_BREAKPOINT_PX: u32 = 550;
    pub const DEFAULT_MAX_NARROW_CARDS: usize = 2;

    pub fn is_narrow(&self, viewport: Viewport) -> bool {
        viewport
            .width
            .map(|width| width <= self.breakpoint_px)
            .unwrap_or(false)
    }

    /// How many of `total` discussions are displayed for this viewport
    pub fn visible_count(&self, viewport: Viewport, total: usize) -> usize {
        if self.is_narrow(viewport) {
            total.min(self.max_narrow_cards)
        } else {
            total
        }
    }
}

impl Default for ResponsiveLimit {
    fn default() -> Self {
        Self {
            breakpoint_px: Self::DEFAULT_BREAKPOINT_PX,
            max_narrow_cards: Self::DEFAULT_MAX_NARROW_CARDS,
        }
    }
}
