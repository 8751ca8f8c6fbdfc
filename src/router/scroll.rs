//! Scroll restoration after a completed navigation.
//!
//! A saved position wins over an in-page anchor, which wins over resetting
//! to the top.

use serde::Serialize;

use super::routes::RouteIntent;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

/// Where the view should scroll once the transition lands.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollTarget {
    /// Return to the position saved by history navigation.
    Restore(ScrollPosition),
    /// Scroll to the element matching `selector`.
    Anchor { selector: String, smooth: bool },
    Top,
}

#[must_use]
pub fn scroll_behavior(intent: &RouteIntent) -> ScrollTarget {
    if let Some(position) = intent.saved_position {
        return ScrollTarget::Restore(position);
    }
    match &intent.hash {
        Some(hash) => ScrollTarget::Anchor { selector: hash.clone(), smooth: true },
        None => ScrollTarget::Top,
    }
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;
