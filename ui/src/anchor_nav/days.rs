//! Static link definitions for the sticky event nav.

use serde::{Deserialize, Serialize};

/// One day of the event; `id` is also the id of the section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavDay {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub is_current_day: bool,
}

impl NavDay {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A fixed anchor shown after the days (build stage, meetups, ticket).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorLink {
    pub href: String,
    pub label: String,
    /// Hidden below the small breakpoint.
    #[serde(default)]
    pub wide_only: bool,
    /// Pushed to the right-hand group of the bar.
    #[serde(default)]
    pub align_end: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_href_points_at_section() {
        let day = NavDay {
            id: "day-3".into(),
            label: "Wed".into(),
            is_current_day: true,
        };
        assert_eq!(day.href(), "#day-3");
    }
}
