//! Primary navigation tree.

use serde::{Deserialize, Serialize};

/// One top-level item. Items with a submenu render a trigger plus popover
/// on desktop and an expandable group on mobile; the rest render a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<SubmenuLink>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmenuLink {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MenuEntry {
    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }

    /// Where a plain entry points. Entries without a url fall back to `#`.
    pub fn href(&self) -> &str {
        self.url.as_deref().unwrap_or("#")
    }

    pub fn submenu_links(&self) -> &[SubmenuLink] {
        self.submenu.as_deref().unwrap_or(&[])
    }
}
