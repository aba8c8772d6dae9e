//! Static site configuration consumed by the navigation widgets.
//!
//! The default configuration is embedded at compile time from
//! `assets/data/site.json` and parsed once. Platform crates may provide an
//! alternative `SiteConfig` through Dioxus context; components read it with
//! [`use_site_config`].

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::anchor_nav::{AnchorLink, NavDay};
use crate::top_nav::MenuEntry;

const SITE_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/site.json"
));

/// Width (px) at which the layout switches from hamburger to inline menu.
pub const DEFAULT_DESKTOP_BREAKPOINT_PX: u32 = 1024;

/// Distance (px) below the viewport top that a section heading must pass
/// before it counts as the active section.
pub const DEFAULT_ANCHOR_OFFSET_PX: f64 = 66.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub desktop_breakpoint_px: u32,
    pub anchor_offset_px: f64,
    pub dashboard_url: String,
    pub sign_in_url: String,
    pub start_project_url: String,
    pub github_url: String,
    pub primary_nav: Vec<MenuEntry>,
    pub days: Vec<NavDay>,
    pub trailing_anchors: Vec<AnchorLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint_px: DEFAULT_DESKTOP_BREAKPOINT_PX,
            anchor_offset_px: DEFAULT_ANCHOR_OFFSET_PX,
            dashboard_url: "/dashboard/projects".into(),
            sign_in_url: "/dashboard".into(),
            start_project_url: "/dashboard".into(),
            github_url: String::new(),
            primary_nav: Vec::new(),
            days: Vec::new(),
            trailing_anchors: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The configuration shipped with the crate.
    pub fn embedded() -> &'static SiteConfig {
        &EMBEDDED
    }
}

static EMBEDDED: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!("embedded site config is invalid ({err}); using defaults");
        SiteConfig::default()
    }
});

/// Read the site config from context, falling back to the embedded one.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_else(|| SiteConfig::embedded().clone())
}
