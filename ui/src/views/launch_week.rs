use dioxus::prelude::*;

use crate::anchor_nav::{link_target, StickyAnchorNav, ANCHOR_CLASS};
use crate::core::config::use_site_config;

/// Event page: one section per day plus the fixed trailing sections, each
/// headed by an anchor the sticky nav tracks.
#[component]
pub fn LaunchWeek(edition: String) -> Element {
    crate::i18n::use_language_refresh();
    let config = use_site_config();

    rsx! {
        section { class: "page page-launch-week",
            StickyAnchorNav {}
            header { class: "page-launch-week__hero",
                h1 { {crate::t!("launch-week-title", edition = edition.as_str())} }
                p { {crate::t!("launch-week-intro")} }
            }
            for day in config.days.iter().cloned() {
                article { key: "{day.id}", class: "page-launch-week__day",
                    h2 { id: "{day.id}", class: ANCHOR_CLASS, "{day.label}" }
                    if day.is_current_day {
                        p { class: "page-launch-week__live", {crate::t!("sticky-nav-live")} }
                    }
                    p { {crate::t!("launch-week-day-body")} }
                }
            }
            for anchor in config.trailing_anchors.iter().cloned() {
                article { key: "{anchor.href}", class: "page-launch-week__extra",
                    h2 { id: link_target(&anchor.href), class: ANCHOR_CLASS, "{anchor.label}" }
                }
            }
        }
    }
}
