//! Shared UI crate for the Brightline marketing site: the sticky event
//! nav, the top navigation bar and the pages that host them.

pub mod anchor_nav;
pub mod core;
pub mod i18n;
pub mod scroll_progress;
pub mod top_nav;
pub mod views;

pub mod components {
    pub use crate::anchor_nav::StickyAnchorNav;
    pub use crate::scroll_progress::ScrollProgress;
    pub use crate::top_nav::TopNav;
}
