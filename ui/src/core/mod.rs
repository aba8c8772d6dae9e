//! Platform-agnostic building blocks shared by the navigation widgets.

pub mod config;
pub mod links;
pub mod page_mode;
pub mod platform;
pub mod session;
pub mod theme;
pub mod viewport;
