mod days;
pub use days::{AnchorLink, NavDay};

mod engine;
pub use engine::{
    active_section, is_link_active, link_target, FrameGate, ScrollSpy, SectionOffset,
    ANCHOR_CLASS, HIGHLIGHT_CLASS,
};

mod view;
pub use view::StickyAnchorNav;
