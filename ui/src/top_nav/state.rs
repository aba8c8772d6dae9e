//! Mobile menu state machine and the display flags derived from page
//! context. Pure; the component feeds events in and renders the result.

use crate::core::page_mode::PageMode;
use crate::core::session::AuthState;
use crate::core::theme::ResolvedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    HamburgerPressed,
    CloseRequested,
    /// New viewport width in CSS px.
    ViewportResized(u32),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn transition(self, event: MenuEvent, desktop_breakpoint: u32) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::HamburgerPressed) => Self::Open,
            (Self::Open, MenuEvent::CloseRequested) => Self::Closed,
            (Self::Open, MenuEvent::ViewportResized(width)) if width >= desktop_breakpoint => {
                Self::Closed
            }
            (state, _) => state,
        }
    }

    /// Value for `document.body.style.overflow`: scrolling is locked while
    /// the overlay is open.
    pub fn body_overflow(self) -> &'static str {
        match self {
            Self::Open => "hidden",
            Self::Closed => "auto",
        }
    }
}

/// Styling switches for one render of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavFlags {
    pub launch_week_mode: bool,
    pub dark_logo: bool,
    pub sticky_subnav: bool,
}

impl NavFlags {
    pub fn derive(mode: PageMode, theme: &ResolvedTheme, menu: MenuState) -> Self {
        Self {
            launch_week_mode: mode.is_launch_week_family() && !menu.is_open(),
            dark_logo: mode.is_launch_week_route() || theme.is_dark() || mode.is_home(),
            sticky_subnav: mode.has_sticky_subnav(),
        }
    }

    pub fn wrapper_class(self) -> &'static str {
        if self.sticky_subnav {
            "top-nav-wrapper top-nav-wrapper--relative"
        } else {
            "top-nav-wrapper"
        }
    }

    pub fn nav_class(self) -> &'static str {
        if self.launch_week_mode {
            "top-nav top-nav--launch-week"
        } else {
            "top-nav"
        }
    }

    pub fn logo_variant(self) -> &'static str {
        if self.dark_logo {
            "dark"
        } else {
            "light"
        }
    }
}

/// What the call-to-action slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaSlot {
    /// Session still resolving: keep the slot empty.
    Pending,
    Dashboard,
    SignInAndStart,
}

impl From<&AuthState> for CtaSlot {
    fn from(state: &AuthState) -> Self {
        match state {
            AuthState::Loading => Self::Pending,
            AuthState::SignedIn(_) => Self::Dashboard,
            AuthState::SignedOut => Self::SignInAndStart,
        }
    }
}
