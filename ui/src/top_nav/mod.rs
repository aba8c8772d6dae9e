mod menu;
pub use menu::{MenuEntry, SubmenuLink};

mod state;
pub use state::{CtaSlot, MenuEvent, MenuState, NavFlags};

mod locale;
pub use locale::LanguageSwitcher;

mod mobile;
pub use mobile::{HamburgerButton, MobileMenu};

mod view;
pub use view::TopNav;
