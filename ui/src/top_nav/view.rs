use dioxus::prelude::*;

use crate::core::config::{use_site_config, SiteConfig};
use crate::core::links::{site_link, SiteLink};
use crate::core::page_mode::PageMode;
use crate::core::platform;
use crate::core::session::AuthState;
use crate::core::theme::ResolvedTheme;
use crate::core::viewport::use_viewport_width;
use crate::i18n::use_language_refresh;
use crate::scroll_progress::ScrollProgress;
use crate::t;

use super::locale::LanguageSwitcher;
use super::menu::MenuEntry;
use super::mobile::{HamburgerButton, MobileMenu};
use super::state::{CtaSlot, MenuEvent, MenuState, NavFlags};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Site-wide header. `path` is the current route path as rendered by the
/// platform router; theme and session are read from context when provided.
#[component]
pub fn TopNav(path: String, #[props(default)] hide_navbar: bool) -> Element {
    use_language_refresh();
    let config = use_site_config();
    let theme = try_use_context::<Signal<ResolvedTheme>>()
        .map(|theme| theme())
        .unwrap_or_else(ResolvedTheme::light);
    let auth = try_use_context::<Signal<AuthState>>()
        .map(|auth| auth())
        .unwrap_or_default();
    let breakpoint = config.desktop_breakpoint_px;
    let width = use_viewport_width();
    let menu = use_menu(width, breakpoint);

    if hide_navbar {
        return rsx! {};
    }

    let mode = PageMode::classify(&path);
    let state = menu();
    let flags = NavFlags::derive(mode, &theme, state);
    let cta = CtaSlot::from(&auth);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: flags.wrapper_class(),
            nav {
                class: flags.nav_class(),
                onkeydown: move |evt| {
                    if evt.key().to_string() == "Escape" {
                        apply(menu, MenuEvent::CloseRequested, breakpoint);
                    }
                },
                div { class: "top-nav__inner",
                    div { class: "top-nav__start",
                        Logo { variant: flags.logo_variant() }
                        DesktopMenu { entries: config.primary_nav.clone() }
                    }
                    div { class: "top-nav__actions",
                        LanguageSwitcher {}
                        if !config.github_url.is_empty() {
                            a {
                                class: "top-nav__github",
                                href: "{config.github_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "GitHub"
                            }
                        }
                        {cta_links(cta, &config, "top-nav__cta", None)}
                    }
                    HamburgerButton {
                        launch_week_mode: flags.launch_week_mode,
                        on_open: move |_| apply(menu, MenuEvent::HamburgerPressed, breakpoint),
                    }
                }
                MobileMenu {
                    open: state.is_open(),
                    logo_variant: flags.logo_variant(),
                    cta: cta,
                    on_close: move |_| apply(menu, MenuEvent::CloseRequested, breakpoint),
                }
            }
            ScrollProgress {}
        }
    }
}

/// Mobile menu state for one header mount. Reaching desktop width closes
/// it; body scrolling is locked while it is open and unlocked on unmount.
pub(super) fn use_menu(width: Signal<u32>, breakpoint: u32) -> Signal<MenuState> {
    let menu = use_signal(MenuState::default);

    use_effect(move || {
        let width = width();
        apply(menu, MenuEvent::ViewportResized(width), breakpoint);
    });

    use_effect(move || {
        let state = menu();
        if let Err(err) = platform::set_body_overflow(state.body_overflow()) {
            tracing::warn!("body scroll lock not applied: {err}");
        }
    });

    use_drop(|| {
        if let Err(err) = platform::set_body_overflow(MenuState::Closed.body_overflow()) {
            tracing::warn!("body scroll not restored: {err}");
        }
    });

    menu
}

fn apply(mut menu: Signal<MenuState>, event: MenuEvent, breakpoint: u32) {
    let current = *menu.peek();
    let next = current.transition(event, breakpoint);
    if next != current {
        tracing::debug!(?event, from = ?current, to = ?next, "mobile menu transition");
        menu.set(next);
    }
}

#[component]
pub(super) fn Logo(variant: &'static str, on_follow: Option<EventHandler<()>>) -> Element {
    site_link(SiteLink {
        href: "/",
        class: &format!("top-nav__logo top-nav__logo--{variant}"),
        on_follow,
        children: rsx! {
            span { class: "top-nav__logo-mark", aria_hidden: "true" }
            span { class: "top-nav__logo-text", "Brightline" }
        },
    })
}

/// Horizontal menu shown at desktop widths. At most one popover is open.
#[component]
fn DesktopMenu(entries: Vec<MenuEntry>) -> Element {
    let mut open_index = use_signal(|| Option::<usize>::None);
    let close = EventHandler::new(move |_: ()| open_index.set(None));

    rsx! {
        ul { class: "top-nav__menu", onmouseleave: move |_| open_index.set(None),
            for (index, entry) in entries.into_iter().enumerate() {
                if entry.has_submenu() {
                    li { key: "{entry.title}", class: "top-nav__menu-item top-nav__menu-item--dropdown",
                        button {
                            r#type: "button",
                            class: trigger_class(open_index() == Some(index)),
                            aria_expanded: open_index() == Some(index),
                            onmouseenter: move |_| open_index.set(Some(index)),
                            onclick: move |_| {
                                let next = if open_index() == Some(index) { None } else { Some(index) };
                                open_index.set(next);
                            },
                            "{entry.title}"
                        }
                        if open_index() == Some(index) {
                            div { class: "top-nav__popover",
                                ul { class: "top-nav__popover-list",
                                    for link in entry.submenu_links().iter().cloned() {
                                        li { key: "{link.url}",
                                            {site_link(SiteLink {
                                                href: &link.url,
                                                class: "top-nav__popover-link",
                                                on_follow: Some(close),
                                                children: rsx! {
                                                    span { class: "top-nav__popover-label", "{link.label}" }
                                                    if let Some(description) = link.description.clone() {
                                                        span { class: "top-nav__popover-description", "{description}" }
                                                    }
                                                },
                                            })}
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    li {
                        key: "{entry.title}",
                        class: "top-nav__menu-item",
                        onmouseenter: move |_| open_index.set(None),
                        {site_link(SiteLink {
                            href: entry.href(),
                            class: "top-nav__link",
                            on_follow: None,
                            children: rsx! { "{entry.title}" },
                        })}
                    }
                }
            }
        }
    }
}

fn trigger_class(open: bool) -> &'static str {
    if open {
        "top-nav__trigger top-nav__trigger--open"
    } else {
        "top-nav__trigger"
    }
}

/// Call-to-action links for the resolved session. Nothing while pending.
pub(super) fn cta_links(
    slot: CtaSlot,
    config: &SiteConfig,
    class: &str,
    on_follow: Option<EventHandler<()>>,
) -> Element {
    let button = |href: &str, variant: &str, label: String| {
        site_link(SiteLink {
            href,
            class: &format!("button button--{variant} {class}"),
            on_follow,
            children: rsx! { "{label}" },
        })
    };

    match slot {
        CtaSlot::Pending => rsx! {},
        CtaSlot::Dashboard => button(&config.dashboard_url, "primary", t!("nav-dashboard")),
        CtaSlot::SignInAndStart => rsx! {
            {button(&config.sign_in_url, "default", t!("nav-sign-in"))}
            {button(&config.start_project_url, "primary", t!("nav-start-project"))}
        },
    }
}
