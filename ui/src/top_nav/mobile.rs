use dioxus::prelude::*;

use crate::core::config::use_site_config;
use crate::core::links::{site_link, SiteLink};
use crate::i18n::use_language_refresh;
use crate::t;

use super::state::CtaSlot;
use super::view::{cta_links, Logo};

#[component]
pub fn HamburgerButton(launch_week_mode: bool, on_open: EventHandler<()>) -> Element {
    use_language_refresh();
    let class = if launch_week_mode {
        "top-nav__hamburger top-nav__hamburger--launch-week"
    } else {
        "top-nav__hamburger"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: t!("nav-open-menu"),
            onclick: move |_| on_open.call(()),
            span { class: "top-nav__hamburger-bar" }
            span { class: "top-nav__hamburger-bar" }
        }
    }
}

/// Full-screen overlay listing the primary nav. Groups with a submenu
/// expand in place; following any link closes the overlay.
#[component]
pub fn MobileMenu(
    open: bool,
    logo_variant: &'static str,
    cta: CtaSlot,
    on_close: EventHandler<()>,
) -> Element {
    use_language_refresh();
    let config = use_site_config();
    let mut expanded = use_signal(|| Option::<usize>::None);

    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "mobile-menu", role: "dialog", aria_modal: "true",
            div { class: "mobile-menu__header",
                Logo { variant: logo_variant, on_follow: on_close }
                button {
                    r#type: "button",
                    class: "mobile-menu__close",
                    aria_label: t!("nav-close-menu"),
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            ul { class: "mobile-menu__list",
                for (index, entry) in config.primary_nav.iter().cloned().enumerate() {
                    if entry.has_submenu() {
                        li { key: "{entry.title}", class: "mobile-menu__group",
                            button {
                                r#type: "button",
                                class: "mobile-menu__group-toggle",
                                aria_expanded: expanded() == Some(index),
                                onclick: move |_| {
                                    let next = if expanded() == Some(index) { None } else { Some(index) };
                                    expanded.set(next);
                                },
                                "{entry.title}"
                            }
                            if expanded() == Some(index) {
                                ul { class: "mobile-menu__sublist",
                                    for link in entry.submenu_links().iter().cloned() {
                                        li { key: "{link.url}",
                                            {site_link(SiteLink {
                                                href: &link.url,
                                                class: "mobile-menu__link",
                                                on_follow: Some(on_close),
                                                children: rsx! { "{link.label}" },
                                            })}
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        li { key: "{entry.title}",
                            {site_link(SiteLink {
                                href: entry.href(),
                                class: "mobile-menu__link",
                                on_follow: Some(on_close),
                                children: rsx! { "{entry.title}" },
                            })}
                        }
                    }
                }
            }
            div { class: "mobile-menu__actions",
                {cta_links(cta, &config, "mobile-menu__cta", Some(on_close))}
            }
        }
    }
}
