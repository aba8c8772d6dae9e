//! Links to the site's own pages go through the host router so following
//! one keeps the running app (and its resolved session). Everything else
//! renders as a plain anchor.
//!
//! The host binary owns the `Route` enum, so it registers the builder:
//! ```ignore
//! fn router_link(link: SiteLink<'_>) -> Element {
//!     rsx! { Link { to: link.href.to_string(), class: link.class.to_string(), {link.children} } }
//! }
//! ui::core::links::register_link_builder(router_link);
//! ```

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// One link as the widgets want it drawn.
pub struct SiteLink<'a> {
    pub href: &'a str,
    pub class: &'a str,
    /// Called when the link is followed (closes menus and popovers).
    pub on_follow: Option<EventHandler<()>>,
    pub children: Element,
}

pub type LinkBuilder = fn(SiteLink<'_>) -> Element;

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

/// Install the router-backed builder. Only the first registration counts.
pub fn register_link_builder(builder: LinkBuilder) {
    if LINK_BUILDER.set(builder).is_err() {
        tracing::debug!("link builder already registered; keeping the first one");
    }
}

/// Same-origin absolute paths. Fragments, protocol-relative and absolute
/// URLs are left to the browser.
pub fn is_internal(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

pub fn site_link(link: SiteLink<'_>) -> Element {
    render_with(LINK_BUILDER.get().copied(), link)
}

fn render_with(builder: Option<LinkBuilder>, link: SiteLink<'_>) -> Element {
    match builder {
        Some(build) if is_internal(link.href) => build(link),
        _ => plain_anchor(link),
    }
}

fn plain_anchor(link: SiteLink<'_>) -> Element {
    let SiteLink {
        href,
        class,
        on_follow,
        children,
    } = link;

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |_| {
                if let Some(on_follow) = on_follow {
                    on_follow.call(());
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    #[test]
    fn only_same_origin_paths_are_internal() {
        assert!(is_internal("/pricing"));
        assert!(is_internal("/dashboard/projects"));
        assert!(is_internal("/"));
        assert!(!is_internal("#day-1"));
        assert!(!is_internal("//cdn.example.org/x"));
        assert!(!is_internal("https://brightline.dev/dashboard"));
        assert!(!is_internal(""));
    }

    #[test]
    fn unregistered_builder_renders_plain_anchor() {
        fn app() -> Element {
            site_link(SiteLink {
                href: "/pricing",
                class: "top-nav__link",
                on_follow: None,
                children: rsx! { "Pricing" },
            })
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"href="/pricing""#), "{html}");
        assert!(html.contains("top-nav__link"), "{html}");
        assert!(html.contains("Pricing"), "{html}");
    }

    fn marked_link(link: SiteLink<'_>) -> Element {
        rsx! {
            a { class: "{link.class}", href: "{link.href}", "data-router": "{link.href}", {link.children} }
        }
    }

    fn render_pair(first: &'static str, second: &'static str) -> String {
        #[component]
        fn Pair(first: &'static str, second: &'static str) -> Element {
            rsx! {
                for href in [first, second] {
                    {render_with(Some(marked_link), SiteLink {
                        href,
                        class: "top-nav__link",
                        on_follow: None,
                        children: rsx! { "{href}" },
                    })}
                }
            }
        }

        let props = PairProps::builder().first(first).second(second).build();
        let mut dom = VirtualDom::new_with_props(Pair, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn registered_builder_handles_in_app_paths_only() {
        let html = render_pair("/docs", "https://github.com/brightline-dev/brightline");
        assert_eq!(html.matches("data-router").count(), 1, "{html}");
        assert!(html.contains(r#"data-router="/docs""#), "{html}");

        let html = render_pair("#day-2", "//cdn.example.org/logo.svg");
        assert!(!html.contains("data-router"), "{html}");
    }
}
