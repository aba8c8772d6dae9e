use dioxus::prelude::*;

use ui::components::TopNav;
use ui::core::config::SiteConfig;
use ui::core::links::{register_link_builder, SiteLink};
use ui::core::platform;
use ui::core::session::AuthState;
use ui::core::theme::ResolvedTheme;
use ui::i18n::{self, SelectedLanguage};
use ui::views::{ContentPage, Home, LaunchWeek};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// `localStorage` key the account app writes after sign-in.
const SESSION_KEY: &str = "brightline.session";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/launch-week")]
    LaunchWeekPage {},
    #[route("/launch-week/x")]
    LaunchWeekX {},
    #[route("/ga-week")]
    GaWeek {},
    #[route("/pricing")]
    Pricing {},
    #[route("/docs")]
    Docs {},
    #[route("/blog")]
    Blog {},
    #[route("/embed/:slug")]
    Embed { slug: String },
}

fn main() {
    dioxus::launch(App);
}

/// Router-backed links for the shared widgets, so in-app navigation keeps
/// the running app instead of reloading the page.
fn router_link(link: SiteLink<'_>) -> Element {
    let SiteLink {
        href,
        class,
        on_follow,
        children,
    } = link;

    rsx! {
        Link {
            to: href.to_string(),
            class: class.to_string(),
            onclick: move |_| {
                if let Some(on_follow) = on_follow {
                    on_follow.call(());
                }
            },
            {children}
        }
    }
}

#[component]
fn App() -> Element {
    i18n::init();
    register_link_builder(router_link);

    let language = use_signal(|| SelectedLanguage(i18n::current_language()));
    use_context_provider(|| language);

    let theme = use_signal(|| {
        ResolvedTheme::resolve(
            platform::local_storage_item("theme").as_deref(),
            platform::prefers_dark_scheme(),
        )
    });
    use_context_provider(|| theme);

    let mut auth = use_signal(AuthState::default);
    use_context_provider(|| auth);
    use_context_provider(|| SiteConfig::embedded().clone());

    // Resolved after the first render so the header starts with an empty
    // call-to-action slot instead of guessing.
    use_effect(move || {
        let state = AuthState::from_cached(platform::local_storage_item(SESSION_KEY).as_deref());
        tracing::debug!(signed_in = state.session().is_some(), "session resolved");
        auth.set(state);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared chrome around every route. Embedded pages render without the header.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let hide_navbar = matches!(route, Route::Embed { .. });

    rsx! {
        TopNav { path: route.to_string(), hide_navbar: hide_navbar }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn LaunchWeekPage() -> Element {
    rsx! {
        LaunchWeek { edition: "14" }
    }
}

#[component]
fn LaunchWeekX() -> Element {
    rsx! {
        LaunchWeek { edition: "X" }
    }
}

#[component]
fn GaWeek() -> Element {
    rsx! {
        LaunchWeek { edition: "GA" }
    }
}

#[component]
fn Pricing() -> Element {
    rsx! {
        ContentPage { title: "Pricing" }
    }
}

#[component]
fn Docs() -> Element {
    rsx! {
        ContentPage { title: "Docs" }
    }
}

#[component]
fn Blog() -> Element {
    rsx! {
        ContentPage { title: "Blog" }
    }
}

#[component]
fn Embed(slug: String) -> Element {
    rsx! {
        ContentPage { title: slug }
    }
}
