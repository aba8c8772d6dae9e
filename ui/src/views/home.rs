use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    crate::i18n::use_language_refresh();

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { class: "page-home__tagline", {crate::t!("home-tagline")} }
            ul { class: "page-home__features",
                li { {crate::t!("home-feature-database")} }
                li { {crate::t!("home-feature-auth")} }
                li { {crate::t!("home-feature-edge")} }
            }
        }
    }
}
