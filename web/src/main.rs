use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::identity::{register_identity, AuthStatus};
use ui::views::Home;

mod identity;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_brand(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__brand-link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        // Register platform link builders so the shared navbar can route
        // without knowing this crate's `Route` enum.
        register_nav(NavBuilder {
            brand: nav_brand,
            home: nav_home,
        });
        register_identity(identity::controls());
    }

    // Session status for the whole app. The identity provider flips this
    // signal once a session is established; everything below only reads it.
    let status = use_signal(AuthStatus::default);
    use_context_provider(|| status);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` which allows us to use
/// the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
