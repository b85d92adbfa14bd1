use crate::identity::{SignInButton, SignUpButton, SignedIn, SignedOut, UserButton};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, shared by every platform that mounts the bar.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms can (optionally) register a `NavBuilder` providing fully
/// constructed `Link` elements, so `ui` does not need to know each platform's
/// `Route` enum. Each function receives the visible label and returns a link
/// that already contains that label as its child.
///
/// If no builder is registered, the navbar falls back to plain root-path
/// anchors, which keeps the component renderable (and testable) without a
/// router in scope.
pub struct NavBuilder {
    pub brand: fn(label: &str) -> Element,
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the platform's link builders. First registration wins.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

fn brand_link() -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.brand)("Your Brand"),
        None => rsx! {
            a { class: "navbar__brand-link", href: "/", "Your Brand" }
        },
    }
}

fn home_link() -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)("Home"),
        None => rsx! {
            a { class: "navbar__link", href: "/", "Home" }
        },
    }
}

/// Top navigation bar: brand on the left, page links in the center, auth
/// controls and the mobile toggle on the right.
///
/// Rendering is a pure function of the platform's `AuthStatus` signal — the
/// component keeps no state of its own between renders.
#[component]
pub fn AppNavbar() -> Element {
    #[cfg(debug_assertions)]
    {
        let status = crate::identity::use_auth_status();
        println!("[identity] AppNavbar render status={status:?}");
    }

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand", {brand_link()} }

                // Page links; hidden below the responsive breakpoint. A single
                // entry today, laid out as a list so more can slot in.
                nav { class: "navbar__links", {home_link()} }

                // Auth controls and mobile toggle
                div { class: "navbar__controls",
                    SignedOut {
                        SignInButton {}
                        SignUpButton {}
                    }
                    SignedIn {
                        UserButton {}
                    }
                    // Placeholder toggle: no handler attached. Wiring it to a
                    // drawer waits until the link list grows past one entry.
                    button {
                        class: "navbar__menu-toggle",
                        aria_label: "Open menu",
                        svg {
                            class: "navbar__menu-icon",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            xmlns: "http://www.w3.org/2000/svg",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M4 6h16M4 12h16M4 18h16",
                            }
                        }
                    }
                }
            }
        }
    }
}
