//! Concrete identity controls for the web build.
//!
//! Stands in for a hosted identity SDK: the shared navbar only ever sees the
//! opaque elements returned here. Swapping in a real provider means replacing
//! this module and driving the shared `AuthStatus` signal from its session
//! hooks; nothing in `ui` changes.

use dioxus::prelude::*;

use ui::identity::IdentityControls;

pub fn controls() -> IdentityControls {
    IdentityControls {
        sign_in: sign_in_button,
        sign_up: sign_up_button,
        user_profile: user_button,
    }
}

// The triggers link out to the provider's hosted pages; this crate attaches
// no handlers of its own.
fn sign_in_button() -> Element {
    rsx! {
        a { class: "auth__button auth__button--sign-in", href: "/sign-in", "Sign in" }
    }
}

fn sign_up_button() -> Element {
    rsx! {
        a { class: "auth__button auth__button--sign-up", href: "/sign-up", "Sign up" }
    }
}

fn user_button() -> Element {
    rsx! {
        button { class: "auth__user-button", aria_label: "Account",
            span { class: "auth__user-avatar" }
        }
    }
}
