use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Welcome" }
            p { "Sign in from the bar above to pick up where you left off, or keep browsing as a guest." }
        }
    }
}
