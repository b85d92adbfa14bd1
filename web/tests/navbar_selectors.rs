#![cfg(test)]
/*!
Stylesheet selector lint for the web build.

Purpose:
- Ensure the CSS classes the navbar markup relies on (shared chrome in
  ui/assets/styling/navbar.css, page styles in web/assets/main.css) remain
  present, so a stylesheet refactor cannot silently strip the bar's layout or
  the responsive toggle behavior.

How it works:
- Compile-time embed both stylesheets with `include_str!` and assert presence
  of a curated set of selectors / tokens. A substring check is deliberate: it
  is an early warning, not a CSS parser, and keeps the test dependency-free.

If you intentionally rename a selector:
1. Update the component markup in ui.
2. Adjust the lists below to match.
*/

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Selectors the navbar markup depends on.
const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand-link",
    ".navbar__links",
    ".navbar__link",
    ".navbar__controls",
    ".navbar__menu-toggle",
    ".navbar__menu-icon",
    // Identity controls rendered by the web provider module
    ".auth__button",
    ".auth__button--sign-in",
    ".auth__button--sign-up",
    ".auth__user-button",
    ".auth__user-avatar",
    // Responsive behavior: links hide, toggle shows
    "@media (max-width: 768px)",
];

const REQUIRED_MAIN_SELECTORS: &[&str] = &["body {", ".page {", ".page-home"];

#[test]
fn navbar_stylesheet_keeps_required_selectors() {
    let missing: Vec<&str> = REQUIRED_NAVBAR_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !NAVBAR_CSS.contains(sel))
        .collect();
    assert!(
        missing.is_empty(),
        "navbar.css is missing selectors: {missing:?}"
    );
}

#[test]
fn main_stylesheet_keeps_required_selectors() {
    let missing: Vec<&str> = REQUIRED_MAIN_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !MAIN_CSS.contains(sel))
        .collect();
    assert!(
        missing.is_empty(),
        "main.css is missing selectors: {missing:?}"
    );
}

#[test]
fn mobile_breakpoint_hides_links_and_shows_toggle() {
    let (_, media_block) = NAVBAR_CSS
        .split_once("@media (max-width: 768px)")
        .expect("navbar.css must define the mobile breakpoint");

    assert!(
        media_block.contains(".navbar__links"),
        "breakpoint must restyle the link list"
    );
    assert!(
        media_block.contains(".navbar__menu-toggle"),
        "breakpoint must reveal the menu toggle"
    );
}
