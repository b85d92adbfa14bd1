//! Identity-provider abstraction.
//!
//! The shared crate never binds to a concrete identity SDK. Platforms hand it
//! two things instead:
//!
//! 1. A `Signal<AuthStatus>` through context, so components re-render when the
//!    session changes. `ui` only reads the signal.
//! 2. A set of ready-made controls ([`IdentityControls`]) registered once at
//!    startup. `ui` treats each control as an opaque element and supplies no
//!    callbacks or targets of its own.
//!
//! Failures inside the provider (e.g. an unreachable identity service) are the
//! provider's to surface through its own controls; nothing here catches or
//! wraps them.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Whether the current user session is authenticated.
///
/// Owned by the platform crate; defaults to `SignedOut` until a session is
/// established (or when no platform signal is installed at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    SignedOut,
    SignedIn,
}

/// Identity-provider widget set.
///
/// Each function returns a fully constructed element (a sign-in trigger, a
/// sign-up trigger, a user-profile control). Platforms register theirs via
/// [`register_identity`] before rendering the root.
pub struct IdentityControls {
    pub sign_in: fn() -> Element,
    pub sign_up: fn() -> Element,
    pub user_profile: fn() -> Element,
}

static IDENTITY_CONTROLS: OnceCell<IdentityControls> = OnceCell::new();

/// Install the platform's identity controls. First registration wins;
/// later calls are ignored.
pub fn register_identity(controls: IdentityControls) {
    let _ = IDENTITY_CONTROLS.set(controls);
}

/// Read the current auth status from the platform-provided context signal.
///
/// Subscribes the calling component, so a signed-in/signed-out flip triggers a
/// re-render. Falls back to `SignedOut` when no signal is installed.
pub fn use_auth_status() -> AuthStatus {
    try_use_context::<Signal<AuthStatus>>()
        .map(|status| status())
        .unwrap_or_default()
}

/// Renders its children only while the session is signed out.
#[component]
pub fn SignedOut(children: Element) -> Element {
    match use_auth_status() {
        AuthStatus::SignedOut => rsx! { {children} },
        AuthStatus::SignedIn => VNode::empty(),
    }
}

/// Renders its children only while the session is signed in.
#[component]
pub fn SignedIn(children: Element) -> Element {
    match use_auth_status() {
        AuthStatus::SignedIn => rsx! { {children} },
        AuthStatus::SignedOut => VNode::empty(),
    }
}

/// Sign-in trigger, delegated to the registered provider.
/// Renders nothing when no provider is installed.
#[component]
pub fn SignInButton() -> Element {
    match IDENTITY_CONTROLS.get() {
        Some(controls) => (controls.sign_in)(),
        None => VNode::empty(),
    }
}

/// Sign-up trigger, delegated to the registered provider.
#[component]
pub fn SignUpButton() -> Element {
    match IDENTITY_CONTROLS.get() {
        Some(controls) => (controls.sign_up)(),
        None => VNode::empty(),
    }
}

/// User-profile control for an authenticated session, delegated to the
/// registered provider.
#[component]
pub fn UserButton() -> Element {
    match IDENTITY_CONTROLS.get() {
        Some(controls) => (controls.user_profile)(),
        None => VNode::empty(),
    }
}
