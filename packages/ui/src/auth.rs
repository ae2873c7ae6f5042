//! Authentication context and hooks for the UI.

use std::rc::Rc;

use api::{AuthClient, AuthConfig, Session, Subscription};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared identity provider client.
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    let client = use_context_provider(|| AuthClient::new(AuthConfig::from_env()));

    // The hub subscription lives as hook state, so it is dropped (and the
    // listener removed) when this component unmounts.
    let _subscription: Rc<Subscription> = use_hook(|| {
        Rc::new(client.hub().subscribe(move |session| {
            let mut auth_state = auth_state;
            auth_state.set(AuthState {
                user: session.cloned(),
            });
        }))
    });

    rsx! {
        {children}
    }
}
