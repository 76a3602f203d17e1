use contracts::system::auth::UserProfile;
use leptos::prelude::*;

use super::storage;
use crate::shared::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn restore_session() -> SessionState {
    let token = storage::get_token();
    if let Some(t) = &token {
        // Keep the middleware cookie in step with localStorage on every
        // fresh load, like login does.
        storage::set_auth_cookie(t);
    }
    SessionState {
        user: token.as_ref().and(storage::get_user()),
        token,
    }
}

/// Session context provider. Hydrates from localStorage synchronously,
/// before any gated view renders.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(restore_session());

    provide_context(session);
    provide_context(set_session);

    children()
}

pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session =
        use_context::<ReadSignal<SessionState>>().expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    (session, set_session)
}

/// Persist the credentials and switch the app to the authenticated
/// layout. The `Show` gate in the routes reacts to the state change, so
/// updating it is the navigation.
pub fn login(set_session: WriteSignal<SessionState>, token: String, user: UserProfile) {
    storage::save_session(&token, &user);
    set_session.set(SessionState {
        token: Some(token),
        user: Some(user),
    });
}

/// Clear storage, cookie, and in-memory state. Storage helpers swallow
/// their own failures, so the in-memory reset and the switch back to
/// the login view always happen.
pub fn logout(set_session: WriteSignal<SessionState>) {
    storage::clear_session();
    set_session.set(SessionState::default());
}

/// Implicit logout on an HTTP 401 from any authenticated call. Tells
/// the user to sign in again, then clears the session so the gate
/// falls back to the login view.
pub fn expire_session(set_session: WriteSignal<SessionState>) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&ApiError::SessionExpired.to_string());
    }
    logout(set_session);
}
