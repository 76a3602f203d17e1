use leptos::prelude::*;

use super::context::use_session;
use crate::system::pages::login::LoginPage;

/// Client-side gate for protected views: unauthenticated viewers see
/// the login page instead. The serving layer applies the same rule from
/// the `auth-token` cookie.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
