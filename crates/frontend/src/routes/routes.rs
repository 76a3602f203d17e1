use leptos::prelude::*;

use crate::layout::MainLayout;
use crate::system::auth::guard::RequireAuth;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
