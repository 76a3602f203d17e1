pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

use crate::domain::order::ui::create::CreateOrderPage;
use crate::domain::order::ui::list::OrdersPage;

/// Top-level pages reachable from the sidebar. Navigation is a plain
/// signal switch; the browser URL never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Orders,
    CreateOrder,
}

/// Main application shell: fixed sidebar on the left, the active page
/// filling the rest.
///
/// ```text
/// +---------+--------------------------------+
/// | Sidebar |            Content             |
/// +---------+--------------------------------+
/// ```
#[component]
pub fn MainLayout() -> impl IntoView {
    let page = RwSignal::new(Page::Orders);
    provide_context(page);

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="app-main">
                {move || match page.get() {
                    Page::Orders => view! { <OrdersPage /> }.into_any(),
                    Page::CreateOrder => view! { <CreateOrderPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

pub fn use_page() -> RwSignal<Page> {
    use_context::<RwSignal<Page>>().expect("MainLayout context not found")
}
