use leptos::prelude::*;

use super::{use_page, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::{logout, use_session};

const MENU_ITEMS: [(Page, &str, &str); 2] = [
    (Page::Orders, "Orders", "package"),
    (Page::CreateOrder, "Create Order", "plus"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let page = use_page();
    let (session, set_session) = use_session();

    let user_name = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.name.clone().or_else(|| Some(u.email.clone())))
                .unwrap_or_else(|| "Admin".to_string())
        })
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__brand-icon">{icon("scissors")}</span>
                <span class="sidebar__brand-name">"Tailoring Admin"</span>
            </div>

            <nav class="sidebar__nav">
                {MENU_ITEMS
                    .into_iter()
                    .map(|(target, label, icon_name)| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || page.get() == target
                                on:click=move |_| page.set(target)
                            >
                                <span class="sidebar__item-icon">{icon(icon_name)}</span>
                                <span class="sidebar__item-label">{label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <div class="sidebar__user">
                    <span class="sidebar__user-icon">{icon("user")}</span>
                    <span class="sidebar__user-name">{user_name}</span>
                </div>
                <button class="sidebar__logout" on:click=move |_| logout(set_session)>
                    {icon("logout")}
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
