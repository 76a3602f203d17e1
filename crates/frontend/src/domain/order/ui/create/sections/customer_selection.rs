use contracts::domain::customer::Customer;
use contracts::domain::order::draft::OrderDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::customer::api::fetch_customers;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::{expire_session, use_session};

/// Optional pre-fill from the customer directory. Picking a customer
/// overwrites the client and measurement slices of the draft; clearing
/// the pick resets the whole draft.
#[component]
pub fn CustomerSelection(
    draft: RwSignal<OrderDraft>,
    selected: RwSignal<Option<Customer>>,
) -> impl IntoView {
    let (session, set_session) = use_session();
    let show_picker = RwSignal::new(false);
    let customers = RwSignal::new(Vec::<Customer>::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let open_picker = move |_| {
        show_picker.set(true);
        if customers.with_untracked(|c| c.is_empty()) && !loading.get_untracked() {
            loading.set(true);
            spawn_local(async move {
                let token = session.with_untracked(|s| s.token.clone());
                match fetch_customers(token.as_deref()).await {
                    Ok(fetched) => customers.set(fetched),
                    Err(_) => expire_session(set_session),
                }
                loading.set(false);
            });
        }
    };

    let filtered = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        customers.with(|list| {
            list.iter()
                .filter(|c| {
                    c.full_name.to_lowercase().contains(&query)
                        || c.email_address.to_lowercase().contains(&query)
                        || c.phone_number.contains(&query)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let pick = move |customer: Customer| {
        draft.update(|d| d.select_customer(Some(&customer)));
        selected.set(Some(customer));
        show_picker.set(false);
    };

    let clear = move |_| {
        draft.update(|d| d.select_customer(None));
        selected.set(None);
    };

    view! {
        <section id="customer-selection" class="form-section">
            <h2 class="form-section__title">"Customer Selection"</h2>

            <Show
                when=move || selected.with(|s| s.is_some())
                fallback=move || view! {
                    <button class="button button--secondary" on:click=open_picker>
                        {icon("user")}
                        "Select Existing Customer"
                    </button>
                }
            >
                <div class="customer-card">
                    {move || selected.with(|s| s.as_ref().map(|c| view! {
                        <div class="customer-card__info">
                            <span class="customer-card__name">{c.full_name.clone()}</span>
                            <span class="customer-card__detail">{c.email_address.clone()}</span>
                            <span class="customer-card__detail">{c.phone_number.clone()}</span>
                            <span class="customer-card__badge">{c.client_type.clone()}</span>
                        </div>
                    }))}
                    <button class="button button--ghost" on:click=clear>
                        {icon("x")}
                        "Clear Selection"
                    </button>
                </div>
            </Show>

            <Show when=move || show_picker.get()>
                <Modal
                    title="Select Customer".to_string()
                    on_close=Callback::new(move |_| show_picker.set(false))
                >
                    <div class="customer-picker__search">
                        {icon("search")}
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Search customers..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </div>

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <p class="customer-picker__status">"Loading customers..."</p> }
                    >
                        <Show
                            when=move || filtered.with(|f| !f.is_empty())
                            fallback=move || view! {
                                <p class="customer-picker__status">
                                    {move || if search.with(|q| q.is_empty()) {
                                        "No customers available"
                                    } else {
                                        "No customers found matching your search"
                                    }}
                                </p>
                            }
                        >
                            <ul class="customer-picker__list">
                                <For
                                    each=move || filtered.get()
                                    key=|c| c.id.clone()
                                    children=move |customer| {
                                        let entry = customer.clone();
                                        view! {
                                            <li class="customer-picker__item">
                                                <button
                                                    class="customer-picker__entry"
                                                    on:click=move |_| pick(entry.clone())
                                                >
                                                    <span class="customer-picker__name">
                                                        {customer.full_name.clone()}
                                                    </span>
                                                    <span class="customer-picker__detail">
                                                        {customer.email_address.clone()}
                                                    </span>
                                                    <span class="customer-picker__detail">
                                                        {customer.phone_number.clone()}
                                                    </span>
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </Show>
                </Modal>
            </Show>
        </section>
    }
}
