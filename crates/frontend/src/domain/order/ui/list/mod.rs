pub mod state;

use contracts::domain::order::aggregate::{Order, OrderStatus};
use contracts::domain::order::filter::{remove_order, ALL_PRIORITY, ALL_STATUS};
use contracts::domain::order::timeline::PriorityLevel;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use self::state::{create_state, ActiveModal, OrderListState};
use crate::domain::order::api::{assign_order, delete_order, fetch_orders, AssignOrderRequest};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::{expire_session, use_session};

const PRIORITY_OPTIONS: [&str; 4] = ["LOW", "MEDIUM", "HIGH", "URGENT"];

fn status_class(status: &str) -> &'static str {
    match OrderStatus::parse(status) {
        Some(OrderStatus::Ongoing) => "badge badge--blue",
        Some(OrderStatus::Completed) => "badge badge--green",
        Some(OrderStatus::Cancelled) => "badge badge--red",
        Some(OrderStatus::Pending) => "badge badge--yellow",
        None => "badge badge--gray",
    }
}

fn priority_class(priority: &str) -> &'static str {
    match PriorityLevel::parse(priority) {
        PriorityLevel::High | PriorityLevel::Urgent => "badge badge--red",
        PriorityLevel::Medium => "badge badge--yellow",
        PriorityLevel::Low => "badge badge--green",
        PriorityLevel::Unset => "badge badge--gray",
    }
}

fn initials(order: &Order) -> String {
    let first = order.customer_first_name.chars().next();
    let last = order.customer_last_name.chars().next();
    first
        .into_iter()
        .chain(last)
        .collect::<String>()
        .to_uppercase()
}

/// Order management page: filterable order table with per-row actions.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let (session, set_session) = use_session();
    let state = create_state();

    // Initial load. Network failures already degraded to sample data
    // inside the fetcher; only a dead session comes back as an error.
    state.update(|s| s.loading = true);
    spawn_local(async move {
        let token = session.with_untracked(|s| s.token.clone());
        match fetch_orders(token.as_deref()).await {
            Ok(orders) => state.update(|s| {
                s.orders = orders;
                s.loading = false;
            }),
            Err(_) => expire_session(set_session),
        }
    });

    // Any click outside a row's action button closes the open dropdown.
    // The listener is detached when the page unmounts.
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        state.update(|s| s.active_dropdown = None);
    }) as Box<dyn FnMut(_)>);
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // Document and Closure are !Send/!Sync; SendWrapper satisfies
        // on_cleanup's bound and is sound on single-threaded wasm.
        let cleanup = send_wrapper::SendWrapper::new((document, closure));
        on_cleanup(move || {
            let (document, closure) = cleanup.take();
            let _ = document
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        });
    }

    let visible = Memo::new(move |_| state.with(|s| s.filter.apply(&s.orders)));

    let status_options = std::iter::once(ALL_STATUS.to_string())
        .chain(OrderStatus::ALL.iter().map(|s| s.as_str().to_string()))
        .collect::<Vec<_>>();
    let priority_options = std::iter::once(ALL_PRIORITY.to_string())
        .chain(PRIORITY_OPTIONS.iter().map(|p| p.to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="order-list">
            <header class="page-header">
                <h1 class="page-header__title">"Order Management"</h1>
            </header>

            <div class="order-list__toolbar">
                <div class="order-list__search">
                    {icon("search")}
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Search by name, email, order or tracking ID..."
                        prop:value=move || state.with(|s| s.filter.search_query.clone())
                        on:input=move |ev| state.update(|s| {
                            s.filter.search_query = event_target_value(&ev)
                        })
                    />
                </div>

                <select
                    class="form__select"
                    on:change=move |ev| state.update(|s| {
                        s.filter.status_filter = event_target_value(&ev)
                    })
                >
                    {status_options
                        .into_iter()
                        .map(|option| {
                            let value = option.clone();
                            view! {
                                <option
                                    value=option.clone()
                                    selected=move || state.with(|s| s.filter.status_filter == value)
                                >
                                    {option.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    class="form__select"
                    on:change=move |ev| state.update(|s| {
                        s.filter.priority_filter = event_target_value(&ev)
                    })
                >
                    {priority_options
                        .into_iter()
                        .map(|option| {
                            let value = option.clone();
                            view! {
                                <option
                                    value=option.clone()
                                    selected=move || {
                                        state.with(|s| s.filter.priority_filter == value)
                                    }
                                >
                                    {option.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                // Display-only; result ordering follows the source collection.
                <span class="order-list__sort">
                    "Sort by: Name"
                    {icon("chevron-right")}
                </span>
            </div>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="order-list__status">"Loading orders..."</p> }
            >
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="order-list__status">"No orders found"</p> }
                >
                    <table class="order-table">
                        <thead>
                            <tr>
                                <th>"Customer"</th>
                                <th>"Order ID"</th>
                                <th>"Tracking ID"</th>
                                <th>"Due Date"</th>
                                <th>"Status"</th>
                                <th>"Priority"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || visible.get()
                                key=|order| order.id
                                children=move |order| view! { <OrderRow order=order state=state /> }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <OrderModals state=state />
        </div>
    }
}

#[component]
fn OrderRow(order: Order, state: RwSignal<OrderListState>) -> impl IntoView {
    let id = order.id;
    let dropdown_open = move || state.with(|s| s.active_dropdown == Some(id));

    let toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.update(|s| {
            s.active_dropdown = if s.active_dropdown == Some(id) {
                None
            } else {
                Some(id)
            };
        });
    };

    let open = move |modal: ActiveModal| {
        let order = state.with_untracked(|s| s.orders.iter().find(|o| o.id == id).cloned());
        if let Some(order) = order {
            state.update(|s| s.open_modal(order, modal));
        }
    };

    // Prefilling the creation form from an existing order is not wired
    // up yet, so this only explains where the flow will go.
    let edit_notice = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(
                "Edit functionality will redirect to the create order page with prefilled data",
            );
        }
        state.update(|s| s.active_dropdown = None);
    };

    view! {
        <tr class="order-table__row">
            <td>
                <div class="order-table__customer">
                    <span class="avatar">{initials(&order)}</span>
                    <div class="order-table__customer-text">
                        <span class="order-table__name">{order.customer_name.clone()}</span>
                        <span class="order-table__email">{order.customer_email.clone()}</span>
                    </div>
                </div>
            </td>
            <td>{order.order_id.clone()}</td>
            <td>{order.tracking_id.clone()}</td>
            <td>{format_date(&order.due_date)}</td>
            <td><span class=status_class(&order.status)>{order.status.clone()}</span></td>
            <td>
                <span class=priority_class(&order.priority_level)>
                    {order.priority_level.clone()}
                </span>
            </td>
            <td class="order-table__actions">
                <button class="button button--icon" on:click=toggle>
                    {icon("more")}
                </button>
                <Show when=dropdown_open>
                    <div class="dropdown">
                        <button class="dropdown__item" on:click=move |_| open(ActiveModal::Summary)>
                            {icon("eye")}
                            "View"
                        </button>
                        <button class="dropdown__item" on:click=edit_notice>
                            {icon("edit")}
                            "Edit"
                        </button>
                        <button class="dropdown__item" on:click=move |_| open(ActiveModal::Assign)>
                            {icon("user-check")}
                            "Assign"
                        </button>
                        <button
                            class="dropdown__item dropdown__item--danger"
                            on:click=move |_| open(ActiveModal::Delete)
                        >
                            {icon("trash")}
                            "Delete"
                        </button>
                    </div>
                </Show>
            </td>
        </tr>
    }
}

#[component]
fn OrderModals(state: RwSignal<OrderListState>) -> impl IntoView {
    let (session, _) = use_session();
    let close = Callback::new(move |_| state.update(|s| s.close_modal()));

    let rider_name = RwSignal::new(String::new());
    let rider_phone = RwSignal::new(String::new());
    let assigned_date = RwSignal::new(String::new());

    let selected = move || state.with(|s| s.selected_order.clone());
    let modal_is = move |m: ActiveModal| state.with(|s| s.modal == Some(m));

    let confirm_delete = move |_| {
        let Some(order) = state.with_untracked(|s| s.selected_order.clone()) else {
            return;
        };
        state.update(|s| {
            remove_order(&mut s.orders, order.id);
            s.close_modal();
        });
        // Server deletion runs in the background; the row is already
        // gone locally either way.
        let token = session.with_untracked(|s| s.token.clone());
        spawn_local(async move {
            if let Err(err) = delete_order(order.id, token.as_deref()).await {
                log::warn!("Server delete for order {} failed: {}", order.id, err);
            }
        });
    };

    let confirm_assign = move |_| {
        let Some(order) = state.with_untracked(|s| s.selected_order.clone()) else {
            return;
        };
        let request = AssignOrderRequest {
            rider_name: rider_name.get_untracked(),
            rider_phone_number: rider_phone.get_untracked(),
            assigned_date: assigned_date.get_untracked(),
        };
        // Reflect the assignment locally right away.
        state.update(|s| {
            if let Some(row) = s.orders.iter_mut().find(|o| o.id == order.id) {
                row.rider_name = request.rider_name.clone();
                row.rider_phone_number = Some(request.rider_phone_number.clone());
            }
            s.close_modal();
        });
        rider_name.set(String::new());
        rider_phone.set(String::new());
        assigned_date.set(String::new());

        let token = session.with_untracked(|s| s.token.clone());
        spawn_local(async move {
            if let Err(err) = assign_order(order.id, &request, token.as_deref()).await {
                log::warn!("Assignment for order {} failed: {}", order.id, err);
            }
        });
    };

    view! {
        <Show when=move || modal_is(ActiveModal::Summary)>
            <Modal title="Order Summary".to_string() on_close=close>
                {move || selected().map(|order| view! {
                    <div class="order-summary">
                        <dl class="order-summary__grid">
                            <dt>"Order ID"</dt>
                            <dd>{order.order_id.clone()}</dd>
                            <dt>"Tracking ID"</dt>
                            <dd>{order.tracking_id.clone()}</dd>
                            <dt>"Status"</dt>
                            <dd>
                                <span class=status_class(&order.status)>
                                    {order.status.clone()}
                                </span>
                            </dd>
                            <dt>"Priority"</dt>
                            <dd>
                                <span class=priority_class(&order.priority_level)>
                                    {order.priority_level.clone()}
                                </span>
                            </dd>
                        </dl>

                        <h3 class="order-summary__heading">{icon("user")} "Customer Information"</h3>
                        <dl class="order-summary__grid">
                            <dt>"Name"</dt>
                            <dd>{order.customer_name.clone()}</dd>
                            <dt>"Customer ID"</dt>
                            <dd>{order.customer_id.clone()}</dd>
                            <dt>"Email"</dt>
                            <dd>{order.customer_email.clone()}</dd>
                            <dt>"Phone"</dt>
                            <dd>{order.customer_phone_number.clone()}</dd>
                            <dt>"Address"</dt>
                            <dd>{order.customer_address.clone()}</dd>
                        </dl>

                        <h3 class="order-summary__heading">{icon("calendar")} "Schedule"</h3>
                        <dl class="order-summary__grid">
                            <dt>"Start Date"</dt>
                            <dd>{format_date(&order.start_date)}</dd>
                            <dt>"End Date"</dt>
                            <dd>{format_date(&order.end_date)}</dd>
                            <dt>"Due Date"</dt>
                            <dd>{format_date(&order.due_date)}</dd>
                            <dt>"Rider"</dt>
                            <dd>{order.rider_name.clone()}</dd>
                        </dl>

                        <h3 class="order-summary__heading">{icon("file-text")} "Notes"</h3>
                        <p class="order-summary__notes">{order.additional_notes.clone()}</p>
                        <p class="order-summary__notes">{order.additional_fit_notes.clone()}</p>
                    </div>
                })}
            </Modal>
        </Show>

        <Show when=move || modal_is(ActiveModal::Assign)>
            <Modal title="Assign Order".to_string() on_close=close>
                <div class="assign-form">
                    <div class="form__group">
                        <label class="form__label">"Rider Name"</label>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || rider_name.get()
                            on:input=move |ev| rider_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Rider Phone"</label>
                        <input
                            class="form__input"
                            type="tel"
                            prop:value=move || rider_phone.get()
                            on:input=move |ev| rider_phone.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Assignment Date"</label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || assigned_date.get()
                            on:input=move |ev| assigned_date.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="button button--primary" on:click=confirm_assign>
                        "Assign"
                    </button>
                </div>
            </Modal>
        </Show>

        <Show when=move || modal_is(ActiveModal::Delete)>
            <Modal title="Delete Order".to_string() on_close=close>
                <div class="confirm-delete">
                    <p>
                        "Are you sure you want to delete "
                        <strong>
                            {move || selected().map(|o| o.order_id).unwrap_or_default()}
                        </strong>
                        "? This cannot be undone."
                    </p>
                    <div class="confirm-delete__actions">
                        <button class="button button--secondary" on:click=move |_| close.run(())>
                            "Cancel"
                        </button>
                        <button class="button button--danger" on:click=confirm_delete>
                            "Delete"
                        </button>
                    </div>
                </div>
            </Modal>
        </Show>
    }
}
