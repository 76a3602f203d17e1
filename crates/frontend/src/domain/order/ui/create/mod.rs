pub mod navigator;
pub mod sections;

use contracts::domain::customer::Customer;
use contracts::domain::order::completion::completed_sections;
use contracts::domain::order::draft::OrderDraft;
use contracts::domain::order::payload::CreateOrderRequest;
use contracts::domain::order::timeline::TimelinePlan;
use contracts::shared::upload::UploadedFile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::navigator::SectionNavigator;
use self::sections::client_information::ClientInformation;
use self::sections::customer_selection::CustomerSelection;
use self::sections::instructions::Instructions;
use self::sections::measurements::Measurements;
use self::sections::order_items::OrderItems;
use self::sections::timeline::Timeline;
use crate::domain::order::api::create_order;
use crate::shared::error::ApiError;
use crate::shared::modal::Modal;
use crate::system::auth::context::{logout, use_session};

/// Snapshot shown in the confirmation modal after a successful submit.
#[derive(Clone, Debug, PartialEq)]
struct SubmittedOrder {
    client_name: String,
    client_email: String,
    deadline: String,
    priority: String,
}

/// Order creation form. This component owns the draft and timeline
/// signals; section components receive slices and report changes back
/// through section-scoped updates, so no section can touch another's
/// fields.
#[component]
pub fn CreateOrderPage() -> impl IntoView {
    let (session, set_session) = use_session();

    let draft = RwSignal::new(OrderDraft::default());
    let timeline = RwSignal::new(TimelinePlan::default());
    let selected_customer = RwSignal::new(None::<Customer>);
    let files = RwSignal::new(Vec::<UploadedFile>::new());
    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<SubmittedOrder>);

    let completed = Memo::new(move |_| draft.with(|d| completed_sections(d)));

    let on_update = Callback::new(move |update| draft.update(|d| d.apply(update)));

    let reset_form = move || {
        draft.set(OrderDraft::default());
        timeline.set(TimelinePlan::default());
        selected_customer.set(None);
        files.set(Vec::new());
        submit_error.set(None);
        submitted.set(None);
    };

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        submit_error.set(None);

        let token = session.with_untracked(|s| s.token.clone());
        if token.is_none() {
            submit_error.set(ApiError::AuthRequired.to_string().into());
            return;
        }

        let request = draft.with_untracked(|d| {
            timeline.with_untracked(|t| CreateOrderRequest::from_draft(d, t))
        });
        let summary = SubmittedOrder {
            client_name: request.customer_name.clone(),
            client_email: request.customer_email.clone(),
            deadline: request.due_date.clone(),
            priority: request.priority_level.clone(),
        };

        submitting.set(true);
        spawn_local(async move {
            match create_order(&request, token.as_deref()).await {
                Ok(()) => submitted.set(Some(summary)),
                Err(ApiError::SessionExpired) => {
                    submit_error.set(Some(ApiError::SessionExpired.to_string()));
                    logout(set_session);
                }
                Err(err) => {
                    log::error!("Order submission failed: {}", err);
                    submit_error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="create-order">
            <header class="page-header">
                <h1 class="page-header__title">"Create New Order"</h1>
            </header>

            <div class="create-order__body">
                <div class="create-order__form">
                    <CustomerSelection draft=draft selected=selected_customer />
                    <ClientInformation draft=draft on_update=on_update />
                    <OrderItems draft=draft on_update=on_update />
                    <Measurements draft=draft on_update=on_update />
                    <Timeline timeline=timeline />
                    <Instructions timeline=timeline files=files />

                    {move || submit_error.get().map(|message| view! {
                        <div class="alert alert--error">{message}</div>
                    })}

                    <button
                        class="button button--primary create-order__submit"
                        disabled=move || submitting.get()
                        on:click=submit
                    >
                        {move || if submitting.get() {
                            "Creating Order..."
                        } else {
                            "Create Order"
                        }}
                    </button>
                </div>

                <SectionNavigator completed=completed />
            </div>

            <Show when=move || submitted.with(|s| s.is_some())>
                <Modal
                    title="Order Created".to_string()
                    on_close=Callback::new(move |_| submitted.set(None))
                >
                    {move || submitted.get().map(|order| view! {
                        <div class="order-confirmation">
                            <p class="order-confirmation__lead">
                                "The order was created successfully."
                            </p>
                            <dl class="order-confirmation__details">
                                <dt>"Client"</dt>
                                <dd>{order.client_name}</dd>
                                <dt>"Email"</dt>
                                <dd>{order.client_email}</dd>
                                <dt>"Deadline"</dt>
                                <dd>{order.deadline}</dd>
                                <dt>"Priority"</dt>
                                <dd>{order.priority}</dd>
                            </dl>
                            <button
                                class="button button--primary"
                                on:click=move |_| reset_form()
                            >
                                "Create Another Order"
                            </button>
                        </div>
                    })}
                </Modal>
            </Show>
        </div>
    }
}
