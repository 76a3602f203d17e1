use contracts::domain::order::draft::{ClientUpdate, OrderDraft, SectionUpdate};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};

const CLIENT_TYPE_OPTIONS: [(&str, &str); 5] = [
    ("", "Select client type"),
    ("individual", "Individual"),
    ("corporate", "Corporate"),
    ("wedding", "Wedding Party"),
    ("event", "Event Group"),
];

#[component]
pub fn ClientInformation(
    draft: RwSignal<OrderDraft>,
    on_update: Callback<SectionUpdate>,
) -> impl IntoView {
    let client = move |u: ClientUpdate| on_update.run(SectionUpdate::Client(u));

    let type_options: Vec<(String, String)> = CLIENT_TYPE_OPTIONS
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect();

    view! {
        <section id="client-information" class="form-section">
            <h2 class="form-section__title">"Client Information"</h2>

            <div class="form-section__grid">
                <Input
                    label="Full Name"
                    value=Signal::derive(move || draft.with(|d| d.full_name.clone()))
                    on_input=Callback::new(move |v| client(ClientUpdate {
                        full_name: Some(v),
                        ..Default::default()
                    }))
                    placeholder="Enter client's full name"
                    required=true
                />
                <Input
                    label="Email Address"
                    input_type="email"
                    value=Signal::derive(move || draft.with(|d| d.email_address.clone()))
                    on_input=Callback::new(move |v| client(ClientUpdate {
                        email_address: Some(v),
                        ..Default::default()
                    }))
                    placeholder="client@example.com"
                    required=true
                />
                <Input
                    label="Phone Number"
                    input_type="tel"
                    value=Signal::derive(move || draft.with(|d| d.phone_number.clone()))
                    on_input=Callback::new(move |v| client(ClientUpdate {
                        phone_number: Some(v),
                        ..Default::default()
                    }))
                    placeholder="+1 (555) 000-0000"
                    required=true
                />
                <Select
                    label="Client Type"
                    value=Signal::derive(move || draft.with(|d| d.client_type.clone()))
                    on_change=Callback::new(move |v| client(ClientUpdate {
                        client_type: Some(v),
                        ..Default::default()
                    }))
                    options=type_options
                />
            </div>

            <Textarea
                label="Address"
                value=Signal::derive(move || draft.with(|d| d.address.clone()))
                on_input=Callback::new(move |v| client(ClientUpdate {
                    address: Some(v),
                    ..Default::default()
                }))
                placeholder="Client's delivery address"
            />

            <Checkbox
                label=Signal::derive(|| "Save client information for future orders".to_string())
                checked=Signal::derive(move || draft.with(|d| d.save_client_info))
                on_change=Callback::new(move |v| client(ClientUpdate {
                    save_client_info: Some(v),
                    ..Default::default()
                }))
            />
        </section>
    }
}
