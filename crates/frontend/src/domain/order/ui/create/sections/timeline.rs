use contracts::domain::order::timeline::{FittingMode, PriorityLevel, TimelinePlan};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Select};
use crate::shared::icons::icon;

const PRIORITY_OPTIONS: [PriorityLevel; 5] = [
    PriorityLevel::Unset,
    PriorityLevel::Low,
    PriorityLevel::Medium,
    PriorityLevel::High,
    PriorityLevel::Urgent,
];

const FITTING_OPTIONS: [FittingMode; 5] = [
    FittingMode::Unset,
    FittingMode::None,
    FittingMode::Single,
    FittingMode::Multiple,
    FittingMode::FinalOnly,
];

#[component]
pub fn Timeline(timeline: RwSignal<TimelinePlan>) -> impl IntoView {
    let priority_options: Vec<(String, String)> = PRIORITY_OPTIONS
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect();
    let fitting_options: Vec<(String, String)> = FITTING_OPTIONS
        .iter()
        .map(|f| (f.as_str().to_string(), f.label().to_string()))
        .collect();

    view! {
        <section id="timeline" class="form-section">
            <h2 class="form-section__title">"Production Timeline"</h2>

            <div class="form-section__grid">
                <div class="form__group">
                    <label class="form__label">"Start Date"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || timeline.with(|t| t.start_date.clone())
                        on:input=move |ev| timeline.update(|t| {
                            t.start_date = event_target_value(&ev)
                        })
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Deadline"</label>
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || timeline.with(|t| t.deadline_date.clone())
                        on:input=move |ev| timeline.update(|t| {
                            t.deadline_date = event_target_value(&ev)
                        })
                    />
                </div>
                <Select
                    label="Priority Level"
                    value=Signal::derive(move || {
                        timeline.with(|t| t.priority_level.as_str().to_string())
                    })
                    on_change=Callback::new(move |v: String| timeline.update(|t| {
                        t.priority_level = PriorityLevel::parse(&v)
                    }))
                    options=priority_options
                />
                <Select
                    label="Fitting Required"
                    value=Signal::derive(move || {
                        timeline.with(|t| t.fitting_required.as_str().to_string())
                    })
                    on_change=Callback::new(move |v: String| timeline.update(|t| {
                        t.fitting_required = FittingMode::parse(&v)
                    }))
                    options=fitting_options
                />
            </div>

            <div class="milestones">
                <h3 class="milestones__title">"Production Milestones"</h3>
                <For
                    each=move || timeline.with(|t| t.milestones.clone())
                    key=|m| m.id
                    children=move |milestone| {
                        let id = milestone.id;
                        view! {
                            <div class="milestones__row">
                                <span class="milestones__icon">{icon(&milestone.icon)}</span>
                                <span class="milestones__name">{milestone.name}</span>
                                <input
                                    class="form__input milestones__date"
                                    type="date"
                                    prop:value=move || timeline.with(|t| {
                                        t.milestones
                                            .iter()
                                            .find(|m| m.id == id)
                                            .map(|m| m.date.clone())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| timeline.update(|t| {
                                        t.set_milestone_date(id, &event_target_value(&ev))
                                    })
                                />
                            </div>
                        }
                    }
                />
            </div>

            <Checkbox
                label=Signal::derive(|| "Notify client about timeline updates".to_string())
                checked=Signal::derive(move || timeline.with(|t| t.notify_client))
                on_change=Callback::new(move |v| timeline.update(|t| t.notify_client = v))
            />
        </section>
    }
}
