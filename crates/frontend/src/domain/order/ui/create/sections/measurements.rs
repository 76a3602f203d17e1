use contracts::domain::order::draft::{
    MeasurementUnit, MeasurementsUpdate, OrderDraft, SectionUpdate, StandardMeasurements,
    StandardMeasurementsUpdate,
};
use leptos::prelude::*;

use crate::shared::components::ui::Textarea;
use crate::shared::icons::icon;

type FieldAccess = (
    &'static str,
    fn(&StandardMeasurements) -> String,
    fn(String) -> StandardMeasurementsUpdate,
);

const STANDARD_FIELDS: [FieldAccess; 8] = [
    ("Chest", |s| s.chest.clone(), |v| StandardMeasurementsUpdate {
        chest: Some(v),
        ..Default::default()
    }),
    ("Waist", |s| s.waist.clone(), |v| StandardMeasurementsUpdate {
        waist: Some(v),
        ..Default::default()
    }),
    ("Hips", |s| s.hips.clone(), |v| StandardMeasurementsUpdate {
        hips: Some(v),
        ..Default::default()
    }),
    (
        "Shoulder Width",
        |s| s.shoulder_width.clone(),
        |v| StandardMeasurementsUpdate {
            shoulder_width: Some(v),
            ..Default::default()
        },
    ),
    (
        "Sleeve Length",
        |s| s.sleeve_length.clone(),
        |v| StandardMeasurementsUpdate {
            sleeve_length: Some(v),
            ..Default::default()
        },
    ),
    ("Inseam", |s| s.inseam.clone(), |v| StandardMeasurementsUpdate {
        inseam: Some(v),
        ..Default::default()
    }),
    ("Height", |s| s.height.clone(), |v| StandardMeasurementsUpdate {
        height: Some(v),
        ..Default::default()
    }),
    ("Neck", |s| s.neck.clone(), |v| StandardMeasurementsUpdate {
        neck: Some(v),
        ..Default::default()
    }),
];

#[component]
pub fn Measurements(
    draft: RwSignal<OrderDraft>,
    on_update: Callback<SectionUpdate>,
) -> impl IntoView {
    let custom_name = RwSignal::new(String::new());
    let custom_value = RwSignal::new(String::new());

    let unit = move || draft.with(|d| d.measurements.unit);
    let unit_label = move || unit().as_str();

    let set_unit = move |u: MeasurementUnit| {
        on_update.run(SectionUpdate::Measurements(MeasurementsUpdate {
            unit: Some(u),
            ..Default::default()
        }));
    };

    let add_custom = move |_| {
        let name = custom_name.get_untracked();
        let value = custom_value.get_untracked();
        let mut added = false;
        draft.update(|d| added = d.measurements.add_custom(&name, &value));
        if added {
            custom_name.set(String::new());
            custom_value.set(String::new());
        }
    };

    view! {
        <section id="measurements" class="form-section">
            <div class="form-section__header">
                <h2 class="form-section__title">"Measurement Information"</h2>
                <div class="unit-toggle">
                    <label class="unit-toggle__option">
                        <input
                            type="radio"
                            name="measurement-unit"
                            value="cm"
                            checked=move || unit() == MeasurementUnit::Cm
                            on:change=move |_| set_unit(MeasurementUnit::Cm)
                        />
                        <span>"cm"</span>
                    </label>
                    <label class="unit-toggle__option">
                        <input
                            type="radio"
                            name="measurement-unit"
                            value="inches"
                            checked=move || unit() == MeasurementUnit::Inches
                            on:change=move |_| set_unit(MeasurementUnit::Inches)
                        />
                        <span>"inches"</span>
                    </label>
                </div>
            </div>

            <div class="form-section__grid">
                {STANDARD_FIELDS
                    .into_iter()
                    .map(|(label, read, write)| {
                        view! {
                            <div class="form__group">
                                <label class="form__label">
                                    {label} " (" {unit_label} ")"
                                </label>
                                <input
                                    class="form__input"
                                    type="text"
                                    prop:value=move || draft.with(|d| read(&d.measurements.standard))
                                    on:input=move |ev| on_update.run(
                                        SectionUpdate::StandardMeasurements(
                                            write(event_target_value(&ev)),
                                        ),
                                    )
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="custom-measurements">
                <h3 class="custom-measurements__title">"Custom Measurements"</h3>
                <div class="custom-measurements__add">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Measurement name (e.g., Ankle)"
                        prop:value=move || custom_name.get()
                        on:input=move |ev| custom_name.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Value"
                        prop:value=move || custom_value.get()
                        on:input=move |ev| custom_value.set(event_target_value(&ev))
                    />
                    <button class="button button--secondary" on:click=add_custom>
                        {icon("plus")}
                        "Add Custom Measurement"
                    </button>
                </div>

                <ul class="custom-measurements__list">
                    <For
                        each=move || draft.with(|d| d.measurements.custom.clone())
                        key=|m| m.id
                        children=move |measurement| {
                            let id = measurement.id;
                            view! {
                                <li class="custom-measurements__item">
                                    <span>{measurement.name.clone()}</span>
                                    <span>{measurement.value.clone()} " " {unit_label}</span>
                                    <button
                                        class="button button--icon"
                                        on:click=move |_| draft.update(|d| {
                                            d.measurements.remove_custom(id)
                                        })
                                    >
                                        {icon("trash")}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>

            <Textarea
                label="Additional Fit Notes"
                value=Signal::derive(move || {
                    draft.with(|d| d.measurements.additional_fit_notes.clone())
                })
                on_input=Callback::new(move |v| on_update.run(SectionUpdate::Measurements(
                    MeasurementsUpdate {
                        additional_fit_notes: Some(v),
                        ..Default::default()
                    },
                )))
                placeholder="Posture notes, asymmetries, fit preferences..."
            />
        </section>
    }
}
