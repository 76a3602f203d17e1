use contracts::domain::order::catalog::ProductCategory;
use contracts::domain::order::draft::{OrderDraft, OrderItem, SectionUpdate};
use leptos::prelude::*;

use crate::shared::icons::icon;

const SIZE_OPTIONS: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "XXXL"];

/// Multi-item order details. Every edit replaces the whole item list in
/// the draft, which keeps the mutation surface down to one operation.
#[component]
pub fn OrderItems(draft: RwSignal<OrderDraft>, on_update: Callback<SectionUpdate>) -> impl IntoView {
    let edit = move |f: fn(&mut Vec<OrderItem>, usize, String), index: usize, value: String| {
        let mut items = draft.with_untracked(|d| d.order_items.clone());
        f(&mut items, index, value);
        on_update.run(SectionUpdate::OrderItems(items));
    };

    let add_item = move |_| {
        let mut items = draft.with_untracked(|d| d.order_items.clone());
        items.push(OrderItem::default());
        on_update.run(SectionUpdate::OrderItems(items));
    };

    let remove_item = move |index: usize| {
        let mut items = draft.with_untracked(|d| d.order_items.clone());
        if items.len() > 1 {
            items.remove(index);
            on_update.run(SectionUpdate::OrderItems(items));
        }
    };

    let item_count = move || draft.with(|d| d.order_items.len());

    view! {
        <section id="order-information" class="form-section">
            <h2 class="form-section__title">"Order Information"</h2>

            <For
                each=move || 0..item_count()
                key=|index| *index
                children=move |index| {
                    let item = move || {
                        draft.with(|d| d.order_items.get(index).cloned().unwrap_or_default())
                    };
                    let category = move || ProductCategory::parse(&item().product_type);

                    view! {
                        <div class="order-item">
                            <div class="order-item__header">
                                <h3 class="order-item__title">{move || format!("Item {}", index + 1)}</h3>
                                <Show when=move || { item_count() > 1 }>
                                    <button
                                        class="button button--ghost order-item__remove"
                                        on:click=move |_| remove_item(index)
                                    >
                                        {icon("trash")}
                                        "Remove Item"
                                    </button>
                                </Show>
                            </div>

                            <div class="form-section__grid">
                                <div class="form__group">
                                    <label class="form__label">"Product Type"</label>
                                    <select
                                        class="form__select"
                                        on:change=move |ev| edit(
                                            |items, i, v| {
                                                if let Some(item) = items.get_mut(i) {
                                                    item.set_product_type(&v);
                                                }
                                            },
                                            index,
                                            event_target_value(&ev),
                                        )
                                    >
                                        <option value="" selected=move || item().product_type.is_empty()>
                                            "Select product type"
                                        </option>
                                        {ProductCategory::ALL
                                            .into_iter()
                                            .map(|c| view! {
                                                <option
                                                    value=c.as_str()
                                                    selected=move || item().product_type == c.as_str()
                                                >
                                                    {c.label()}
                                                </option>
                                            })
                                            .collect_view()}
                                    </select>
                                </div>

                                <div class="form__group">
                                    <label class="form__label">"Specific Item"</label>
                                    <select
                                        class="form__select"
                                        disabled=move || category().is_none()
                                        on:change=move |ev| edit(
                                            |items, i, v| {
                                                if let Some(item) = items.get_mut(i) {
                                                    item.specific_item = v;
                                                }
                                            },
                                            index,
                                            event_target_value(&ev),
                                        )
                                    >
                                        <option value="" selected=move || item().specific_item.is_empty()>
                                            "Select item"
                                        </option>
                                        {move || category()
                                            .map(|c| c.items()
                                                .iter()
                                                .map(|option| view! {
                                                    <option
                                                        value=*option
                                                        selected=move || item().specific_item == *option
                                                    >
                                                        {*option}
                                                    </option>
                                                })
                                                .collect_view())}
                                    </select>
                                </div>

                                <div class="form__group">
                                    <label class="form__label">"Color"</label>
                                    <input
                                        class="form__input"
                                        type="text"
                                        placeholder="e.g., Navy, White, Burgundy"
                                        prop:value=move || item().color
                                        on:input=move |ev| edit(
                                            |items, i, v| {
                                                if let Some(item) = items.get_mut(i) {
                                                    item.color = v;
                                                }
                                            },
                                            index,
                                            event_target_value(&ev),
                                        )
                                    />
                                </div>

                                <div class="form__group">
                                    <label class="form__label">"Quantity"</label>
                                    <input
                                        class="form__input"
                                        type="number"
                                        min="1"
                                        prop:value=move || item().quantity.to_string()
                                        on:input=move |ev| edit(
                                            |items, i, v| {
                                                if let Some(item) = items.get_mut(i) {
                                                    item.quantity = v.parse().unwrap_or(0);
                                                }
                                            },
                                            index,
                                            event_target_value(&ev),
                                        )
                                    />
                                </div>

                                // Shoes are sized numerically, so they get a free-form
                                // field instead of the letter-size list.
                                <Show
                                    when=move || category() == Some(ProductCategory::Shoes)
                                    fallback=move || view! {
                                        <div class="form__group">
                                            <label class="form__label">"Size"</label>
                                            <select
                                                class="form__select"
                                                on:change=move |ev| edit(
                                                    |items, i, v| {
                                                        if let Some(item) = items.get_mut(i) {
                                                            item.size = v;
                                                        }
                                                    },
                                                    index,
                                                    event_target_value(&ev),
                                                )
                                            >
                                                <option value="" selected=move || item().size.is_empty()>
                                                    "Select size"
                                                </option>
                                                {SIZE_OPTIONS
                                                    .into_iter()
                                                    .map(|s| view! {
                                                        <option value=s selected=move || item().size == s>
                                                            {s}
                                                        </option>
                                                    })
                                                    .collect_view()}
                                                <option
                                                    value="Custom"
                                                    selected=move || item().size == "Custom"
                                                >
                                                    "Custom (use measurements)"
                                                </option>
                                            </select>
                                        </div>
                                    }
                                >
                                    <div class="form__group">
                                        <label class="form__label">"Size"</label>
                                        <input
                                            class="form__input"
                                            type="text"
                                            placeholder="e.g., 42, 9.5, 10"
                                            prop:value=move || item().size
                                            on:input=move |ev| edit(
                                                |items, i, v| {
                                                    if let Some(item) = items.get_mut(i) {
                                                        item.size = v;
                                                    }
                                                },
                                                index,
                                                event_target_value(&ev),
                                            )
                                        />
                                    </div>
                                </Show>

                                <div class="form__group">
                                    <label class="form__label">"Preferred Material"</label>
                                    <input
                                        class="form__input"
                                        type="text"
                                        placeholder="e.g., Cotton, Silk, Leather"
                                        prop:value=move || item().material
                                        on:input=move |ev| edit(
                                            |items, i, v| {
                                                if let Some(item) = items.get_mut(i) {
                                                    item.material = v;
                                                }
                                            },
                                            index,
                                            event_target_value(&ev),
                                        )
                                    />
                                </div>
                            </div>

                            <div class="form__group">
                                <label class="form__label">"Special Instructions"</label>
                                <textarea
                                    class="form__textarea"
                                    rows=3
                                    placeholder="Any special requirements or notes for this item..."
                                    prop:value=move || item().special_instructions
                                    on:input=move |ev| edit(
                                        |items, i, v| {
                                            if let Some(item) = items.get_mut(i) {
                                                item.special_instructions = v;
                                            }
                                        },
                                        index,
                                        event_target_value(&ev),
                                    )
                                ></textarea>
                            </div>
                        </div>
                    }
                }
            />

            <button class="button button--dashed" on:click=add_item>
                {icon("plus")}
                "Add Another Item"
            </button>
        </section>
    }
}
