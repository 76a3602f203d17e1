use contracts::domain::order::completion::FormSection;
use leptos::prelude::*;

use crate::shared::icons::icon;

fn scroll_to(section: FormSection) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(section.id()) {
        element.scroll_into_view();
    }
}

/// Sticky progress rail beside the form. Completion state comes from
/// the orchestrator's memo; clicking an entry scrolls to its section.
#[component]
pub fn SectionNavigator(completed: Memo<Vec<FormSection>>) -> impl IntoView {
    let total = FormSection::ALL.len();
    let done = move || completed.with(|c| c.len());

    view! {
        <nav class="form-navigator">
            <div class="form-navigator__progress">
                <span class="form-navigator__count">
                    {move || format!("{} of {} sections completed", done(), total)}
                </span>
                <div class="form-navigator__bar">
                    <div
                        class="form-navigator__fill"
                        style:width=move || format!("{}%", done() * 100 / total)
                    ></div>
                </div>
            </div>

            <ul class="form-navigator__list">
                {FormSection::ALL
                    .into_iter()
                    .map(|section| {
                        let is_done = move || completed.with(|c| c.contains(&section));
                        view! {
                            <li class="form-navigator__item">
                                <button
                                    class="form-navigator__link"
                                    class:form-navigator__link--done=is_done
                                    on:click=move |_| scroll_to(section)
                                >
                                    <span class="form-navigator__status">
                                        {move || if is_done() {
                                            icon("check")
                                        } else {
                                            icon("chevron-right")
                                        }}
                                    </span>
                                    <span class="form-navigator__text">
                                        <span class="form-navigator__name">{section.title()}</span>
                                        <span class="form-navigator__hint">{section.description()}</span>
                                    </span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
