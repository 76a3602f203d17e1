use contracts::domain::order::timeline::TimelinePlan;
use contracts::shared::upload::{FileKind, UploadedFile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{FileList, HtmlInputElement};

use crate::shared::components::ui::Textarea;
use crate::shared::icons::icon;
use crate::shared::upload::process_file_list;

fn kind_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Image => "image",
        FileKind::Pdf | FileKind::Document => "file-text",
    }
}

/// Free-form notes plus design-reference attachments. Oversized files
/// are reported per file while the rest of the batch is still accepted.
#[component]
pub fn Instructions(
    timeline: RwSignal<TimelinePlan>,
    files: RwSignal<Vec<UploadedFile>>,
) -> impl IntoView {
    let upload_errors = RwSignal::new(Vec::<String>::new());
    let drag_active = RwSignal::new(false);

    let handle_files = move |list: FileList| {
        spawn_local(async move {
            let processed = process_file_list(list).await;
            files.update(|f| f.extend(processed.accepted));
            upload_errors.set(processed.rejected);
        });
    };

    let on_input_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            handle_files(list);
        }
        // Allow re-selecting the same file.
        input.set_value("");
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        if let Some(transfer) = ev.data_transfer() {
            if let Some(list) = transfer.files() {
                handle_files(list);
            }
        }
    };

    view! {
        <section id="instructions" class="form-section">
            <h2 class="form-section__title">"Instructions & Design References"</h2>

            <Textarea
                label="Additional Notes"
                value=Signal::derive(move || timeline.with(|t| t.additional_notes.clone()))
                on_input=Callback::new(move |v| timeline.update(|t| t.additional_notes = v))
                placeholder="Add any special instructions, preferences, or notes for this order..."
                rows=4
            />

            <div
                class="upload-zone"
                class:upload-zone--active=move || drag_active.get()
                on:dragover=move |ev| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
            >
                {icon("upload")}
                <label class="upload-zone__label">
                    <span class="upload-zone__action">"Upload Files"</span>
                    " or drag and drop"
                    <input
                        class="upload-zone__input"
                        type="file"
                        multiple
                        accept="image/*,.pdf,.doc,.docx,.txt"
                        on:change=on_input_change
                    />
                </label>
                <p class="upload-zone__hint">"Images, PDF or documents up to 10MB each"</p>
            </div>

            <Show when=move || upload_errors.with(|e| !e.is_empty())>
                <ul class="upload-errors">
                    {move || upload_errors
                        .get()
                        .into_iter()
                        .map(|message| view! { <li class="upload-errors__item">{message}</li> })
                        .collect_view()}
                </ul>
            </Show>

            <ul class="upload-list">
                <For
                    each=move || files.get()
                    key=|f| f.id
                    children=move |file| {
                        let id = file.id;
                        view! {
                            <li class="upload-list__item">
                                {match &file.preview {
                                    Some(url) => view! {
                                        <img class="upload-list__preview" src=url.clone() />
                                    }.into_any(),
                                    None => view! {
                                        <span class="upload-list__icon">
                                            {icon(kind_icon(file.kind))}
                                        </span>
                                    }.into_any(),
                                }}
                                <span class="upload-list__name">{file.name.clone()}</span>
                                <span class="upload-list__size">{file.size.clone()}</span>
                                <button
                                    class="button button--icon"
                                    on:click=move |_| files.update(|f| f.retain(|x| x.id != id))
                                >
                                    {icon("trash")}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
