//! Media upload form.
//!
//! Selection-time checks (file count, declared type) run in the file input's
//! change handler; the remaining rules run on submit. Either way a rejection
//! clears the pending preview where the rules demand it, resets the input
//! control, and surfaces the reason as a toast. Only a fully valid draft
//! becomes a [`MediaRecord`].

use dioxus::html::HasFileData;
use dioxus::prelude::dioxus_elements::FileEngine;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCloudArrowUp;
use dioxus_free_icons::Icon;

use store::validate;
use store::{DraftAction, MediaFile, MediaKind, MediaRecord, UploadDraft, UploadError};

use crate::toast::{push_toast, use_toasts, ToastLevel};

const UPLOAD_CSS: Asset = asset!("/assets/styling/upload.css");

#[component]
pub fn UploadForm(kind: MediaKind, on_submit: EventHandler<MediaRecord>) -> Element {
    let mut draft = use_signal(UploadDraft::default);
    // Remounting the input under a new key resets the picker's own value,
    // so a rejected selection does not block picking the same file again.
    let mut input_key = use_signal(|| 0u32);
    let mut toasts = use_toasts();

    let on_files = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else { return };
        let names = engine.files();
        if names.is_empty() {
            return;
        }

        let mut selected: Vec<MediaFile> = names
            .iter()
            .map(|name| MediaFile {
                name: name.clone(),
                mime: store::models::mime_for_name(name).to_string(),
                url: None,
            })
            .collect();

        if let Err(err) = validate::check_files(kind, &selected) {
            draft.write().apply(DraftAction::PreviewCleared);
            input_key += 1;
            push_toast(
                &mut toasts,
                ToastLevel::Warning,
                "Check your selection",
                &err.to_string(),
            );
            return;
        }

        // Selection accepted; derive preview URLs from the file bytes
        for file in &mut selected {
            if let Some(bytes) = engine.read_file(&file.name).await {
                file.url = crate::files::preview_url(&bytes, &file.mime);
            }
        }
        draft.write().apply(DraftAction::FilesSelected(selected));
    };

    let handle_remove = move |_: ()| {
        draft.write().apply(DraftAction::PreviewCleared);
        input_key += 1;
    };

    let handle_submit = move |_| {
        let current = draft();
        if let Err(err) = validate::validate(kind, &current) {
            if matches!(err, UploadError::TooManyFiles | UploadError::UnsupportedType) {
                draft.write().apply(DraftAction::PreviewCleared);
                input_key += 1;
            }
            push_toast(
                &mut toasts,
                ToastLevel::Warning,
                "Could not submit",
                &err.to_string(),
            );
            return;
        }

        let record = MediaRecord::from_draft(kind, &current);
        on_submit.call(record);
        push_toast(
            &mut toasts,
            ToastLevel::Success,
            &format!("{} uploaded successfully", kind.label()),
            "Please check the home page",
        );
        draft.set(UploadDraft::default());
        input_key += 1;
    };

    let input_id = match kind {
        MediaKind::Image => "image-file-input",
        MediaKind::Video => "video-file-input",
    };
    let hint = match kind {
        MediaKind::Image => "Supported file types: PNG, JPEG, WebP",
        MediaKind::Video => "Supported file types: MP4, X-m4v, WebM",
    };

    rsx! {
        document::Stylesheet { href: UPLOAD_CSS }

        div {
            class: "upload-form",

            div {
                class: "upload-picker",
                Icon {
                    class: "upload-icon",
                    width: 32,
                    height: 32,
                    fill: "#718096",
                    icon: FaCloudArrowUp,
                }
                h3 { "Upload files" }
                input {
                    key: "{input_key}",
                    id: input_id,
                    class: "upload-input",
                    r#type: "file",
                    accept: kind.accept(),
                    multiple: kind.allows_multiple(),
                    onchange: on_files,
                }
                label {
                    class: "upload-trigger",
                    r#for: input_id,
                    "Choose a file"
                }
                if draft().has_files() {
                    UploadPreview {
                        kind,
                        files: draft().files,
                        on_remove: handle_remove,
                    }
                }
                p { class: "upload-hint", "{hint}" }
            }

            div {
                class: "upload-fields",
                label { r#for: "upload-title", "Enter title" }
                input {
                    id: "upload-title",
                    r#type: "text",
                    placeholder: "Enter title",
                    value: "{draft().title}",
                    oninput: move |evt| draft.write().apply(DraftAction::TitleChanged(evt.value())),
                }
                label { r#for: "upload-description", "Enter description" }
                textarea {
                    id: "upload-description",
                    placeholder: "Enter description...",
                    value: "{draft().description}",
                    oninput: move |evt| {
                        draft.write().apply(DraftAction::DescriptionChanged(evt.value()))
                    },
                }
                button {
                    class: "upload-submit",
                    onclick: handle_submit,
                    "Submit"
                }
            }
        }
    }
}

#[component]
fn UploadPreview(kind: MediaKind, files: Vec<MediaFile>, on_remove: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "upload-preview",

            if kind == MediaKind::Video {
                if let Some(first) = files.first() {
                    if let Some(ref url) = first.url {
                        video { class: "upload-preview-video", src: "{url}" }
                    } else {
                        span { class: "upload-preview-name", "{first.name}" }
                    }
                }
            } else {
                div {
                    class: "upload-preview-grid",
                    for file in files.iter() {
                        div {
                            key: "{file.name}",
                            class: "upload-preview-cell",
                            if let Some(ref url) = file.url {
                                img { class: "upload-preview-image", src: "{url}", alt: "{file.name}" }
                            } else {
                                span { class: "upload-preview-name", "{file.name}" }
                            }
                        }
                    }
                }
            }

            button {
                class: "upload-remove",
                onclick: move |_| on_remove.call(()),
                "Remove {kind.label()}"
            }
        }
    }
}
