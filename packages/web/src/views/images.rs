use dioxus::prelude::*;

use store::{LibraryAction, MediaKind};
use ui::{use_media_library, MediaGallery, UploadForm};

#[component]
pub fn Images() -> Element {
    let mut library = use_media_library();
    let records: Vec<_> = library().of_kind(MediaKind::Image).cloned().collect();

    rsx! {
        div {
            class: "page",
            h2 { "Images" }
            UploadForm {
                kind: MediaKind::Image,
                on_submit: move |record| library.write().apply(LibraryAction::AddImage(record)),
            }
            MediaGallery {
                records,
                empty_hint: "No images uploaded yet.",
            }
        }
    }
}

/// Unknown paths fall through to the image page.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        Images {}
    }
}
