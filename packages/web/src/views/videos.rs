use dioxus::prelude::*;

use store::{LibraryAction, MediaKind};
use ui::{use_media_library, MediaGallery, UploadForm};

#[component]
pub fn Videos() -> Element {
    let mut library = use_media_library();
    let records: Vec<_> = library().of_kind(MediaKind::Video).cloned().collect();

    rsx! {
        div {
            class: "page",
            h2 { "Videos" }
            UploadForm {
                kind: MediaKind::Video,
                on_submit: move |record| library.write().apply(LibraryAction::AddVideo(record)),
            }
            MediaGallery {
                records,
                empty_hint: "No videos uploaded yet.",
            }
        }
    }
}
