use dioxus::prelude::*;

use ui::{use_media_library, MediaGallery};

#[component]
pub fn Home() -> Element {
    let library = use_media_library();
    let records = library().records().to_vec();

    rsx! {
        div {
            class: "page",
            h2 { "Home" }
            p { class: "page-subtitle", "Everything you have uploaded this session." }
            MediaGallery {
                records,
                empty_hint: "Nothing here yet. Upload an image or a video to get started.",
            }
        }
    }
}
