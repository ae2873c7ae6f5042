//! Cards and galleries for committed uploads.

use dioxus::prelude::*;
use store::{MediaKind, MediaRecord};

const GALLERY_CSS: Asset = asset!("/assets/styling/gallery.css");

/// Grid of records with an empty-state hint.
#[component]
pub fn MediaGallery(records: Vec<MediaRecord>, empty_hint: String) -> Element {
    rsx! {
        document::Stylesheet { href: GALLERY_CSS }

        if records.is_empty() {
            div {
                class: "gallery-empty",
                p { "{empty_hint}" }
            }
        } else {
            div {
                class: "gallery",
                for record in records.iter() {
                    MediaCard { key: "{record.id}", record: record.clone() }
                }
            }
        }
    }
}

#[component]
pub fn MediaCard(record: MediaRecord) -> Element {
    rsx! {
        div {
            class: "media-card",
            div {
                class: "media-card-body",
                if record.kind == MediaKind::Video {
                    if let Some(file) = record.files.first() {
                        if let Some(ref url) = file.url {
                            video { class: "media-card-video", controls: true, src: "{url}" }
                        } else {
                            div { class: "media-card-fallback", "{file.name}" }
                        }
                    }
                } else {
                    div {
                        class: "media-card-images",
                        for file in record.files.iter() {
                            div {
                                key: "{file.name}",
                                class: "media-card-cell",
                                if let Some(ref url) = file.url {
                                    img { class: "media-card-image", src: "{url}", alt: "{file.name}" }
                                } else {
                                    div { class: "media-card-fallback", "{file.name}" }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "media-card-meta",
                h3 { "{record.title}" }
                p { "{record.description}" }
            }
        }
    }
}
