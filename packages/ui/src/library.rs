use dioxus::prelude::*;
use store::MediaLibrary;

/// Get the app-wide media library.
/// Provided by the authenticated shell; updates re-render every reader.
pub fn use_media_library() -> Signal<MediaLibrary> {
    use_context::<Signal<MediaLibrary>>()
}
