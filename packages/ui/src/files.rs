//! Preview URLs for selected files.

/// Build an object URL for a file's bytes so the browser can render a
/// preview. Returns None on targets without a URL factory.
#[cfg(target_arch = "wasm32")]
pub fn preview_url(bytes: &[u8], mime: &str) -> Option<String> {
    use js_sys::{Array, Uint8Array};
    use web_sys::{Blob, BlobPropertyBag, Url};

    let buffer = Uint8Array::from(bytes);
    let parts = Array::new();
    parts.push(&buffer);

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()?;
    Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preview_url(_bytes: &[u8], _mime: &str) -> Option<String> {
    None
}
