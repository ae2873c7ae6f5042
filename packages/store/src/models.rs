//! # Domain models for uploaded media
//!
//! Defines the data structures shared by the upload forms and the listing
//! pages. These types are `Serialize + Deserialize` so drafts and records can
//! be snapshotted or shipped across a boundary without further conversion.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`MediaKind`] | Which upload path a form or record belongs to. Images allow multiple files per record; a video record carries exactly one file. |
//! | [`MediaFile`] | One selected file: its name, declared MIME type, and an optional preview URL derived from the file's bytes by the UI layer. |
//! | [`MediaRecord`] | A committed upload. Only constructed from input that passed every validation rule; immutable afterwards. |
//!
//! ## Helper functions
//!
//! - [`mime_for_name`] — maps a file extension to a MIME type, used when the
//!   file source does not declare one.

use serde::{Deserialize, Serialize};

/// The two media categories the gallery accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Display label used in headings and toast titles.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/png,image/jpeg,image/webp,image/*",
            MediaKind::Video => "video/mp4,video/x-m4v,video/*",
        }
    }

    /// Whether a single submission may carry more than one file.
    pub fn allows_multiple(&self) -> bool {
        matches!(self, MediaKind::Image)
    }
}

/// One file selected in the picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    /// File name as reported by the picker: "beach.mp4"
    pub name: String,
    /// Declared media type: "video/mp4"
    pub mime: String,
    /// Object/preview URL, None on targets without a URL factory
    pub url: Option<String>,
}

/// A committed upload shown on the listing pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Timestamp-derived identifier, unique within the process
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: MediaKind,
    /// The validated file selection, attached unmodified
    pub files: Vec<MediaFile>,
}

/// Derive a MIME type from a file name's extension.
pub fn mime_for_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "webm" => "video/webm",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
