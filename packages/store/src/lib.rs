pub mod draft;
pub mod library;
pub mod models;
pub mod record;
pub mod validate;

pub use draft::{DraftAction, UploadDraft};
pub use library::{LibraryAction, MediaLibrary};
pub use models::{MediaFile, MediaKind, MediaRecord};
pub use validate::UploadError;
