//! Submission validation.
//!
//! Rules run in a fixed order and stop at the first failure: title,
//! description, file count, then file types. Acceptance is all-or-nothing —
//! one file with an unsupported type rejects the entire selection.
//!
//! On [`UploadError::TooManyFiles`] and [`UploadError::UnsupportedType`] the
//! caller is expected to clear the preview and reset the file input control
//! so a later selection is not blocked by stale picker state.

use thiserror::Error;

use crate::draft::UploadDraft;
use crate::models::{MediaFile, MediaKind};

/// Why a selection or submission was rejected.
///
/// Display strings are user-facing; they are shown verbatim in toasts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Enter a title")]
    EmptyTitle,
    #[error("Enter a description")]
    EmptyDescription,
    #[error("Choose a file before submitting")]
    NoFileSelected,
    #[error("You can only select up to 1 video")]
    TooManyFiles,
    #[error("Please select only supported file types")]
    UnsupportedType,
}

/// Declared MIME types accepted for each media kind.
pub fn allowed_types(kind: MediaKind) -> &'static [&'static str] {
    match kind {
        MediaKind::Video => &["video/mp4", "video/x-m4v", "video/webm", "video/*"],
        MediaKind::Image => &["image/png", "image/jpeg", "image/webp", "image/*"],
    }
}

/// Validate a file selection at pick time.
///
/// An empty selection is fine here; it only becomes an error on submit.
pub fn check_files(kind: MediaKind, files: &[MediaFile]) -> Result<(), UploadError> {
    if files.is_empty() {
        return Ok(());
    }
    if !kind.allows_multiple() && files.len() > 1 {
        return Err(UploadError::TooManyFiles);
    }
    for file in files {
        if !allowed_types(kind).contains(&file.mime.as_str()) {
            return Err(UploadError::UnsupportedType);
        }
    }
    Ok(())
}

/// Validate a draft at submit time.
pub fn validate(kind: MediaKind, draft: &UploadDraft) -> Result<(), UploadError> {
    if draft.title.trim().is_empty() {
        return Err(UploadError::EmptyTitle);
    }
    if draft.description.trim().is_empty() {
        return Err(UploadError::EmptyDescription);
    }
    if draft.files.is_empty() {
        return Err(UploadError::NoFileSelected);
    }
    check_files(kind, &draft.files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftAction;

    fn file(name: &str, mime: &str) -> MediaFile {
        MediaFile {
            name: name.to_string(),
            mime: mime.to_string(),
            url: None,
        }
    }

    fn draft(title: &str, description: &str, files: Vec<MediaFile>) -> UploadDraft {
        let mut d = UploadDraft::default();
        d.apply(DraftAction::TitleChanged(title.to_string()));
        d.apply(DraftAction::DescriptionChanged(description.to_string()));
        d.apply(DraftAction::FilesSelected(files));
        d
    }

    #[test]
    fn test_valid_video_submission() {
        let d = draft("Trip", "Beach day", vec![file("trip.mp4", "video/mp4")]);
        assert_eq!(validate(MediaKind::Video, &d), Ok(()));
    }

    #[test]
    fn test_empty_title_rejected_first() {
        let d = draft("", "x", vec![]);
        assert_eq!(validate(MediaKind::Video, &d), Err(UploadError::EmptyTitle));

        // Whitespace-only counts as empty
        let d = draft("   ", "x", vec![file("a.mp4", "video/mp4")]);
        assert_eq!(validate(MediaKind::Video, &d), Err(UploadError::EmptyTitle));
    }

    #[test]
    fn test_empty_description_rejected() {
        let d = draft("x", " \t ", vec![file("a.mp4", "video/mp4")]);
        assert_eq!(
            validate(MediaKind::Video, &d),
            Err(UploadError::EmptyDescription)
        );
    }

    #[test]
    fn test_missing_file_rejected() {
        let d = draft("x", "y", vec![]);
        assert_eq!(
            validate(MediaKind::Video, &d),
            Err(UploadError::NoFileSelected)
        );
    }

    #[test]
    fn test_two_videos_rejected() {
        let files = vec![file("a.mp4", "video/mp4"), file("b.mp4", "video/mp4")];
        assert_eq!(
            check_files(MediaKind::Video, &files),
            Err(UploadError::TooManyFiles)
        );
        let d = draft("x", "y", files);
        assert_eq!(
            validate(MediaKind::Video, &d),
            Err(UploadError::TooManyFiles)
        );
    }

    #[test]
    fn test_multiple_images_allowed() {
        let files = vec![file("a.png", "image/png"), file("b.jpg", "image/jpeg")];
        assert_eq!(check_files(MediaKind::Image, &files), Ok(()));
        let d = draft("x", "y", files);
        assert_eq!(validate(MediaKind::Image, &d), Ok(()));
    }

    #[test]
    fn test_one_bad_type_rejects_whole_selection() {
        // gif is outside the allowed image set
        let files = vec![file("a.png", "image/png"), file("b.gif", "image/gif")];
        assert_eq!(
            check_files(MediaKind::Image, &files),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn test_gif_rejected_for_images() {
        let d = draft("x", "y", vec![file("b.gif", "image/gif")]);
        assert_eq!(
            validate(MediaKind::Image, &d),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn test_image_not_accepted_on_video_path() {
        let files = vec![file("a.png", "image/png")];
        assert_eq!(
            check_files(MediaKind::Video, &files),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn test_empty_selection_ok_at_pick_time() {
        assert_eq!(check_files(MediaKind::Video, &[]), Ok(()));
        assert_eq!(check_files(MediaKind::Image, &[]), Ok(()));
    }
}
