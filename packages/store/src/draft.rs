//! Pending upload state and its reducer.
//!
//! An [`UploadDraft`] holds everything the user has typed or selected but not
//! yet submitted. All mutation goes through [`UploadDraft::apply`] with a
//! [`DraftAction`], one variant per field, so there is a single place where
//! the pending state can change.

use serde::{Deserialize, Serialize};

use crate::models::MediaFile;

/// Form state for an upload that has not been submitted yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    /// Current file selection, shown as a preview until submit.
    pub files: Vec<MediaFile>,
}

/// One edit to the pending upload.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftAction {
    TitleChanged(String),
    DescriptionChanged(String),
    FilesSelected(Vec<MediaFile>),
    PreviewCleared,
}

impl UploadDraft {
    /// Apply one action to the draft.
    ///
    /// `PreviewCleared` with no selection is a no-op.
    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::TitleChanged(title) => self.title = title,
            DraftAction::DescriptionChanged(description) => self.description = description,
            DraftAction::FilesSelected(files) => self.files = files,
            DraftAction::PreviewCleared => self.files.clear(),
        }
    }

    /// Whether any file is currently selected.
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> MediaFile {
        MediaFile {
            name: name.to_string(),
            mime: mime.to_string(),
            url: None,
        }
    }

    #[test]
    fn test_field_edits() {
        let mut draft = UploadDraft::default();
        draft.apply(DraftAction::TitleChanged("Trip".to_string()));
        draft.apply(DraftAction::DescriptionChanged("Beach day".to_string()));
        assert_eq!(draft.title, "Trip");
        assert_eq!(draft.description, "Beach day");
        assert!(!draft.has_files());
    }

    #[test]
    fn test_selection_replaces_previous() {
        let mut draft = UploadDraft::default();
        draft.apply(DraftAction::FilesSelected(vec![file("a.mp4", "video/mp4")]));
        draft.apply(DraftAction::FilesSelected(vec![file("b.mp4", "video/mp4")]));
        assert_eq!(draft.files.len(), 1);
        assert_eq!(draft.files[0].name, "b.mp4");
    }

    #[test]
    fn test_clear_preview_is_idempotent() {
        let mut draft = UploadDraft::default();

        // Clearing with nothing selected does nothing
        draft.apply(DraftAction::PreviewCleared);
        assert_eq!(draft, UploadDraft::default());

        draft.apply(DraftAction::FilesSelected(vec![file("a.mp4", "video/mp4")]));
        draft.apply(DraftAction::PreviewCleared);
        assert!(!draft.has_files());

        draft.apply(DraftAction::PreviewCleared);
        assert!(!draft.has_files());
    }

    #[test]
    fn test_clear_preview_keeps_text_fields() {
        let mut draft = UploadDraft::default();
        draft.apply(DraftAction::TitleChanged("Trip".to_string()));
        draft.apply(DraftAction::FilesSelected(vec![file("a.mp4", "video/mp4")]));
        draft.apply(DraftAction::PreviewCleared);
        assert_eq!(draft.title, "Trip");
    }
}
