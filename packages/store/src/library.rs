//! In-memory collection of committed uploads.
//!
//! Append-only and insertion-ordered. Records never change or disappear once
//! added; the collection lives for the lifetime of the page.

use serde::{Deserialize, Serialize};

use crate::models::{MediaKind, MediaRecord};

/// The client-side media state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaLibrary {
    records: Vec<MediaRecord>,
}

/// A committed upload being added to the library.
#[derive(Clone, Debug, PartialEq)]
pub enum LibraryAction {
    AddImage(MediaRecord),
    AddVideo(MediaRecord),
}

impl MediaLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Never fails.
    pub fn apply(&mut self, action: LibraryAction) {
        match action {
            LibraryAction::AddImage(record) | LibraryAction::AddVideo(record) => {
                self.records.push(record)
            }
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    /// Records of one kind, insertion order preserved.
    pub fn of_kind(&self, kind: MediaKind) -> impl Iterator<Item = &MediaRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftAction, UploadDraft};
    use crate::models::MediaFile;

    fn record(title: &str, kind: MediaKind) -> MediaRecord {
        let mut draft = UploadDraft::default();
        draft.apply(DraftAction::TitleChanged(title.to_string()));
        draft.apply(DraftAction::DescriptionChanged("d".to_string()));
        draft.apply(DraftAction::FilesSelected(vec![MediaFile {
            name: "f".to_string(),
            mime: match kind {
                MediaKind::Image => "image/png".to_string(),
                MediaKind::Video => "video/mp4".to_string(),
            },
            url: None,
        }]));
        MediaRecord::from_draft(kind, &draft)
    }

    #[test]
    fn test_append_preserves_order() {
        let mut library = MediaLibrary::new();
        assert!(library.is_empty());

        library.apply(LibraryAction::AddVideo(record("first", MediaKind::Video)));
        library.apply(LibraryAction::AddImage(record("second", MediaKind::Image)));
        library.apply(LibraryAction::AddVideo(record("third", MediaKind::Video)));

        assert_eq!(library.len(), 3);
        let titles: Vec<&str> = library.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_of_kind_filters() {
        let mut library = MediaLibrary::new();
        library.apply(LibraryAction::AddVideo(record("v1", MediaKind::Video)));
        library.apply(LibraryAction::AddImage(record("i1", MediaKind::Image)));
        library.apply(LibraryAction::AddVideo(record("v2", MediaKind::Video)));

        let videos: Vec<&str> = library
            .of_kind(MediaKind::Video)
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(videos, ["v1", "v2"]);
        assert_eq!(library.of_kind(MediaKind::Image).count(), 1);
    }
}
