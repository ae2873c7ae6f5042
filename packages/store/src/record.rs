//! Record construction and identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::draft::UploadDraft;
use crate::models::{MediaKind, MediaRecord};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh record identifier.
///
/// Identifiers are millisecond timestamps, bumped past the last issued value
/// when the clock has not moved, so ids are strictly increasing within the
/// process.
pub fn next_record_id() -> String {
    let now = now_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .unwrap_or(now);
    let id = if now > prev { now } else { prev + 1 };
    id.to_string()
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl MediaRecord {
    /// Build a record from a draft that already passed validation.
    ///
    /// Attaches the selected files unmodified; the only side effect is
    /// identifier generation.
    pub fn from_draft(kind: MediaKind, draft: &UploadDraft) -> Self {
        Self {
            id: next_record_id(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            kind,
            files: draft.files.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftAction;
    use crate::models::MediaFile;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids: Vec<u64> = (0..100)
            .map(|_| next_record_id().parse().unwrap())
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "{} should be greater than {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_from_draft_copies_fields() {
        let mut draft = UploadDraft::default();
        draft.apply(DraftAction::TitleChanged("Trip".to_string()));
        draft.apply(DraftAction::DescriptionChanged("Beach day".to_string()));
        draft.apply(DraftAction::FilesSelected(vec![MediaFile {
            name: "trip.mp4".to_string(),
            mime: "video/mp4".to_string(),
            url: None,
        }]));

        let record = MediaRecord::from_draft(MediaKind::Video, &draft);
        assert_eq!(record.title, "Trip");
        assert_eq!(record.description, "Beach day");
        assert_eq!(record.kind, MediaKind::Video);
        assert_eq!(record.files, draft.files);
        assert!(!record.id.is_empty());

        let again = MediaRecord::from_draft(MediaKind::Video, &draft);
        assert_ne!(record.id, again.id);
    }
}
