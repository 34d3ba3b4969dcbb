use crate::models::JournalRecord;
use serde_json::{json, Value};
use std::path::Path;

/// Read-only journal entries, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<JournalRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<JournalRecord>) -> Self {
        RecordStore { records }
    }

    /// Load a JSON array of records
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read records file {}: {}", path.display(), e))?;
        let records: Vec<JournalRecord> = serde_json::from_str(&raw)
            .map_err(|e| format!("Invalid records file {}: {}", path.display(), e))?;
        Ok(RecordStore { records })
    }

    /// Entries shipped with the demo frontend
    pub fn sample() -> Self {
        RecordStore::new(vec![
            JournalRecord {
                id: 1,
                title: "Aquarium at night".to_string(),
                date: "2024/10/05".to_string(),
                rating: 5,
                revisit: 5,
                review: "The light-up illumination was beautiful, and watching the fish move around was great fun.".to_string(),
                images: vec!["/static/images/image2.jpg".to_string()],
            },
            JournalRecord {
                id: 2,
                title: "Giant soap bubble workshop".to_string(),
                date: "2024/10/05".to_string(),
                rating: 4,
                revisit: 4,
                review: "We made really big bubbles. Next time I want to try again with friends.".to_string(),
                images: vec!["/static/images/image3.jpg".to_string()],
            },
        ])
    }

    pub fn all(&self) -> &[JournalRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&JournalRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Demo travel booklet, one object per page
pub fn sample_shiori() -> Value {
    json!({
        "page1": {
            "title": "Booklet title",
            "producer": "Producer name"
        },
        "page2": {
            "schedule": "Schedule"
        },
        "page3": {
            "weather": "Sunny",
            "mapUrl": "/static/images/map.png"
        },
        "page4": {
            "memo": "This is a memo"
        }
    })
}
