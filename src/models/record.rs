use serde::{Deserialize, Serialize};

/// One journal entry ("kiroku") written after a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalRecord {
    pub id: u32,
    pub title: String,
    /// Display date as entered by the author, e.g. `2024/10/05`
    pub date: String,
    /// 1-5 stars
    pub rating: u8,
    /// How much the author wants to go back, 1-5
    pub revisit: u8,
    pub review: String,
    #[serde(default)]
    pub images: Vec<String>,
}
