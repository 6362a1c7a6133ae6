use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the backing file.
///
/// Field names map to the CSV header columns. Nothing here is validated:
/// duplicate dates are allowed and `habits` is free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// What the user learned that day.
    #[serde(rename = "Reflection")]
    pub reflection: String,
    #[serde(rename = "Challenges")]
    pub challenges: String,
    #[serde(rename = "Successes")]
    pub successes: String,
    /// Completed habits joined with `", "`.
    #[serde(rename = "Habits")]
    pub habits: String,
}

impl JournalEntry {
    /// Splits the joined `habits` text back into names. Empty text yields no names.
    pub fn habit_names(&self) -> Vec<&str> {
        self.habits
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect()
    }
}
