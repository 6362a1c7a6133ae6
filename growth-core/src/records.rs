//! The in-memory record set and the pure operations on it.
//!
//! Nothing in this module touches the disk; see [`crate::store`] for that.
use crate::entry::JournalEntry;
use crate::habits::HabitSelection;
use crate::reflection::ReflectionInput;
use chrono::NaiveDate;

/// Number of entries shown under "Recent Reflections".
pub const RECENT_COUNT: usize = 3;

/// Ordered collection of every journal entry. Insertion order is file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    entries: Vec<JournalEntry>,
}

/// One point of the progress chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    /// 1-based row position of the record, i.e. the running entry count.
    pub entries: usize,
}

impl RecordSet {
    /// Column header of the backing file, in order.
    pub const COLUMNS: [&'static str; 5] = ["Date", "Reflection", "Challenges", "Successes", "Habits"];

    pub fn new(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &Self::COLUMNS
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new entry from the reflection form. Habits start empty.
    pub fn append_reflection(&mut self, input: ReflectionInput) -> &JournalEntry {
        self.entries.push(JournalEntry {
            date: input.date,
            reflection: input.reflection,
            challenges: input.challenges,
            successes: input.successes,
            habits: String::new(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Overwrites the habits of every entry dated `today`.
    ///
    /// Returns how many entries were updated. When none is dated `today`
    /// nothing changes and no entry is created, so habits can only be saved
    /// after today's reflection exists.
    pub fn apply_habits(&mut self, today: NaiveDate, selection: &HabitSelection) -> usize {
        let joined = selection.joined();
        let mut updated = 0;
        for entry in self.entries.iter_mut().filter(|e| e.date == today) {
            entry.habits = joined.clone();
            updated += 1;
        }
        updated
    }

    /// The last `n` entries in insertion order, or all of them when fewer exist.
    pub fn recent(&self, n: usize) -> &[JournalEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Chart points: X is the entry date, Y its 1-based position.
    pub fn progress(&self) -> Vec<ProgressPoint> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| ProgressPoint {
                date: e.date,
                entries: i + 1,
            })
            .collect()
    }
}
