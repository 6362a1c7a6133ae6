use crate::{
    Config,
    dates::parse_date,
    habits::HabitSelection,
    records::RecordSet,
    reflection::ReflectionInput,
    store::Store,
};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of a habit submission.
#[derive(Debug)]
pub struct HabitsSaved {
    pub records: RecordSet,
    /// Entries dated today whose habits were overwritten. Zero means nothing changed.
    pub updated: usize,
}

/// Application handle: configuration plus the backing store.
///
/// The record set itself is not held here. Each handler takes the current
/// state, applies one user action, persists, and hands the new state back.
pub struct Growth {
    pub config: Config,
    pub store: Store,
}

impl Growth {
    /// Creates a new `Growth` instance, loading configuration from standard paths.
    ///
    /// `data_file` replaces the configured backing file when given.
    pub fn new(data_file: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(path) = data_file {
            config.data_file = path;
        }
        Ok(Self::with_config(config))
    }

    /// Creates a new `Growth` instance with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        let store = Store::new(config.data_file.clone());
        Self { config, store }
    }

    /// The day habits are tracked against.
    pub fn today(&self) -> NaiveDate {
        self.config.reference_date
    }

    pub fn load(&self) -> Result<RecordSet> {
        self.store.load()
    }

    pub fn persist(&self, records: &RecordSet) -> Result<()> {
        self.store.save(records)
    }

    /// Resolves a date typed by the user (keywords, ISO or a configured format).
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate> {
        parse_date(input, self.config.reference_date, &self.config.input_date_formats)
            .ok_or_else(|| anyhow!("'{input}' is not a valid date"))
    }

    pub fn habit_selection(&self, checked: &[String]) -> Result<HabitSelection> {
        HabitSelection::from_checked(&self.config.habits, checked)
    }

    /// Appends a reflection and persists the result.
    pub fn submit_reflection(
        &self,
        mut records: RecordSet,
        input: ReflectionInput,
    ) -> Result<RecordSet> {
        let date = input.date;
        records.append_reflection(input);
        self.persist(&records)?;
        info!(%date, total = records.len(), "reflection saved");
        Ok(records)
    }

    /// Writes the selection into today's entries and persists the result.
    ///
    /// The file is saved even when no entry is dated today.
    pub fn submit_habits(
        &self,
        mut records: RecordSet,
        selection: &HabitSelection,
    ) -> Result<HabitsSaved> {
        let today = self.today();
        let updated = records.apply_habits(today, selection);
        if updated == 0 {
            warn!(%today, "no entry for today, habits were not recorded");
        }
        self.persist(&records)?;
        info!(%today, updated, habits = %selection.joined(), "habits saved");
        Ok(HabitsSaved { records, updated })
    }

    /// Final save made when the session ends.
    pub fn close(&self, records: &RecordSet) -> Result<()> {
        self.persist(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mk_config;
    use std::fs;
    use tempfile::tempdir;

    fn mk_growth(today: NaiveDate) -> (Growth, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().join("growth/data.csv"), Some(today));
        (Growth::with_config(config), tmp)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn learned(date: NaiveDate, text: &str) -> ReflectionInput {
        ReflectionInput {
            date,
            reflection: text.to_string(),
            challenges: String::new(),
            successes: String::new(),
        }
    }

    #[test]
    fn submit_reflection_appends_and_persists() {
        let (growth, _tmp) = mk_growth(d(2024, 1, 1));
        let records = growth.load().unwrap();
        assert!(records.is_empty());

        let records = growth
            .submit_reflection(records, learned(d(2024, 1, 1), "Learned X"))
            .unwrap();

        assert_eq!(records.len(), 1);
        let on_disk = growth.load().unwrap();
        assert_eq!(on_disk, records);
        assert_eq!(on_disk.entries()[0].reflection, "Learned X");
        assert_eq!(on_disk.entries()[0].habits, "");
    }

    #[test]
    fn submit_habits_updates_todays_entry_on_disk() {
        let today = d(2024, 6, 1);
        let (growth, _tmp) = mk_growth(today);
        let records = growth
            .submit_reflection(RecordSet::default(), learned(today, "Today"))
            .unwrap();
        let selection = growth
            .habit_selection(&["Read a book".to_string(), "Exercise".to_string()])
            .unwrap();

        let saved = growth.submit_habits(records, &selection).unwrap();

        assert_eq!(saved.updated, 1);
        assert_eq!(
            growth.load().unwrap().entries()[0].habits,
            "Read a book, Exercise"
        );
    }

    #[test]
    fn submit_habits_without_todays_entry_is_a_no_op() {
        let today = d(2024, 6, 1);
        let (growth, _tmp) = mk_growth(today);
        let records = growth
            .submit_reflection(RecordSet::default(), learned(d(2024, 5, 31), "Yesterday"))
            .unwrap();
        let before = records.clone();
        let selection = growth.habit_selection(&["Exercise".to_string()]).unwrap();

        let saved = growth.submit_habits(records, &selection).unwrap();

        assert_eq!(saved.updated, 0);
        assert_eq!(saved.records, before);
        assert_eq!(growth.load().unwrap(), before);
    }

    #[test]
    fn close_writes_header_even_without_entries() {
        let (growth, _tmp) = mk_growth(d(2024, 6, 1));
        growth.close(&RecordSet::default()).unwrap();
        let content = fs::read_to_string(&growth.config.data_file).unwrap();
        assert!(content.starts_with("Date,Reflection,Challenges,Successes,Habits"));
    }

    #[test]
    fn new_applies_data_file_override() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("elsewhere.csv");
        let growth = Growth::new(Some(file.clone())).unwrap();
        assert_eq!(growth.config.data_file, file);
        assert_eq!(growth.store.path(), file.as_path());
    }

    #[test]
    fn parse_date_uses_reference_date_and_formats() {
        let (growth, _tmp) = mk_growth(d(2024, 6, 1));
        assert_eq!(growth.parse_date("yesterday").unwrap(), d(2024, 5, 31));
        assert_eq!(growth.parse_date("02/06/2024").unwrap(), d(2024, 6, 2));
        assert!(growth.parse_date("someday").is_err());
    }
}
