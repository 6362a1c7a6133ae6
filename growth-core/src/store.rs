//! CSV persistence for the record set.
//!
//! The whole file is read on load and rewritten on save. There is no locking
//! and no temp-file swap: concurrent writers race and the last one wins.
use crate::entry::JournalEntry;
use crate::records::RecordSet;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the backing file.
    ///
    /// A missing file means no data yet and yields an empty [`RecordSet`].
    /// Any other failure, including malformed rows, is returned as an error.
    pub fn load(&self) -> Result<RecordSet> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(RecordSet::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("opening {}", self.path.display()));
            }
        };

        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
        let mut entries = Vec::new();
        for row in reader.deserialize::<JournalEntry>() {
            let entry = row.with_context(|| format!("parsing {}", self.path.display()))?;
            entries.push(entry);
        }
        debug!(path = %self.path.display(), count = entries.len(), "loaded records");
        Ok(RecordSet::new(entries))
    }

    /// Overwrites the backing file with the header and every record.
    pub fn save(&self, records: &RecordSet) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }

        // Header is written by hand so an empty record set still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        writer
            .write_record(RecordSet::COLUMNS)
            .with_context(|| format!("writing header to {}", self.path.display()))?;
        for entry in records.entries() {
            writer
                .serialize(entry)
                .with_context(|| format!("writing record to {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flushing {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}
