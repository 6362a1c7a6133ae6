use crate::habits::default_habits;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file holding every journal entry.
    pub data_file: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Habit checkbox options, in display order.
    pub habits: Vec<String>,
    /// Format used when printing dates.
    pub date_format: String,
    /// Extra formats accepted for `--date`, tried after `%Y-%m-%d`.
    pub input_date_formats: Vec<String>,
    /// The day treated as "today" for habit tracking and relative dates.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_file: Option<PathBuf>,
    editor: Option<String>,
    habits: Option<Vec<String>>,
    date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// An unreadable or invalid config file is logged and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let habits = file_config
            .habits
            .map(|hs| {
                hs.into_iter()
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
                    .filter(|h| {
                        // Commas would be split apart when read back from the Habits column.
                        let ok = !h.contains(',');
                        if !ok {
                            warn!(habit = %h, "skipping habit option containing ','");
                        }
                        ok
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|hs| !hs.is_empty())
            .unwrap_or_else(default_habits);

        Self {
            data_file: file_config
                .data_file
                .unwrap_or_else(Self::default_data_file),
            editor: file_config.editor,
            habits,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%A, %d %b %Y".to_string()),
            input_date_formats: file_config
                .input_date_formats
                .unwrap_or_else(|| vec!["%d/%m/%Y".to_string()]),
            reference_date: Local::now().date_naive(),
        }
    }

    /// Default data file: `{data_dir}/growth/data.csv`
    /// - macOS:   `~/Library/Application Support/growth/data.csv`
    /// - Linux:   `$XDG_DATA_HOME/growth/data.csv` or `~/.local/share/growth/data.csv`
    /// - Windows: `%APPDATA%\growth\data.csv`
    fn default_data_file() -> PathBuf {
        match BaseDirs::new() {
            Some(base) => base.data_dir().join("growth").join("data.csv"),
            None => PathBuf::from("./data.csv"),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("growth").join("config.toml"));
            v.push(b.config_dir().join("growth").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::DEFAULT_HABITS;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("growth").join("config.toml");
            let expected_native = b.config_dir().join("growth").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn empty_file_uses_defaults() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::from_file_config(fc);
        assert_eq!(config.habits, DEFAULT_HABITS);
        assert!(config.data_file.ends_with("data.csv"));
        assert_eq!(config.input_date_formats, vec!["%d/%m/%Y".to_string()]);
    }

    #[test]
    fn parse_file_accepts_data_file_and_habits() {
        let toml = r#"
            data_file = "/tmp/growth/journal.csv"
            editor = "hx"
            habits = ["Run", "  ", "Write"]
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.data_file, Path::new("/tmp/growth/journal.csv"));
        assert_eq!(config.editor.as_deref(), Some("hx"));
        assert_eq!(config.habits, vec!["Run".to_string(), "Write".to_string()]);
    }

    #[test]
    fn blank_habit_list_falls_back_to_defaults() {
        let config = Config::from_file_config(Config::parse_file("habits = []").unwrap());
        assert_eq!(config.habits, DEFAULT_HABITS);
    }

    #[test]
    fn habit_options_with_commas_are_dropped() {
        let toml = r#"habits = ["Read, write", "Run"]"#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.habits, vec!["Run".to_string()]);
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("habits = 3").is_err());
    }
}
