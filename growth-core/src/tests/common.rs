use crate::Config;
use crate::habits::default_habits;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_file: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    Config {
        data_file,
        editor: None,
        habits: default_habits(),
        date_format: "%A, %d %b %Y".to_string(),
        input_date_formats: ["%d/%m/%Y".to_string()].to_vec(),
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
    }
}
