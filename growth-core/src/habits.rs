use anyhow::{Result, bail};

/// Habit options offered when no `habits` list is configured.
pub const DEFAULT_HABITS: &[&str] = &[
    "Read a book",
    "Practice mindfulness",
    "Exercise",
    "Learn something new",
];

/// Separator used when joining checked habits into the `Habits` column.
pub const HABIT_SEPARATOR: &str = ", ";

pub fn default_habits() -> Vec<String> {
    DEFAULT_HABITS.iter().map(|h| h.to_string()).collect()
}

/// The checkbox state of every habit option, in option order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitSelection {
    checked: Vec<(String, bool)>,
}

impl HabitSelection {
    /// Builds a selection from the option list and the names the user ticked.
    ///
    /// Names are matched case-insensitively against `options`. A name that is
    /// not an option is an error: a checkbox can only exist for a listed habit.
    pub fn from_checked(options: &[String], checked: &[String]) -> Result<Self> {
        if let Some(bad) = options.iter().find(|o| o.contains(',')) {
            bail!("habit option '{bad}' must not contain ','");
        }
        for name in checked {
            if !options.iter().any(|o| o.eq_ignore_ascii_case(name.trim())) {
                bail!(
                    "unknown habit '{}'. Options are: {}",
                    name,
                    options.join(HABIT_SEPARATOR)
                );
            }
        }
        let checked = options
            .iter()
            .map(|o| {
                let ticked = checked.iter().any(|c| o.eq_ignore_ascii_case(c.trim()));
                (o.clone(), ticked)
            })
            .collect();
        Ok(Self { checked })
    }

    pub fn checked_names(&self) -> impl Iterator<Item = &str> {
        self.checked
            .iter()
            .filter(|(_, ticked)| *ticked)
            .map(|(name, _)| name.as_str())
    }

    /// Text stored in the `Habits` column: ticked habits in option order.
    pub fn joined(&self) -> String {
        self.checked_names()
            .collect::<Vec<_>>()
            .join(HABIT_SEPARATOR)
    }
}
