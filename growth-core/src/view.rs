use strum_macros::{Display, EnumIter};

/// The four mutually exclusive screens of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display)]
pub enum View {
    #[default]
    Dashboard,
    #[strum(serialize = "Daily Reflections")]
    DailyReflections,
    #[strum(serialize = "Habit Tracker")]
    HabitTracker,
    #[strum(serialize = "Progress Tracker")]
    ProgressTracker,
}

impl View {
    /// One-line description printed under the view heading.
    pub fn blurb(self) -> Option<&'static str> {
        match self {
            View::Dashboard => None,
            View::DailyReflections => {
                Some("Reflect on your learning experiences, challenges, and successes.")
            }
            View::HabitTracker => Some("Track your daily habits related to growth mindset."),
            View::ProgressTracker => Some("Track your progress over time."),
        }
    }
}
