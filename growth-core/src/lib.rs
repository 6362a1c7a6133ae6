pub mod config;
pub mod dates;
pub mod entry;
pub mod growth;
pub mod habits;
pub mod records;
pub mod reflection;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use entry::JournalEntry;
pub use growth::{Growth, HabitsSaved};
pub use habits::HabitSelection;
pub use records::{ProgressPoint, RECENT_COUNT, RecordSet};
pub use reflection::ReflectionInput;
pub use store::Store;
pub use view::View;
