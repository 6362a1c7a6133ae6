use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::ColorMode;

/// growth — Growth mindset journal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct BaseCli {
    /// Prints the data file location
    #[arg(long, short, global = true)]
    pub path: bool,
    /// Use this CSV file instead of the configured one.
    #[arg(long, env = "GROWTH_FILE", global = true)]
    pub file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub view: Option<ViewCommand>,
}

#[derive(Subcommand, Debug)]
pub enum ViewCommand {
    /// Recent reflections and the progress chart (default).
    Dashboard,
    /// Save a reflection. Opens your $EDITOR when no text is given.
    Reflect(ReflectArgs),
    /// Tick off today's habits (e.g. `growth habits -c "Read a book" -c Exercise`).
    Habits(HabitsArgs),
    /// The progress chart on its own.
    Progress,
}

#[derive(Args, Debug, Default)]
pub struct ReflectArgs {
    /// Entry date: `today`, `yesterday`, `2024-01-01` or a configured format.
    #[arg(long, short, default_value = "today")]
    pub date: String,
    /// What did you learn today?
    #[arg(long, short)]
    pub learned: Option<String>,
    /// What challenges did you face?
    #[arg(long)]
    pub challenges: Option<String>,
    /// What were your successes?
    #[arg(long)]
    pub successes: Option<String>,
}

impl ReflectArgs {
    pub fn has_text(&self) -> bool {
        self.learned.is_some() || self.challenges.is_some() || self.successes.is_some()
    }
}

#[derive(Args, Debug, Default)]
pub struct HabitsArgs {
    /// A habit completed today. Repeat for each one.
    #[arg(long = "check", short = 'c')]
    pub checked: Vec<String>,
    /// Save with no habit checked, clearing today's habits.
    #[arg(long, conflicts_with = "checked")]
    pub clear: bool,
}

impl HabitsArgs {
    /// Without `--check` or `--clear` the view only shows the checklist.
    pub fn is_submit(&self) -> bool {
        self.clear || !self.checked.is_empty()
    }
}

impl BaseCli {
    pub fn new() -> Self {
        BaseCli::parse()
    }
}
