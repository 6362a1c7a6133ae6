mod base_cli;
mod cli_mode;
mod editor_utils;
mod logging;

pub use base_cli::{BaseCli, HabitsArgs, ReflectArgs, ViewCommand};
pub use cli_mode::CliModeResult;
pub use editor_utils::{edit_template, resolve_editor};
pub use logging::enable_logging;
