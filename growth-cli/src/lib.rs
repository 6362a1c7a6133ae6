mod cli_modes;
mod common;
mod render;

pub use cli_modes::GrowthCli;
pub use common::{BaseCli, CliModeResult, enable_logging};
pub use render::{ChartSize, ColorMode, RenderOptions, Renderer};
