mod chart;
mod color_mode;
mod renderer;
mod theme;

pub use chart::ChartSize;
pub use color_mode::ColorMode;
pub use renderer::{RenderOptions, Renderer};
