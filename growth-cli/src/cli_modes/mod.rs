mod growth_cli;

pub use growth_cli::GrowthCli;
