use anyhow::Result;
use growth_cli::{BaseCli, GrowthCli, enable_logging};
use growth_core::Growth;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("growth: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = BaseCli::new();
    enable_logging();

    let growth = Growth::new(cli.file.clone())?;
    GrowthCli::new(cli, growth).run()
}
