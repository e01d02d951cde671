use anyhow::Result;
use clap::Parser;
use cmdsplit::cli::Cli;
use cmdsplit::commands::split::{handle_split, SplitConfig};
use cmdsplit::registry::Registry;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = SplitConfig {
        source: cli.source,
        out_dir: cli.out_dir,
    };
    let registry = Registry::tauri_commands();

    let report = handle_split(&config, &registry)?;

    println!(
        "\nDone: {} extracted, {} missing, {} file(s) written",
        report.extracted,
        report.missing,
        report.files_written.len()
    );
    Ok(())
}
