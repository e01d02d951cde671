use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cmdsplit")]
#[command(about = "Split #[tauri::command] functions into per-module files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the monolithic source backup
    #[arg(long, default_value = "src/lib.rs.backup")]
    pub source: PathBuf,

    /// Root directory that receives one <module>/commands.rs per group
    #[arg(long = "out-dir", default_value = "src/modules")]
    pub out_dir: PathBuf,
}
