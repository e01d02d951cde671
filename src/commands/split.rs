//! The split command: drives extraction over the whole registry and
//! writes one `commands.rs` per module group.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::emit;
use crate::extract;
use crate::io;
use crate::registry::Registry;
use crate::rewrite;

pub struct SplitConfig {
    /// Monolithic source backup to read. Missing file is the one fatal
    /// precondition of a run.
    pub source: PathBuf,
    /// Root directory receiving one `<module>/commands.rs` per group.
    pub out_dir: PathBuf,
}

/// Per-run counts for the console summary and for tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub extracted: usize,
    pub missing: usize,
    pub files_written: Vec<PathBuf>,
}

/// Runs the full pipeline. A name with no match in the source is logged
/// and skipped; only the missing source file aborts the run.
pub fn handle_split(config: &SplitConfig, registry: &Registry) -> Result<SplitReport> {
    if !io::file_exists(&config.source) {
        anyhow::bail!("source file not found: {}", config.source.display());
    }

    let source = io::read_file(&config.source)
        .with_context(|| format!("failed to read {}", config.source.display()))?;

    let mut report = SplitReport::default();

    for group in emit::partition(registry) {
        println!("\nProcessing module: {}", group.module);
        let mut blocks = Vec::new();

        for command in &group.commands {
            match extract::extract_function(&source, command) {
                Ok(Some(block)) => {
                    log::debug!("`{command}` spans {} bytes", block.len());
                    blocks.push(rewrite::make_public(block));
                    println!("  {} Extracted: {command}", "✓".green());
                    report.extracted += 1;
                }
                Ok(None) => {
                    println!("  {} Not found: {command}", "✗".red());
                    report.missing += 1;
                }
                Err(err) => {
                    log::warn!("skipping `{command}`: {err}");
                    println!("  {} Skipped: {command} ({err})", "✗".red());
                    report.missing += 1;
                }
            }
        }

        // Groups with nothing extracted produce no file.
        if blocks.is_empty() {
            continue;
        }

        let path = emit::module_path(&config.out_dir, &group.module);
        if let Some(parent) = path.parent() {
            io::ensure_dir(parent)?;
        }
        io::write_file(&path, &emit::render_module(&blocks))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("  {} Written to: {}", "✓".green(), path.display());
        report.files_written.push(path);
    }

    Ok(report)
}
