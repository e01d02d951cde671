//! Grouping and output rendering.
//!
//! Pure helpers only; the side-effecting run lives in `commands::split`.

use std::path::{Path, PathBuf};

use crate::registry::Registry;

/// Every emitted module depends on its sibling type set and on `std::fs`.
pub const MODULE_PREAMBLE: &str = "use super::types::*;\nuse std::fs;";

/// Fixed output filename inside each module directory.
pub const MODULE_FILENAME: &str = "commands.rs";

/// One destination module and the commands routed to it, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGroup {
    pub module: String,
    pub commands: Vec<String>,
}

/// Partitions the registry into module groups, skipping unassigned
/// entries. Groups appear in order of first mention; commands keep
/// registry order within their group.
pub fn partition(registry: &Registry) -> Vec<ModuleGroup> {
    let mut groups: Vec<ModuleGroup> = Vec::new();
    for entry in registry.entries() {
        let Some(module) = &entry.module else { continue };
        match groups.iter_mut().find(|g| &g.module == module) {
            Some(group) => group.commands.push(entry.command.clone()),
            None => groups.push(ModuleGroup {
                module: module.clone(),
                commands: vec![entry.command.clone()],
            }),
        }
    }
    groups
}

/// Renders a module file: preamble, two blank lines, then the extracted
/// blocks separated by single blank lines. No trailing newline.
pub fn render_module(blocks: &[String]) -> String {
    format!("{MODULE_PREAMBLE}\n\n\n{}", blocks.join("\n\n"))
}

pub fn module_path(out_dir: &Path, module: &str) -> PathBuf {
    out_dir.join(module).join(MODULE_FILENAME)
}
