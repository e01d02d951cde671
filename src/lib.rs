// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod emit;
pub mod errors;
pub mod extract;
pub mod io;
pub mod registry;
pub mod rewrite;

// Re-export commonly used types
pub use crate::commands::split::{handle_split, SplitConfig, SplitReport};
pub use crate::emit::{module_path, partition, render_module, ModuleGroup};
pub use crate::errors::SplitError;
pub use crate::extract::{extract_function, find_block_end, find_declaration};
pub use crate::registry::{Registry, RegistryEntry};
pub use crate::rewrite::make_public;
