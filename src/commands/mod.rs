//! CLI command implementations.
//!
//! One submodule per command; each exposes a `*Config` struct and a
//! `handle_*` entry point so tests can drive the pipeline without going
//! through the binary.

pub mod split;

pub use split::{handle_split, SplitConfig, SplitReport};
