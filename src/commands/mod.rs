//! CLI command implementations.
//!
//! Each submodule handles one subcommand: `analyze` runs the full pipeline on
//! a loaded or sample snapshot, `init` scaffolds input and configuration
//! files. Commands are thin I/O wrappers; all computation lives in
//! [`crate::analysis`].

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
