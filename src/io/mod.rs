pub mod loader;
pub mod output;

pub use loader::{load_snapshot, parse_snapshot, sample_snapshot, validate_snapshot};
pub use output::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, TerminalWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
