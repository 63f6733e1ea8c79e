//! The `analyze` command: load a snapshot, run the engine, write the report.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::generate_report_with;
use crate::cli;
use crate::config;
use crate::io::output::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter};
use crate::io::{self, loader};

pub struct AnalyzeConfig {
    pub input: Option<PathBuf>,
    pub sample: bool,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let snapshot = match (&config.input, config.sample) {
        (Some(path), false) => loader::load_snapshot(path)
            .with_context(|| format!("failed to load snapshot from {}", path.display()))?,
        (Some(_), true) => {
            anyhow::bail!("--input and --sample are mutually exclusive");
        }
        (None, sample) => {
            if !sample {
                log::info!("no input specified, using the built-in sample estate");
            }
            loader::sample_snapshot()
        }
    };

    // Threshold tuning is resolved here, at the command boundary; the engine
    // itself never reads files.
    let thresholds = config::load_or_default().thresholds;
    let report = generate_report_with(&snapshot, &thresholds);
    log::debug!(
        "computed {} scenarios, {} recommendations",
        report.scenarios.len(),
        report.recommendations.len()
    );

    let format = OutputFormat::from(config.format);
    match config.output {
        Some(path) => {
            let mut buf = Vec::new();
            match format {
                OutputFormat::Json => JsonWriter::new(&mut buf).write_report(&report)?,
                // Terminal output to a file degrades to markdown.
                OutputFormat::Markdown | OutputFormat::Terminal => {
                    MarkdownWriter::new(&mut buf).write_report(&report)?
                }
            }
            io::write_file(&path, &String::from_utf8(buf)?)?;
            println!("Report saved to: {}", path.display());
        }
        None => create_writer(format).write_report(&report)?,
    }

    Ok(())
}
