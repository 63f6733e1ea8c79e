use anyhow::Result;
use clap::Parser;
use tcomap::cli::{Cli, Commands};
use tcomap::commands::{handle_analyze, init_config, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            sample,
            format,
            output,
        } => handle_analyze(AnalyzeConfig {
            input,
            sample,
            format,
            output,
        }),
        Commands::Init { force } => init_config(force),
    }
}
