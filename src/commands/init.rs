//! The `init` command: scaffold a sample snapshot and configuration file.

use crate::io::{self, loader};
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# tcomap configuration

[thresholds]
# Cookbook ratio (active cookbooks per 1K nodes) bounds.
ratio_healthy = 25.0
ratio_critical = 100.0
# Cookbooks-per-FTE efficiency bounds.
per_fte_low = 150.0
per_fte_high = 300.0
"#;

pub fn init_config(force: bool) -> Result<()> {
    let snapshot_path = PathBuf::from("tcomap.yaml");
    let config_path = PathBuf::from(".tcomap.toml");

    if !force {
        if io::file_exists(&snapshot_path) {
            anyhow::bail!("tcomap.yaml already exists. Use --force to overwrite.");
        }
        if io::file_exists(&config_path) {
            anyhow::bail!(".tcomap.toml already exists. Use --force to overwrite.");
        }
    }

    io::write_file(&snapshot_path, loader::SAMPLE_INPUT_YAML)?;
    println!("Created tcomap.yaml sample snapshot");

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created .tcomap.toml configuration file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::TcomapConfig;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = TcomapConfig::from_toml(super::DEFAULT_CONFIG).unwrap();
        assert_eq!(config, TcomapConfig::default());
    }
}
