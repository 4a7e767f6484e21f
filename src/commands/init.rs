use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

pub fn run(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# quadlint configuration
# Severity per rule: "off", "warn", or "error".

[rules]
no-immutable-reduce = "warn"
no-quadratic-loop-operations = "warn"
no-unnecessary-array-spread = "warn"
prefer-filter-first = "warn"
prefer-array-from = "warn"
prefer-layout-effect = "warn"

[languages]
enabled = ["javascript", "typescript"]

[ignore]
patterns = [
    "node_modules/**",
    "dist/**",
    "*.min.js",
]
"#;

    fs::write(&config_path, default_config).context("Failed to write quadlint.toml")?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
