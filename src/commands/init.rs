use crate::config::DEFAULT_CONFIG_PATH;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# plugstats configuration

# Occurrence count above which a plugin counts as "often used"
threshold: 5

# Root directory searched recursively for .als project files
project_dir: ./projects

# List the processed project paths in the report
show_processed_projects: true

# Clear the scratch directory after the run
cleanup_temp: true
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
