use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plugstats")]
#[command(about = "Plugin usage statistics for Ableton Live project sets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a plugin usage report
    Report {
        /// Project files to process; with none given, the project
        /// directory is searched recursively (skipping Backup folders)
        paths: Vec<PathBuf>,

        /// Configuration file
        #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Project root directory (overrides the configured one)
        #[arg(long)]
        project_dir: Option<PathBuf>,

        /// Occurrence count above which a plugin counts as "often used"
        #[arg(short, long)]
        threshold: Option<u32>,

        /// Omit the processed-projects section from the report
        #[arg(long)]
        hide_projects: bool,

        /// Keep the scratch directory after the run
        #[arg(long)]
        keep_temp: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
