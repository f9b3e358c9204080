use anyhow::Result;
use clap::Parser;
use plugstats::cli::{Cli, Commands};
use plugstats::commands::report::ReportOptions;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            paths,
            config,
            project_dir,
            threshold,
            hide_projects,
            keep_temp,
        } => plugstats::commands::report::generate_report(ReportOptions {
            paths,
            config_path: config,
            project_dir,
            threshold,
            hide_projects,
            keep_temp,
        }),
        Commands::Init { force } => plugstats::commands::init::init_config(force),
    }
}
