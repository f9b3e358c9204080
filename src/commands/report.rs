use crate::config::Config;
use crate::io::walker;
use crate::pipeline;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Inputs for one report run, assembled from CLI flags layered over the
/// configuration file. Flag overrides apply to this run only; nothing is
/// written back to the file.
pub struct ReportOptions {
    pub paths: Vec<PathBuf>,
    pub config_path: PathBuf,
    pub project_dir: Option<PathBuf>,
    pub threshold: Option<u32>,
    pub hide_projects: bool,
    pub keep_temp: bool,
}

pub fn generate_report(options: ReportOptions) -> Result<()> {
    let mut config = Config::load(&options.config_path)?;
    if let Some(project_dir) = options.project_dir {
        config.project_dir = project_dir;
    }
    if let Some(threshold) = options.threshold {
        config.threshold = threshold;
    }
    if options.hide_projects {
        config.show_processed_projects = false;
    }
    if options.keep_temp {
        config.cleanup_temp = false;
    }

    let sources = if options.paths.is_empty() {
        walker::find_project_files(&config.project_dir).with_context(|| {
            format!(
                "failed to search for projects under {}",
                config.project_dir.display()
            )
        })?
    } else {
        options.paths
    };
    log::info!("located {} projects", sources.len());

    let summary = pipeline::run(&config, sources)?;

    println!(
        "Processed {} of {} projects, report written to {}",
        summary.projects_processed,
        summary.projects_located,
        summary.report_path.display()
    );
    for warning in &summary.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(())
}
