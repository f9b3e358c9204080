//! Pipeline orchestration.
//!
//! One run walks the stages strictly in order: prepare the scratch area,
//! stage the sources, decode the containers, extract and aggregate plugin
//! references, render the report, write the artifact, then optionally
//! clear the scratch area. Each stage completes for all files before the
//! next begins; the scratch directory path is threaded explicitly through
//! every call.
//!
//! Failing to create the scratch directory aborts before any file work
//! and before any output exists. Per-file staging/decode/parse failures
//! are collected as warnings and the run continues without those files.

use crate::aggregate::{self, AggregateOutcome};
use crate::config::Config;
use crate::decode::{self, DecodeOutcome};
use crate::errors::PlugstatsError;
use crate::report;
use crate::staging::{self, StageOutcome};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Name of the scratch directory created under the project root.
const SCRATCH_DIR: &str = "temp";

/// What one pipeline run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Where the rendered report was written.
    pub report_path: PathBuf,
    /// How many source projects the run was given.
    pub projects_located: usize,
    /// How many projects made it all the way into the frequency table.
    pub projects_processed: usize,
    /// Per-file recoverable errors, in the order they occurred. These
    /// never affect the counts in the report.
    pub warnings: Vec<PlugstatsError>,
}

/// Run the full pipeline, writing the report into the process working
/// directory.
pub fn run(config: &Config, sources: Vec<PathBuf>) -> Result<RunSummary, PlugstatsError> {
    run_with_output_dir(config, sources, Path::new("."))
}

/// Run the full pipeline, writing the report into `output_dir`.
pub fn run_with_output_dir(
    config: &Config,
    sources: Vec<PathBuf>,
    output_dir: &Path,
) -> Result<RunSummary, PlugstatsError> {
    let started = Local::now();
    let working_dir = config.project_dir.join(SCRATCH_DIR);
    let mut warnings = Vec::new();

    staging::prepare(&working_dir)?;

    log::info!("staging {} projects into {}", sources.len(), working_dir.display());
    let StageOutcome { staged, failures } = staging::stage(&sources, &working_dir);
    warnings.extend(failures);

    log::info!("decoding {} staged projects", staged.len());
    let DecodeOutcome { documents, failures } = decode::decode_all(&working_dir)?;
    warnings.extend(failures);

    log::info!("extracting plugin references from {} documents", documents.len());
    let AggregateOutcome { table, failures } = aggregate::aggregate(&documents);
    let projects_processed = documents.len() - failures.len();
    warnings.extend(failures);

    log::info!("rendering report for {} distinct plugins", table.len());
    let content = report::render(
        &table,
        config.threshold,
        &sources,
        config.show_processed_projects,
        Local::now(),
    );

    let report_path = output_dir.join(format!(
        "plugins_report_{}.md",
        started.format("%Y-%m-%d_%H-%M-%S")
    ));
    std::fs::write(&report_path, &content)?;
    log::info!("report written to {}", report_path.display());

    if config.cleanup_temp {
        log::info!("clearing scratch directory {}", working_dir.display());
        if let Err(e) = staging::clear(&working_dir) {
            // The report is already on disk; a leftover scratch dir is
            // not worth failing the run over.
            log::warn!("failed to clear scratch directory: {e}");
        }
    }

    Ok(RunSummary {
        report_path,
        projects_located: sources.len(),
        projects_processed,
        warnings,
    })
}
