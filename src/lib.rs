// Export modules for library usage
pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod decode;
pub mod errors;
pub mod extract;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod staging;

// Re-export commonly used types
pub use crate::aggregate::{aggregate, AggregateOutcome, FrequencyTable};
pub use crate::config::Config;
pub use crate::decode::{decode_all, DecodeOutcome, COMPRESSED_EXT, DOCUMENT_EXT, PROJECT_EXT};
pub use crate::errors::PlugstatsError;
pub use crate::extract::{extract, extract_all, PluginNames};
pub use crate::io::walker::find_project_files;
pub use crate::pipeline::{run, RunSummary};
pub use crate::report::render;
