//! Project container decoding.
//!
//! Live sets are gzip containers around an XML document. Decoding retags
//! each staged `.als` file to `.gzip`, then decompresses it into a sibling
//! `.xml` file with the same stem. Both the compressed bytes and the
//! decoded document stay in the scratch directory; removal happens in the
//! policy-gated cleanup step, never here.

use crate::errors::PlugstatsError;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Extension of a source project file.
pub const PROJECT_EXT: &str = "als";
/// Extension a staged project carries once retagged as a compressed container.
pub const COMPRESSED_EXT: &str = "gzip";
/// Extension of the decoded structured document.
pub const DOCUMENT_EXT: &str = "xml";

/// Decoded documents plus the per-file failures encountered.
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    pub documents: Vec<PathBuf>,
    pub failures: Vec<PlugstatsError>,
}

/// Decode every staged project in `working_dir`.
///
/// A file that is not valid compressed data yields a
/// [`PlugstatsError::Decode`] in the outcome and does not stop the
/// remaining files from being decoded. Failing to list the scratch
/// directory itself is fatal.
pub fn decode_all(working_dir: &Path) -> Result<DecodeOutcome, PlugstatsError> {
    let mut outcome = DecodeOutcome::default();

    for staged in files_with_extension(working_dir, PROJECT_EXT)? {
        match decode_file(&staged) {
            Ok(document) => {
                log::debug!("decoded {} -> {}", staged.display(), document.display());
                outcome.documents.push(document);
            }
            Err(err) => {
                log::warn!("{err}");
                outcome.failures.push(err);
            }
        }
    }

    Ok(outcome)
}

/// Retag one staged project as compressed and decompress it.
///
/// Decompression is deterministic: the same compressed bytes always
/// produce a byte-identical document.
pub fn decode_file(staged: &Path) -> Result<PathBuf, PlugstatsError> {
    let compressed = staged.with_extension(COMPRESSED_EXT);
    fs::rename(staged, &compressed).map_err(|e| decode_error(staged, &e))?;

    let document = compressed.with_extension(DOCUMENT_EXT);
    let input = File::open(&compressed).map_err(|e| decode_error(&compressed, &e))?;
    let mut decoder = GzDecoder::new(BufReader::new(input));
    let mut output = File::create(&document).map_err(|e| decode_error(&compressed, &e))?;

    std::io::copy(&mut decoder, &mut output).map_err(|e| decode_error(&compressed, &e))?;

    Ok(document)
}

fn decode_error(path: &Path, err: &impl std::fmt::Display) -> PlugstatsError {
    PlugstatsError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// List the files in `dir` carrying `extension`, sorted by name so every
/// run visits them in the same order.
pub fn files_with_extension(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == extension))
        .collect();
    files.sort();
    Ok(files)
}
