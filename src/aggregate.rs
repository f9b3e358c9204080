//! Frequency aggregation over extracted plugin names.

use crate::errors::PlugstatsError;
use crate::extract;
use std::collections::HashMap;
use std::path::PathBuf;

/// Plugin identifier -> occurrence count. Keys are case-sensitive and
/// matched exactly. Read-only once aggregation finishes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `name`.
    pub fn record(&mut self, name: impl Into<String>) {
        *self.counts.entry(name.into()).or_insert(0) += 1;
    }

    /// Occurrence count for `name`; absent identifiers count zero.
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl FromIterator<(String, u32)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// The aggregated table plus the documents that failed to parse.
#[derive(Debug, Default)]
pub struct AggregateOutcome {
    pub table: FrequencyTable,
    pub failures: Vec<PlugstatsError>,
}

/// Fold every plugin occurrence across `documents` into a frequency table.
///
/// Document order never changes the resulting counts. Each document is
/// extracted in full before its names are folded in, so a document that
/// fails mid-parse contributes nothing rather than a partial count.
pub fn aggregate(documents: &[PathBuf]) -> AggregateOutcome {
    let mut outcome = AggregateOutcome::default();

    for document in documents {
        match extract::extract_all(document) {
            Ok(names) => {
                log::debug!("{}: {} plugin references", document.display(), names.len());
                for name in names {
                    outcome.table.record(name);
                }
            }
            Err(err) => {
                log::warn!("{err}");
                outcome.failures.push(err);
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_per_occurrence() {
        let mut table = FrequencyTable::new();
        table.record("Reverb");
        table.record("Reverb");
        table.record("EQ");
        assert_eq!(table.count("Reverb"), 2);
        assert_eq!(table.count("EQ"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn absent_identifiers_count_zero() {
        let table = FrequencyTable::new();
        assert_eq!(table.count("Anything"), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn identifiers_match_case_sensitively() {
        let mut table = FrequencyTable::new();
        table.record("Reverb");
        table.record("reverb");
        assert_eq!(table.count("Reverb"), 1);
        assert_eq!(table.count("reverb"), 1);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let docs = write_docs(&[
            "<Ableton><PluginDesc><AuPluginInfo><Name Value=\"A\"/></AuPluginInfo></PluginDesc></Ableton>",
            "<Ableton><PluginDesc><AuPluginInfo><Name Value=\"B\"/></AuPluginInfo></PluginDesc></Ableton>",
        ]);
        let forward = aggregate(&docs.1).table;
        let reversed: Vec<_> = docs.1.iter().rev().cloned().collect();
        let backward = aggregate(&reversed).table;
        assert_eq!(forward, backward);
    }

    #[test]
    fn failing_document_contributes_nothing() {
        let docs = write_docs(&[
            "<Ableton><PluginDesc><AuPluginInfo><Name Value=\"Good\"/></AuPluginInfo></PluginDesc></Ableton>",
            "<Ableton><PluginDesc><AuPluginInfo><Name Value=\"Partial\"/></AuPluginInfo></PluginDesc></Broken>",
        ]);
        let outcome = aggregate(&docs.1);
        assert_eq!(outcome.table.count("Good"), 1);
        assert_eq!(outcome.table.count("Partial"), 0);
        assert_eq!(outcome.failures.len(), 1);
    }

    fn write_docs(contents: &[&str]) -> (tempfile::TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let paths = contents
            .iter()
            .enumerate()
            .map(|(i, xml)| {
                let path = dir.path().join(format!("doc{i}.xml"));
                std::fs::write(&path, xml).unwrap();
                path
            })
            .collect();
        (dir, paths)
    }
}
