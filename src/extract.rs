//! Plugin reference extraction from decoded project documents.
//!
//! The only shape recognized is an Audio Unit reference: a `Name` element
//! whose parent chain is `PluginDesc/AuPluginInfo`, carrying the display
//! name in its `Value` attribute. Other plugin-description shapes (VST and
//! friends) are deliberately not matched; widening the match rule is an
//! extension of [`ends_with_plugin_chain`], not a new component.
//!
//! Parsing is a streaming pull over the document, so arbitrarily large
//! sets decode without any node-count ceiling.

use crate::errors::PlugstatsError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const PLUGIN_DESC_TAG: &[u8] = b"PluginDesc";
const AU_PLUGIN_INFO_TAG: &[u8] = b"AuPluginInfo";
const NAME_TAG: &[u8] = b"Name";
const VALUE_ATTR: &str = "Value";

/// Lazy, finite, non-restartable sequence of plugin identifiers found in
/// one document. Yields one item per reference, so duplicates within a
/// document appear once each.
pub struct PluginNames<R: BufRead> {
    reader: Reader<R>,
    origin: PathBuf,
    stack: Vec<Vec<u8>>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> PluginNames<R> {
    /// Wrap an already-open document. `origin` names the file in errors.
    pub fn from_reader(reader: R, origin: &Path) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            origin: origin.to_path_buf(),
            stack: Vec::new(),
            buf: Vec::new(),
            done: false,
        }
    }
}

/// Open a decoded document and return its plugin-name sequence.
pub fn extract(document: &Path) -> Result<PluginNames<BufReader<File>>, PlugstatsError> {
    let file = File::open(document).map_err(|e| PlugstatsError::Parse {
        path: document.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(PluginNames::from_reader(BufReader::new(file), document))
}

/// Extract every plugin name in `document`, buffered.
///
/// All-or-nothing: a parse failure anywhere in the document discards the
/// names seen so far, so a broken file never contributes partial counts.
pub fn extract_all(document: &Path) -> Result<Vec<String>, PlugstatsError> {
    extract(document)?.collect()
}

impl<R: BufRead> Iterator for PluginNames<R> {
    type Item = Result<String, PlugstatsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Err(e) => {
                    self.done = true;
                    return Some(Err(PlugstatsError::Parse {
                        path: self.origin.clone(),
                        message: e.to_string(),
                    }));
                }
                Ok(Event::Eof) => {
                    self.done = true;
                    return None;
                }
                Ok(Event::Start(e)) => {
                    let hit = e.name().as_ref() == NAME_TAG && ends_with_plugin_chain(&self.stack);
                    let value = if hit { Some(value_attribute(&e)) } else { None };
                    self.stack.push(e.name().as_ref().to_vec());
                    match value {
                        Some(Ok(Some(name))) => return Some(Ok(name)),
                        Some(Err(message)) => {
                            self.done = true;
                            return Some(Err(PlugstatsError::Parse {
                                path: self.origin.clone(),
                                message,
                            }));
                        }
                        // Matched position but no display-name attribute:
                        // not a countable occurrence.
                        Some(Ok(None)) | None => {}
                    }
                }
                Ok(Event::Empty(e)) => {
                    if e.name().as_ref() == NAME_TAG && ends_with_plugin_chain(&self.stack) {
                        match value_attribute(&e) {
                            Ok(Some(name)) => return Some(Ok(name)),
                            Ok(None) => {}
                            Err(message) => {
                                self.done = true;
                                return Some(Err(PlugstatsError::Parse {
                                    path: self.origin.clone(),
                                    message,
                                }));
                            }
                        }
                    }
                }
                Ok(Event::End(_)) => {
                    self.stack.pop();
                }
                Ok(_) => {}
            }
        }
    }
}

/// Whether the open-element stack ends in `PluginDesc/AuPluginInfo`, i.e.
/// a `Name` element encountered now sits in the recognized position.
fn ends_with_plugin_chain(stack: &[Vec<u8>]) -> bool {
    let n = stack.len();
    n >= 2 && stack[n - 1] == AU_PLUGIN_INFO_TAG && stack[n - 2] == PLUGIN_DESC_TAG
}

fn value_attribute(e: &BytesStart) -> Result<Option<String>, String> {
    match e.try_get_attribute(VALUE_ATTR) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(|value| Some(value.into_owned()))
            .map_err(|e| e.to_string()),
        Ok(None) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}
