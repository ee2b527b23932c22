//! The read-side engine.
//!
//! Reading is two-phased. Phase 1 chunks the raw text into one record per
//! header line and indexes every nested record by id, so the binder never
//! depends on block order within the document. Phase 2 walks a live node
//! tree in step with the chunks, assigning scalar fields and descending
//! through `Subresource(<id>)` backreferences.
//!
//! Everything that can go wrong inside a well-opened document is handled
//! per key: the anomaly is logged, pushed onto the warning list and the
//! remaining fields still bind. Only a source that cannot be read at all
//! is fatal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::{RestextError, Result};
use crate::resource::Persistable;

/// One parsed unit of text, corresponding to exactly one node: the header
/// data plus the field lines below it.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Id announced in the header, if one parsed.
    pub id: Option<u64>,
    /// Type tag announced in the header.
    pub type_tag: String,
    /// False only for the document's single top-level record.
    pub nested: bool,
    /// Field pairs in document order. Duplicates are resolved at parse
    /// time, first wins.
    pub fields: Vec<(String, String)>,
}

impl Chunk {
    fn empty() -> Self {
        Self {
            id: None,
            type_tag: String::new(),
            nested: true,
            fields: Vec::new(),
        }
    }
}

/// The main handle for reading a document.
///
/// Holds the phase-1 result: the root chunk, the id-indexed nested chunks
/// and every warning raised while parsing. [`bind`](RestextReader::bind)
/// runs phase 2 against a live node tree.
#[derive(Debug)]
pub struct RestextReader {
    root: Chunk,
    nested: HashMap<u64, Chunk>,
    warnings: Vec<String>,
}

impl RestextReader {
    /// Opens a document file and chunks it.
    ///
    /// Fails with [`RestextError::Io`] if the file cannot be read and with
    /// [`RestextError::Format`] if it contains no top-level record.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Chunks an in-memory document.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut warnings = Vec::new();
        let mut chunks = Vec::new();
        let mut current: Option<Chunk> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                // Blank line closes the accumulating chunk.
                if let Some(chunk) = current.take() {
                    chunks.push(chunk);
                }
            } else if line.starts_with('[') {
                if let Some(chunk) = current.take() {
                    warn(&mut warnings, "record header opened before previous chunk was closed");
                    chunks.push(chunk);
                }
                current = Some(parse_header(line, &mut warnings));
            } else if let Some(chunk) = current.as_mut() {
                match line.split_once('=') {
                    Some((key, value)) => {
                        let key = key.trim();
                        if chunk.fields.iter().any(|(k, _)| k == key) {
                            warn(
                                &mut warnings,
                                format!("duplicate key `{key}` in one chunk, first occurrence wins"),
                            );
                        } else {
                            chunk.fields.push((key.to_owned(), value.trim().to_owned()));
                        }
                    }
                    None => warn(&mut warnings, format!("field line without `=`: `{line}`")),
                }
            } else {
                warn(&mut warnings, format!("line outside any record: `{line}`"));
            }
        }
        if let Some(chunk) = current.take() {
            chunks.push(chunk);
        }

        let mut root = None;
        let mut nested = HashMap::new();
        for chunk in chunks {
            if !chunk.nested {
                if root.is_none() {
                    root = Some(chunk);
                } else {
                    warn(
                        &mut warnings,
                        "document contains more than one top-level record, first wins",
                    );
                }
            } else if let Some(id) = chunk.id {
                if nested.insert(id, chunk).is_some() {
                    warn(
                        &mut warnings,
                        format!("duplicate nested chunk id {id}, last occurrence wins"),
                    );
                }
            } else {
                warn(&mut warnings, "nested chunk without an id, dropped");
            }
        }

        let root = root.ok_or_else(|| {
            RestextError::Format("document contains no top-level record".into())
        })?;

        Ok(Self {
            root,
            nested,
            warnings,
        })
    }

    /// The document's single top-level chunk.
    pub fn root_chunk(&self) -> &Chunk {
        &self.root
    }

    /// Looks up a nested chunk by the id its header announced.
    pub fn nested_chunk(&self, id: u64) -> Option<&Chunk> {
        self.nested.get(&id)
    }

    /// Every warning accumulated so far, in order of occurrence.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Phase 2: binds the chunked document onto a live node tree.
    ///
    /// Every anomaly is recovered per key (skip and warn): unknown keys,
    /// malformed scalar tokens, unparseable or dangling backreferences,
    /// subresource keys for which the node cannot produce a child, and
    /// chunk/node type-tag mismatches.
    pub fn bind(&mut self, root: &mut dyn Persistable) {
        let root_chunk = self.root.clone();
        self.bind_node(root, &root_chunk);
    }

    fn bind_node(&mut self, node: &mut dyn Persistable, chunk: &Chunk) {
        if chunk.type_tag != node.type_tag() {
            let message = format!(
                "chunk type `{}` does not match node type `{}` (id {})",
                chunk.type_tag,
                node.type_tag(),
                node.id()
            );
            warn(&mut self.warnings, message);
        }

        for (key, value) in &chunk.fields {
            if node.is_subresource(key) {
                let child_id = match codec::parse_backref(value) {
                    Ok(id) => id,
                    Err(e) => {
                        let message = format!("skipping subresource `{key}`: {e}");
                        warn(&mut self.warnings, message);
                        continue;
                    }
                };
                let child_chunk = match self.nested.get(&child_id.as_u64()) {
                    Some(found) => found.clone(),
                    None => {
                        let message = format!(
                            "skipping subresource `{key}`: no chunk with id {}",
                            child_id.as_u64()
                        );
                        warn(&mut self.warnings, message);
                        continue;
                    }
                };
                match node.subresource_mut(key) {
                    Ok(child) => self.bind_node(child, &child_chunk),
                    Err(e) => {
                        let message = format!("skipping subresource `{key}`: {e}");
                        warn(&mut self.warnings, message);
                    }
                }
            } else if let Err(e) = node.set_field(key, value) {
                let message = format!("skipping field `{key}`: {e}");
                warn(&mut self.warnings, message);
            }
        }
    }
}

/// Parses a `[key = value, ...]` header line, recognizing `id`, `type` and
/// `level`. A chunk is top-level only when `level = Resource` is present.
fn parse_header(line: &str, warnings: &mut Vec<String>) -> Chunk {
    let mut chunk = Chunk::empty();

    let inner = match line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        Some(inner) => inner,
        None => {
            warn(warnings, format!("header without closing bracket: `{line}`"));
            line.trim_start_matches('[').trim_end_matches(']')
        }
    };

    for pair in inner.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            warn(warnings, format!("malformed header pair: `{pair}`"));
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "id" => match value.parse::<u64>() {
                Ok(id) => chunk.id = Some(id),
                Err(_) => warn(warnings, format!("header id is not an integer: `{value}`")),
            },
            "type" => chunk.type_tag = value.to_owned(),
            "level" => match value {
                "Resource" => chunk.nested = false,
                "Subresource" => chunk.nested = true,
                other => warn(warnings, format!("unknown record level `{other}`")),
            },
            other => warn(warnings, format!("unknown header key `{other}`")),
        }
    }

    chunk
}

fn warn(warnings: &mut Vec<String>, message: impl Into<String>) {
    let message = message.into();
    log::warn!("{message}");
    warnings.push(message);
}
