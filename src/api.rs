//! Path-level entry points for saving and loading resource trees.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::reader::RestextReader;
use crate::resource::Persistable;
use crate::writer;

/// The main entry point for whole-document operations.
#[derive(Debug)]
pub struct Restext;

impl Restext {
    /// Serializes the tree under `root` and writes it to `path`.
    ///
    /// The destination is truncated on creation. A write failure aborts the
    /// whole pass and may leave a truncated file; there is no atomic
    /// rename step.
    pub fn save<P: AsRef<Path>>(path: P, root: &dyn Persistable) -> Result<()> {
        let text = writer::render(root)?;
        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Serializes the tree under `root` into a document string.
    pub fn render(root: &dyn Persistable) -> Result<String> {
        writer::render(root)
    }

    /// Reads the document at `path` and binds it onto the live tree under
    /// `root`, returning every warning raised along the way.
    ///
    /// `root` is typically a freshly constructed node with default field
    /// values; binding overwrites whatever the document provides and leaves
    /// the rest untouched.
    pub fn load<P: AsRef<Path>>(path: P, root: &mut dyn Persistable) -> Result<Vec<String>> {
        let mut reader = RestextReader::open(path)?;
        reader.bind(root);
        Ok(reader.warnings().to_vec())
    }
}
