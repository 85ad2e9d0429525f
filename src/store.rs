// src/store.rs
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::{CollegeRecord, Result};

/// Reads college names from the first column of a headered CSV file.
/// Blank and missing entries are skipped.
pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut names = Vec::new();

    for record in reader.records() {
        let record = record?;
        if let Some(name) = record.get(0) {
            let name = name.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}

/// Incremental-append output file. Each append re-reads every existing row,
/// adds the new one in memory, and rewrites the whole file. Cost grows with
/// the row count; the rewrite-per-record cycle is the crash-safety contract
/// of the output file and is kept on purpose.
pub struct OutputStore {
    path: PathBuf,
}

impl OutputStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &CollegeRecord) -> Result<()> {
        let mut rows = self.read_existing()?;
        rows.push(record.clone());

        let mut writer = csv::Writer::from_path(&self.path)?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!("💾 Saved {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }

    fn read_existing(&self) -> Result<Vec<CollegeRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }
}
