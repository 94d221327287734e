//! Seed document rendering and persistence.
use crate::escape::dcf_value;
use crate::metadata::MetadataRecord;
use crate::schema::{FieldKey, FieldSpec};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Render the seed document in schema order.
///
/// `seqfile_name` always carries the 2bit name; the raw FASTA name is only
/// used for conversion.
pub fn render_seed(fields: &[FieldSpec], record: &MetadataRecord) -> String {
    let mut out = String::new();
    for spec in fields {
        let value = match spec.key {
            FieldKey::SeqfileName => record.twobit_name(),
            key => record.get(key),
        };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(spec.key.seed_key());
        out.push(':');
        let value = dcf_value(value);
        if !value.is_empty() {
            out.push(' ');
            out.push_str(&value);
        }
    }
    out
}

/// Write `<package>.seed` into `dir`, returning its path.
pub fn write_seed(dir: &Path, fields: &[FieldSpec], record: &MetadataRecord) -> Result<PathBuf> {
    let path = dir.join(record.seed_file_name());
    let text = render_seed(fields, record);
    fs::write(&path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "seed written");
    Ok(path)
}
