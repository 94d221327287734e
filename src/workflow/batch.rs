//! Non-interactive `autobsgenome seed` workflow.
use super::{generate_artifacts, Artifacts};
use crate::metadata::MetadataRecord;
use crate::schema;
use crate::wizard::{collect_batch, load_answers};
use anyhow::Result;
use std::path::Path;

/// Render the seed and build script from a JSON answers file.
///
/// Any invalid answer aborts before a file is written.
pub fn run_seed(answers_path: &Path, workdir: &Path, script_name: &str) -> Result<Artifacts> {
    let supplied = load_answers(answers_path)?;
    let fields = schema::fields();
    let answers = collect_batch(&fields, &supplied)?;
    let record = MetadataRecord::from_answers(answers)?;
    let artifacts = generate_artifacts(workdir, &fields, &record, script_name)?;
    println!("wrote {}", artifacts.seed.display());
    println!("wrote {}", artifacts.script.display());
    if record.needs_conversion() {
        println!(
            "convert the sequence file with: faToTwoBit {} {}",
            record.seqfile_name(),
            record.twobit_name()
        );
    }
    Ok(artifacts)
}
