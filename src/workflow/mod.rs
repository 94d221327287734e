//! Workflow orchestration for the forge pipeline.
//!
//! `run` is the interactive path (dependency checks, wizard, artifacts,
//! conversion, build); `seed` renders artifacts from a JSON answers file;
//! `check` only resolves the external tools.
mod batch;
mod check;
mod run;

pub use batch::run_seed;
pub use check::run_check;
pub use run::{run_forge, ConversionStatus, ForgeReport};

use crate::build_script::{remove_stale_package_dir, write_build_script};
use crate::metadata::MetadataRecord;
use crate::schema::FieldSpec;
use crate::seed::write_seed;
use crate::tools::ConverterConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Settings shared by every workflow command.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    /// Directory receiving the seed, the 2bit file, and the build script.
    pub workdir: PathBuf,
    pub converter: ConverterConfig,
    /// Skip the R toolchain check and the build step.
    pub skip_build: bool,
}

impl ForgeConfig {
    pub fn new(workdir: PathBuf) -> Self {
        Self {
            converter: ConverterConfig::new(workdir.clone()),
            workdir,
            skip_build: false,
        }
    }
}

/// Paths of the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub seed: PathBuf,
    pub script: PathBuf,
}

/// Write the seed document and the build script for `record` into `workdir`.
pub fn generate_artifacts(
    workdir: &Path,
    fields: &[FieldSpec],
    record: &MetadataRecord,
    script_name: &str,
) -> Result<Artifacts> {
    let seed = write_seed(workdir, fields, record)?;
    let seed_name = seed
        .file_name()
        .and_then(|name| name.to_str())
        .context("seed path has no UTF-8 file name")?
        .to_string();
    remove_stale_package_dir(workdir, record)?;
    let script = write_build_script(workdir, script_name, record, &seed_name)?;
    Ok(Artifacts { seed, script })
}
