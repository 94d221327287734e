//! Interactive forge workflow behind `autobsgenome run`.
//!
//! Order matters: tools are resolved before any question is asked, the seed is
//! written before conversion, and a failed conversion never removes what was
//! already written.
use super::ForgeConfig;
use crate::build_script::{remove_stale_package_dir, write_build_script, DEFAULT_SCRIPT_NAME};
use crate::metadata::MetadataRecord;
use crate::schema;
use crate::seed::{render_seed, write_seed};
use crate::tools::{convert_to_twobit, ensure_converter, ensure_toolchain, run_build_script};
use crate::wizard::{run_wizard, Prompter};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// What happened to the FASTA to 2bit conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStatus {
    /// The sequence file was already 2bit.
    NotNeeded,
    Converted,
    Failed(String),
}

/// Summary of one interactive run.
#[derive(Debug)]
pub struct ForgeReport {
    pub seed: PathBuf,
    pub script: PathBuf,
    pub conversion: ConversionStatus,
    /// `None` when the build was skipped.
    pub build_succeeded: Option<bool>,
}

/// Run the full interactive pipeline.
pub fn run_forge(config: &ForgeConfig, prompter: &mut dyn Prompter) -> Result<ForgeReport> {
    let workdir = config.workdir.as_path();
    let converter = ensure_converter(&config.converter, prompter)?;
    let rscript = if config.skip_build {
        None
    } else {
        Some(ensure_toolchain(prompter, workdir)?)
    };

    let fields = schema::fields();
    let answers = run_wizard(&fields, prompter)?;
    let record = MetadataRecord::from_answers(answers)?;

    let seed = write_seed(workdir, &fields, &record)?;
    prompter.notice(&format!("\nGenerated seed file: {}", seed.display()));
    prompter.notice("--- Seed File Content ---");
    prompter.notice(&render_seed(&fields, &record));
    prompter.notice("-------------------------");

    let conversion = convert(&converter, &record, workdir, prompter);

    let script_name = prompter.text(
        &format!("Press ENTER to use default script name '{DEFAULT_SCRIPT_NAME}', or enter a new name"),
        DEFAULT_SCRIPT_NAME,
    )?;
    remove_stale_package_dir(workdir, &record)?;
    let seed_name = seed
        .file_name()
        .and_then(|name| name.to_str())
        .context("seed path has no UTF-8 file name")?;
    let script = write_build_script(workdir, &script_name, &record, seed_name)?;
    prompter.notice(&format!("\nGenerated build script: {}", script.display()));
    prompter.notice("You can build the package using this command:");
    prompter.notice(&format!("Rscript {}", script.display()));

    let build_succeeded = match rscript {
        Some(rscript) => build(&rscript, &script, workdir, prompter)?,
        None => None,
    };
    prompter.notice("\nProcess completed.");

    Ok(ForgeReport {
        seed,
        script,
        conversion,
        build_succeeded,
    })
}

fn convert(
    converter: &Path,
    record: &MetadataRecord,
    workdir: &Path,
    prompter: &mut dyn Prompter,
) -> ConversionStatus {
    if !record.needs_conversion() {
        return ConversionStatus::NotNeeded;
    }
    prompter.notice(&format!(
        "\nConverting {} to {}...",
        record.seqfile_name(),
        record.twobit_name()
    ));
    let detail = match convert_to_twobit(converter, record, workdir) {
        Ok(outcome) if outcome.success() => {
            prompter.notice("Conversion successful.");
            return ConversionStatus::Converted;
        }
        Ok(outcome) => outcome.failure_detail(),
        Err(err) => format!("{err:#}"),
    };
    tracing::warn!(%detail, "conversion failed");
    prompter.notice(&format!("Error converting to 2bit format: {detail}"));
    ConversionStatus::Failed(detail)
}

fn build(
    rscript: &Path,
    script: &Path,
    workdir: &Path,
    prompter: &mut dyn Prompter,
) -> Result<Option<bool>> {
    if !prompter.confirm("Do you want to install the package now?")? {
        prompter.notice("Skipping package installation.");
        return Ok(None);
    }
    prompter.notice("Running build and installation...");
    let status = run_build_script(rscript, script, workdir)?;
    if !status.success() {
        prompter.notice(&format!("Build script exited with {status}"));
    }
    Ok(Some(status.success()))
}
