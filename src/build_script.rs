//! R build script generation.
//!
//! The script forges the package from the seed file. When forging fails, its
//! error handler lays out `inst/extdata` by hand and copies the 2bit file in,
//! and the build and install calls after the `tryCatch` run either way.
use crate::escape::{r_string, shell_command};
use crate::metadata::MetadataRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SCRIPT_NAME: &str = "build.R";
/// Location of the sequence data inside a forged package.
pub const EXTDATA_DIR: &str = "inst/extdata";
pub const EXTDATA_TWOBIT: &str = "single_sequences.2bit";

/// Render the build script for `record`, forging from `seed_file`.
pub fn render_build_script(record: &MetadataRecord, seed_file: &str) -> String {
    let package = record.package();
    let package_lit = r_string(package);
    let extdata = r_string(&format!("./{package}/{EXTDATA_DIR}/"));
    let twobit_src = r_string(&format!("./{}", record.twobit_name()));
    let twobit_dest = r_string(&format!("./{package}/{EXTDATA_DIR}/{EXTDATA_TWOBIT}"));
    let build = r_string(&shell_command(&["R", "CMD", "build", package]));
    let install = r_string(&shell_command(&["R", "CMD", "INSTALL", package]));
    let seed = r_string(seed_file);

    let mut out = String::new();
    out.push_str("suppressPackageStartupMessages(library(BSgenome))\n");
    out.push_str("tryCatch({\n");
    out.push_str(&format!(
        "  if (dir.exists({package_lit})) {{ unlink({package_lit}, recursive = TRUE) }}\n"
    ));
    out.push_str(&format!("  forgeBSgenomeDataPkg({seed})\n"));
    out.push_str("}, error = function(e) {\n");
    out.push_str("  message('Error occurred during forgeBSgenomeDataPkg: ', conditionMessage(e))\n");
    out.push_str(&format!(
        "  dir.create({extdata}, recursive = TRUE, showWarnings = FALSE)\n"
    ));
    out.push_str(&format!("  file.copy({twobit_src}, {twobit_dest})\n"));
    out.push_str("})\n");
    out.push_str(&format!("system({build})\n"));
    out.push_str(&format!("system({install})\n"));
    out
}

/// Remove a stale output package directory left by an earlier run.
pub fn remove_stale_package_dir(dir: &Path, record: &MetadataRecord) -> Result<bool> {
    let package_dir = dir.join(record.package());
    if !package_dir.is_dir() {
        return Ok(false);
    }
    fs::remove_dir_all(&package_dir)
        .with_context(|| format!("remove {}", package_dir.display()))?;
    tracing::info!(path = %package_dir.display(), "removed stale package directory");
    Ok(true)
}

/// Write the build script as `dir/script_name`, returning its path.
pub fn write_build_script(
    dir: &Path,
    script_name: &str,
    record: &MetadataRecord,
    seed_file: &str,
) -> Result<PathBuf> {
    let script_name = match script_name.trim() {
        "" => DEFAULT_SCRIPT_NAME,
        name => name,
    };
    let path = dir.join(script_name);
    let text = render_build_script(record, seed_file);
    fs::write(&path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "build script written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Answers, FieldKey};

    fn record(package: &str, seqfile: &str) -> MetadataRecord {
        let mut answers = Answers::new();
        answers.insert(FieldKey::Package, package.to_string());
        answers.insert(FieldKey::SeqfileName, seqfile.to_string());
        MetadataRecord::from_answers(answers).expect("build record")
    }

    #[test]
    fn script_forges_then_falls_back_then_builds() {
        let record = record("BSgenome.Hsapiens.UCSC.hg38", "genome.fa");
        let script = render_build_script(&record, "BSgenome.Hsapiens.UCSC.hg38.seed");
        let expected = "\
suppressPackageStartupMessages(library(BSgenome))
tryCatch({
  if (dir.exists('BSgenome.Hsapiens.UCSC.hg38')) { unlink('BSgenome.Hsapiens.UCSC.hg38', recursive = TRUE) }
  forgeBSgenomeDataPkg('BSgenome.Hsapiens.UCSC.hg38.seed')
}, error = function(e) {
  message('Error occurred during forgeBSgenomeDataPkg: ', conditionMessage(e))
  dir.create('./BSgenome.Hsapiens.UCSC.hg38/inst/extdata/', recursive = TRUE, showWarnings = FALSE)
  file.copy('./genome.2bit', './BSgenome.Hsapiens.UCSC.hg38/inst/extdata/single_sequences.2bit')
})
system('R CMD build BSgenome.Hsapiens.UCSC.hg38')
system('R CMD INSTALL BSgenome.Hsapiens.UCSC.hg38')
";
        assert_eq!(script, expected);
    }

    #[test]
    fn build_calls_follow_the_error_handler() {
        let record = record("BSgenome.A.B.C", "x.2bit");
        let script = render_build_script(&record, "BSgenome.A.B.C.seed");
        let handler_end = script.find("})\n").expect("tryCatch close");
        let build = script.find("system('R CMD build").expect("build call");
        let install = script.find("system('R CMD INSTALL").expect("install call");
        assert!(handler_end < build && build < install);
        assert!(script.contains("file.copy('./x.2bit',"));
    }

    #[test]
    fn adversarial_names_stay_inside_literals() {
        let record = record("BSgenome.A.B.C", "g'x\\y.fa");
        let script = render_build_script(&record, "it's.seed");
        assert!(script.contains(r"forgeBSgenomeDataPkg('it\'s.seed')"));
        assert!(script.contains(r"file.copy('./g\'x\\y.2bit',"));
        for line in script.lines() {
            let quotes = line
                .char_indices()
                .filter(|(idx, ch)| *ch == '\'' && !line[..*idx].ends_with('\\'))
                .count();
            assert_eq!(quotes % 2, 0, "unbalanced literal in {line}");
        }
    }

    #[test]
    fn path_breaking_package_names_never_reach_the_script() {
        for package in ["BSgenome.a b;rm.c.d", "BSgenome.A.B.c/d", "BSgenome.it's.a.b"] {
            let mut answers = Answers::new();
            answers.insert(FieldKey::Package, package.to_string());
            answers.insert(FieldKey::SeqfileName, "genome.fa".to_string());
            assert!(MetadataRecord::from_answers(answers).is_err(), "accepted {package:?}");
        }
    }

    #[test]
    fn writes_default_script_name_when_blank() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let record = record("BSgenome.A.B.C", "genome.fa");
        let path = write_build_script(dir.path(), "  ", &record, "BSgenome.A.B.C.seed")
            .expect("write script");
        assert_eq!(path, dir.path().join(DEFAULT_SCRIPT_NAME));
        let custom = write_build_script(dir.path(), "forge.R", &record, "BSgenome.A.B.C.seed")
            .expect("write script");
        assert!(custom.is_file());
    }

    #[test]
    fn removes_only_existing_package_dir() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let record = record("BSgenome.A.B.C", "genome.fa");
        assert!(!remove_stale_package_dir(dir.path(), &record).expect("probe"));
        let stale = dir.path().join("BSgenome.A.B.C").join("inst");
        std::fs::create_dir_all(&stale).expect("create stale dir");
        assert!(remove_stale_package_dir(dir.path(), &record).expect("remove"));
        assert!(!dir.path().join("BSgenome.A.B.C").exists());
    }
}
