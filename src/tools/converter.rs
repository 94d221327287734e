//! Resolution, installation, and invocation of `faToTwoBit`.
use super::{run_captured, CommandOutcome};
use crate::metadata::MetadataRecord;
use crate::wizard::Prompter;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const CONVERTER_NAME: &str = "faToTwoBit";
pub const DEFAULT_CONVERTER_URL: &str =
    "http://hgdownload.soe.ucsc.edu/admin/exe/linux.x86_64/faToTwoBit";
pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/bin";

/// Where to look for, fetch, and install the converter.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub url: String,
    /// Preferred install location, used only when writable.
    pub install_dir: PathBuf,
    /// Working directory; fallback install location.
    pub workdir: PathBuf,
}

impl ConverterConfig {
    pub fn new(workdir: PathBuf) -> Self {
        Self {
            url: DEFAULT_CONVERTER_URL.to_string(),
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            workdir,
        }
    }
}

/// Look for the converter on `PATH`, then in the working directory.
pub fn find_converter(workdir: &Path) -> Option<PathBuf> {
    which::which(CONVERTER_NAME).ok().or_else(|| {
        let local = workdir.join(CONVERTER_NAME);
        local.is_file().then_some(local)
    })
}

/// Resolve a usable converter, offering to download it when absent.
///
/// Declining the download is fatal: nothing downstream works without it.
pub fn ensure_converter(config: &ConverterConfig, prompter: &mut dyn Prompter) -> Result<PathBuf> {
    if let Some(path) = find_converter(&config.workdir) {
        prompter.notice(&format!("{CONVERTER_NAME} is already installed."));
        tracing::debug!(path = %path.display(), "converter found");
        return Ok(path);
    }

    let consent = prompter.confirm(&format!(
        "{CONVERTER_NAME} is not found. Do you want to download and install it?"
    ))?;
    if !consent {
        return Err(anyhow!("{CONVERTER_NAME} is not installed and installation was declined"));
    }

    prompter.notice(&format!("Downloading {CONVERTER_NAME}..."));
    let downloaded = config.workdir.join(CONVERTER_NAME);
    download(&config.url, &downloaded)?;
    make_executable(&downloaded)?;
    let installed = install(&downloaded, &config.install_dir)?;
    if installed == downloaded {
        prompter.notice(&format!(
            "{CONVERTER_NAME} has been installed in the current directory ({}). Add it to your PATH to reuse it.",
            installed.display()
        ));
    } else {
        prompter.notice(&format!(
            "{CONVERTER_NAME} has been installed successfully in {}.",
            installed.display()
        ));
    }
    Ok(installed)
}

/// Convert the record's FASTA file to 2bit in `cwd`.
///
/// A non-zero exit is returned, not raised: the caller reports it and keeps
/// the artifacts already written.
pub fn convert_to_twobit(
    converter: &Path,
    record: &MetadataRecord,
    cwd: &Path,
) -> Result<CommandOutcome> {
    run_captured(
        converter,
        &[record.seqfile_name(), record.twobit_name()],
        cwd,
    )
}

/// Stream `url` into a temporary file beside `dest`, renaming it into place
/// only once the whole body has been written.
fn download(url: &str, dest: &Path) -> Result<()> {
    let dir = dest
        .parent()
        .ok_or_else(|| anyhow!("{} has no parent directory", dest.display()))?;
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("download {url}"))?;
    let mut reader = response.into_body().into_reader();
    let mut partial = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    let bytes = io::copy(&mut reader, partial.as_file_mut())
        .with_context(|| format!("download {url}"))?;
    partial
        .persist(dest)
        .map_err(|err| err.error)
        .with_context(|| format!("write {}", dest.display()))?;
    tracing::info!(url, bytes, path = %dest.display(), "converter downloaded");
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))?
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)
        .with_context(|| format!("chmod {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Move the download into `install_dir`; when that fails (missing or
/// read-only directory) leave it where it is.
fn install(downloaded: &Path, install_dir: &Path) -> Result<PathBuf> {
    let target = install_dir.join(CONVERTER_NAME);
    match move_file(downloaded, &target) {
        Ok(()) => Ok(target),
        Err(err) => {
            tracing::warn!(error = %err, dir = %install_dir.display(), "system install failed");
            Ok(downloaded.to_path_buf())
        }
    }
}

fn move_file(src: &Path, dest: &Path) -> Result<()> {
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }
    if let Err(err) = fs::copy(src, dest) {
        let _ = fs::remove_file(dest);
        return Err(err).with_context(|| format!("copy to {}", dest.display()));
    }
    fs::remove_file(src).with_context(|| format!("remove {}", src.display()))?;
    Ok(())
}
