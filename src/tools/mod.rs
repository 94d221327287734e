//! External tool adapter: `faToTwoBit` and the R toolchain.
//!
//! Every subprocess goes through [`run_captured`] or [`run_inherited`], which
//! block until exit and report a [`CommandOutcome`]; callers decide whether a
//! non-zero status is fatal.
mod converter;
mod toolchain;

pub use converter::{
    convert_to_twobit, ensure_converter, ConverterConfig, CONVERTER_NAME, DEFAULT_CONVERTER_URL,
    DEFAULT_INSTALL_DIR,
};
pub use toolchain::{ensure_toolchain, run_build_script};

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

/// Result of one blocking external call.
#[derive(Debug)]
pub struct CommandOutcome {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// First non-empty stderr line, or the exit status when stderr is empty.
    pub fn failure_detail(&self) -> String {
        self.stderr
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("status {}", self.status))
    }
}

/// Run `program` with `args` in `cwd`, capturing stdout and stderr.
pub fn run_captured(program: &Path, args: &[&str], cwd: &Path) -> Result<CommandOutcome> {
    let start = Instant::now();
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("run {}", program.display()))?;
    let elapsed_ms = start.elapsed().as_millis();

    tracing::info!(
        program = %program.display(),
        elapsed_ms,
        status = ?output.status.code(),
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "external command complete"
    );

    Ok(CommandOutcome {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Run `program` with the terminal attached, returning its exit status.
pub fn run_inherited(program: &Path, args: &[&str], cwd: &Path) -> Result<ExitStatus> {
    let start = Instant::now();
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("run {}", program.display()))?;
    tracing::info!(
        program = %program.display(),
        elapsed_ms = start.elapsed().as_millis(),
        status = ?status.code(),
        "external command complete"
    );
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output_of_shell_commands() {
        let Ok(sh) = which::which("sh") else {
            return;
        };
        let dir = tempfile::tempdir().expect("create temp dir");
        let outcome = run_captured(&sh, &["-c", "echo out; echo err >&2; exit 3"], dir.path())
            .expect("run sh");
        assert!(!outcome.success());
        assert_eq!(outcome.status.code(), Some(3));
        assert_eq!(outcome.stdout.trim(), "out");
        assert_eq!(outcome.failure_detail(), "err");
    }

    #[test]
    fn failure_detail_falls_back_to_status() {
        let Ok(sh) = which::which("sh") else {
            return;
        };
        let dir = tempfile::tempdir().expect("create temp dir");
        let outcome = run_captured(&sh, &["-c", "exit 1"], dir.path()).expect("run sh");
        assert!(outcome.failure_detail().starts_with("status "));
    }

    #[test]
    fn missing_program_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("no-such-tool");
        assert!(run_captured(&missing, &[], dir.path()).is_err());
    }
}
