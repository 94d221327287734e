//! R toolchain checks and the build script runner.
use super::{run_captured, run_inherited};
use crate::escape::r_string;
use crate::wizard::Prompter;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

pub const RSCRIPT: &str = "Rscript";
/// R packages needed to forge and build a BSgenome package.
pub const REQUIRED_R_PACKAGES: [&str; 3] = ["BiocManager", "BSgenome", "Biostrings"];
const CRAN_MIRROR: &str = "https://cloud.r-project.org";

pub fn find_rscript() -> Result<PathBuf> {
    which::which(RSCRIPT)
        .map_err(|_| anyhow!("{RSCRIPT} not found on PATH; install R to build BSgenome packages"))
}

/// R expression printing the required packages that fail to load, one per line.
pub fn missing_packages_expr() -> String {
    let names: Vec<String> = REQUIRED_R_PACKAGES.iter().map(|name| r_string(name)).collect();
    format!(
        "pkgs <- c({}); cat(pkgs[!vapply(pkgs, requireNamespace, logical(1), quietly = TRUE)], sep = '\\n')",
        names.join(", ")
    )
}

/// R expression installing `missing` through BiocManager.
pub fn install_expr(missing: &[String]) -> String {
    let mut expr = String::new();
    if missing.iter().any(|name| name == "BiocManager") {
        expr.push_str(&format!(
            "install.packages('BiocManager', repos = {}); ",
            r_string(CRAN_MIRROR)
        ));
    }
    let bioc: Vec<String> = missing
        .iter()
        .filter(|name| name.as_str() != "BiocManager")
        .map(|name| r_string(name))
        .collect();
    if !bioc.is_empty() {
        expr.push_str(&format!(
            "BiocManager::install(c({}), ask = FALSE, update = FALSE)",
            bioc.join(", ")
        ));
    }
    expr.trim_end_matches([' ', ';']).to_string()
}

/// Keep only lines naming a required package; R may print unrelated noise.
pub fn parse_missing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| REQUIRED_R_PACKAGES.contains(line))
        .map(str::to_string)
        .collect()
}

fn query_missing(rscript: &Path, cwd: &Path) -> Result<Vec<String>> {
    let expr = missing_packages_expr();
    let outcome = run_captured(rscript, &["-e", &expr], cwd)?;
    if !outcome.success() {
        return Err(anyhow!(
            "querying installed R packages failed: {}",
            outcome.failure_detail()
        ));
    }
    Ok(parse_missing(&outcome.stdout))
}

/// Verify R and the BSgenome build packages, offering to install missing ones.
///
/// Missing R, a declined install, or packages still missing afterwards are
/// all fatal.
pub fn ensure_toolchain(prompter: &mut dyn Prompter, cwd: &Path) -> Result<PathBuf> {
    let rscript = find_rscript()?;
    let missing = query_missing(&rscript, cwd)?;
    if missing.is_empty() {
        prompter.notice("Required R packages are installed.");
        return Ok(rscript);
    }

    let consent = prompter.confirm(&format!(
        "Missing R packages: {}. Do you want to install them?",
        missing.join(", ")
    ))?;
    if !consent {
        return Err(anyhow!(
            "required R packages are missing ({}) and installation was declined",
            missing.join(", ")
        ));
    }

    let expr = install_expr(&missing);
    let status = run_inherited(&rscript, &["-e", &expr], cwd).context("install R packages")?;
    if !status.success() {
        return Err(anyhow!("installing R packages failed with status {status}"));
    }
    let still_missing = query_missing(&rscript, cwd)?;
    if !still_missing.is_empty() {
        return Err(anyhow!(
            "R packages still missing after install: {}",
            still_missing.join(", ")
        ));
    }
    prompter.notice("Required R packages have been installed.");
    Ok(rscript)
}

/// Run the generated build script with the terminal attached.
pub fn run_build_script(rscript: &Path, script: &Path, cwd: &Path) -> Result<ExitStatus> {
    let script = script
        .to_str()
        .ok_or_else(|| anyhow!("build script path is not valid UTF-8"))?;
    run_inherited(rscript, &[script], cwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_expr_lists_required_packages() {
        let expr = missing_packages_expr();
        assert!(expr.starts_with("pkgs <- c('BiocManager', 'BSgenome', 'Biostrings');"));
        assert!(expr.ends_with("sep = '\\n')"));
    }

    #[test]
    fn parse_missing_ignores_noise() {
        let stdout = "Loading required namespace: foo\nBSgenome\n  Biostrings  \nother\n";
        assert_eq!(parse_missing(stdout), ["BSgenome", "Biostrings"]);
        assert!(parse_missing("").is_empty());
    }

    #[test]
    fn install_expr_bootstraps_biocmanager_first() {
        let expr = install_expr(&["BiocManager".to_string(), "BSgenome".to_string()]);
        assert_eq!(
            expr,
            "install.packages('BiocManager', repos = 'https://cloud.r-project.org'); \
             BiocManager::install(c('BSgenome'), ask = FALSE, update = FALSE)"
        );
    }

    #[test]
    fn install_expr_without_bioc_packages() {
        assert_eq!(
            install_expr(&["BiocManager".to_string()]),
            "install.packages('BiocManager', repos = 'https://cloud.r-project.org')"
        );
        assert_eq!(
            install_expr(&["Biostrings".to_string()]),
            "BiocManager::install(c('Biostrings'), ask = FALSE, update = FALSE)"
        );
    }
}
