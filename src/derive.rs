//! Derivation rules shared by the wizard defaults and the artifact generator.
//!
//! Everything here is pure: callers pass already-accepted answers and get back
//! suggestions or synthesized names.
use anyhow::{anyhow, Result};

/// Literal first segment of every BSgenome package name.
pub const PACKAGE_PREFIX: &str = "BSgenome";
/// FASTA suffixes converted to 2bit before forging.
pub const FASTA_SUFFIXES: [&str; 4] = [".fa", ".fna", ".fasta", ".fas"];
/// Suffix of the converted sequence file.
pub const TWOBIT_SUFFIX: &str = ".2bit";

/// Decomposed `BSgenome.<organism>.<provider>.<release>` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName<'a> {
    pub organism: &'a str,
    pub provider: &'a str,
    pub release: &'a str,
}

/// Segments may only hold ASCII letters and digits, the characters R allows
/// in package names besides the separating dots.
fn valid_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_alphanumeric())
}

impl<'a> PackageName<'a> {
    pub fn parse(raw: &'a str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('.').collect();
        match parts.as_slice() {
            [prefix, organism, provider, release]
                if *prefix == PACKAGE_PREFIX
                    && valid_segment(organism)
                    && valid_segment(provider)
                    && valid_segment(release) =>
            {
                Ok(Self {
                    organism,
                    provider,
                    release,
                })
            }
            _ => Err(anyhow!(
                "invalid package name {raw:?}: expected '{PACKAGE_PREFIX}.' and three alphanumeric parts"
            )),
        }
    }
}

/// Name of the 2bit file produced from the operator's sequence file.
///
/// Names without a recognized FASTA suffix are assumed to already be 2bit.
pub fn twobit_name(seqfile_name: &str) -> String {
    FASTA_SUFFIXES
        .iter()
        .find_map(|suffix| seqfile_name.strip_suffix(suffix))
        .map(|stem| format!("{stem}{TWOBIT_SUFFIX}"))
        .unwrap_or_else(|| seqfile_name.to_string())
}

pub fn is_fasta_name(name: &str) -> bool {
    FASTA_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// biocViews organism term: the scientific name with spaces as underscores.
pub fn biocview_term(organism: &str) -> String {
    organism.split_whitespace().collect::<Vec<_>>().join("_")
}
