//! The fixed BSgenome seed question schema.
//!
//! Order here is both the question order and the order fields are written to
//! the seed file. Per-step behavior lives in the attached function pointers so
//! the wizard engine never special-cases a key.
use crate::derive::{biocview_term, is_fasta_name, PackageName};
use crate::templates;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// Accepted answers keyed by field.
pub type Answers = BTreeMap<FieldKey, String>;

/// Checks a candidate against the answers accepted so far.
pub type Validator = fn(&str, &Answers) -> Result<(), String>;
/// Suggests a default from the answers accepted so far.
pub type DefaultProvider = fn(&Answers) -> Option<String>;
/// Read-only side effect run before prompting; returns text to show.
pub type PreAction = fn() -> Option<String>;
/// Builds an operator notice from the candidate value.
pub type Hook = fn(&str) -> String;

const VERSION_PATTERN: &str = r"^\d+([.-]\d+)+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    #[serde(alias = "Package")]
    Package,
    #[serde(alias = "Title")]
    Title,
    #[serde(alias = "Description")]
    Description,
    #[serde(alias = "Version")]
    Version,
    Organism,
    CommonName,
    Genome,
    Provider,
    ReleaseDate,
    SourceUrl,
    OrganismBiocview,
    #[serde(alias = "BSgenomeObjname")]
    BsgenomeObjname,
    CircSeqs,
    SeqsSrcdir,
    SeqfileName,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Package => "package",
            FieldKey::Title => "title",
            FieldKey::Description => "description",
            FieldKey::Version => "version",
            FieldKey::Organism => "organism",
            FieldKey::CommonName => "common_name",
            FieldKey::Genome => "genome",
            FieldKey::Provider => "provider",
            FieldKey::ReleaseDate => "release_date",
            FieldKey::SourceUrl => "source_url",
            FieldKey::OrganismBiocview => "organism_biocview",
            FieldKey::BsgenomeObjname => "bsgenome_objname",
            FieldKey::CircSeqs => "circ_seqs",
            FieldKey::SeqsSrcdir => "seqs_srcdir",
            FieldKey::SeqfileName => "seqfile_name",
        }
    }

    /// Key name used in the seed document.
    pub fn seed_key(&self) -> &'static str {
        match self {
            FieldKey::Package => "Package",
            FieldKey::Title => "Title",
            FieldKey::Description => "Description",
            FieldKey::Version => "Version",
            FieldKey::BsgenomeObjname => "BSgenomeObjname",
            other => other.as_str(),
        }
    }
}

/// One question of the wizard.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Short label used in the input line ("Please enter the {label}").
    pub label: &'static str,
    /// Markdown guidance shown above the input line.
    pub prompt: &'static str,
    pub validator: Option<Validator>,
    pub default_provider: Option<DefaultProvider>,
    pub pre_action: Option<PreAction>,
    pub on_invalid: Option<Hook>,
    pub on_valid: Option<Hook>,
}

impl FieldSpec {
    fn plain(key: FieldKey, label: &'static str, prompt: &'static str) -> Self {
        Self {
            key,
            label,
            prompt,
            validator: None,
            default_provider: None,
            pre_action: None,
            on_invalid: None,
            on_valid: None,
        }
    }

    pub fn validate(&self, candidate: &str, answers: &Answers) -> Result<(), String> {
        match self.validator {
            Some(validator) => validator(candidate, answers),
            None => Ok(()),
        }
    }

    /// Default suggested by the provider, if it yields a non-empty value.
    pub fn suggested_default(&self, answers: &Answers) -> Option<String> {
        self.default_provider
            .and_then(|provider| provider(answers))
            .filter(|value| !value.trim().is_empty())
    }
}

/// Build the fifteen BSgenome seed questions in canonical order.
pub fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            validator: Some(validate_package),
            on_invalid: Some(package_invalid_notice),
            on_valid: Some(package_valid_notice),
            ..FieldSpec::plain(FieldKey::Package, "package name", templates::PACKAGE_MD)
        },
        FieldSpec::plain(FieldKey::Title, "title", templates::TITLE_MD),
        FieldSpec::plain(FieldKey::Description, "Description", templates::DESCRIPTION_MD),
        FieldSpec {
            validator: Some(validate_version),
            on_invalid: Some(version_invalid_notice),
            ..FieldSpec::plain(FieldKey::Version, "Version", templates::VERSION_MD)
        },
        FieldSpec::plain(FieldKey::Organism, "organism", templates::ORGANISM_MD),
        FieldSpec::plain(FieldKey::CommonName, "common_name", templates::COMMON_NAME_MD),
        FieldSpec {
            default_provider: Some(suggest_genome),
            ..FieldSpec::plain(FieldKey::Genome, "genome", templates::GENOME_MD)
        },
        FieldSpec {
            default_provider: Some(suggest_provider),
            ..FieldSpec::plain(FieldKey::Provider, "provider", templates::PROVIDER_MD)
        },
        FieldSpec {
            default_provider: Some(suggest_release_date),
            pre_action: Some(show_today),
            ..FieldSpec::plain(FieldKey::ReleaseDate, "release_date", templates::RELEASE_DATE_MD)
        },
        FieldSpec::plain(FieldKey::SourceUrl, "source_url", templates::SOURCE_URL_MD),
        FieldSpec {
            default_provider: Some(suggest_biocview),
            ..FieldSpec::plain(
                FieldKey::OrganismBiocview,
                "organism_biocview",
                templates::ORGANISM_BIOCVIEW_MD,
            )
        },
        FieldSpec {
            default_provider: Some(suggest_objname),
            ..FieldSpec::plain(
                FieldKey::BsgenomeObjname,
                "BSgenomeObjname",
                templates::BSGENOME_OBJNAME_MD,
            )
        },
        FieldSpec::plain(FieldKey::CircSeqs, "circ_seqs", templates::CIRC_SEQS_MD),
        FieldSpec {
            default_provider: Some(suggest_srcdir),
            pre_action: Some(show_working_dir),
            ..FieldSpec::plain(FieldKey::SeqsSrcdir, "seqs_srcdir", templates::SEQS_SRCDIR_MD)
        },
        FieldSpec {
            validator: Some(validate_seqfile),
            pre_action: Some(list_fasta_files),
            on_invalid: Some(seqfile_invalid_notice),
            ..FieldSpec::plain(FieldKey::SeqfileName, "seqfile_name", templates::SEQFILE_NAME_MD)
        },
    ]
}

fn package_answer(answers: &Answers) -> Option<PackageName<'_>> {
    answers
        .get(&FieldKey::Package)
        .and_then(|raw| PackageName::parse(raw).ok())
}

fn validate_package(candidate: &str, _answers: &Answers) -> Result<(), String> {
    PackageName::parse(candidate)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

fn package_invalid_notice(_candidate: &str) -> String {
    "Not a valid name! Use BSgenome.Organism.Provider.Release (letters and digits).".to_string()
}

fn package_valid_notice(_candidate: &str) -> String {
    "The package name is valid.".to_string()
}

fn validate_version(candidate: &str, _answers: &Answers) -> Result<(), String> {
    let matches = Regex::new(VERSION_PATTERN)
        .map(|re| re.is_match(candidate))
        .unwrap_or(false);
    if matches {
        Ok(())
    } else {
        Err(format!("invalid version {candidate:?}"))
    }
}

fn version_invalid_notice(candidate: &str) -> String {
    format!("{candidate:?} is not a version: use integers separated by '.' or '-', e.g. 1.0.0")
}

fn validate_seqfile(candidate: &str, _answers: &Answers) -> Result<(), String> {
    if candidate.is_empty() {
        return Err("sequence file name is required".to_string());
    }
    Ok(())
}

fn seqfile_invalid_notice(_candidate: &str) -> String {
    "A sequence file name is required.".to_string()
}

fn suggest_genome(answers: &Answers) -> Option<String> {
    package_answer(answers).map(|name| name.release.to_string())
}

fn suggest_provider(answers: &Answers) -> Option<String> {
    package_answer(answers).map(|name| name.provider.to_string())
}

fn suggest_objname(answers: &Answers) -> Option<String> {
    package_answer(answers).map(|name| name.organism.to_string())
}

fn suggest_release_date(_answers: &Answers) -> Option<String> {
    Some(chrono::Local::now().format("%b. %Y").to_string())
}

fn show_today() -> Option<String> {
    Some(format!(
        "Today is: {}",
        chrono::Local::now().format("%Y-%m-%d")
    ))
}

fn suggest_biocview(answers: &Answers) -> Option<String> {
    answers
        .get(&FieldKey::Organism)
        .map(|organism| biocview_term(organism))
}

fn suggest_srcdir(_answers: &Answers) -> Option<String> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.display().to_string())
}

fn show_working_dir() -> Option<String> {
    std::env::current_dir()
        .ok()
        .map(|dir| format!("Now you are in {}", dir.display()))
}

fn list_fasta_files() -> Option<String> {
    let entries = fs::read_dir(".").ok()?;
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_fasta_name(name))
        .collect();
    names.sort();
    if names.is_empty() {
        return Some("No fa/fasta files found in the current folder.".to_string());
    }
    Some(format!(
        "fa/fasta files in the current folder: {}",
        names.join(", ")
    ))
}
