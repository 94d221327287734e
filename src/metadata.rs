//! Finalized wizard output.
use crate::derive::{twobit_name, PackageName};
use crate::schema::{Answers, FieldKey};
use anyhow::{anyhow, Result};

/// Answers of a completed session plus the synthesized 2bit file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    answers: Answers,
    twobit_name: String,
}

impl MetadataRecord {
    /// Build the record, checking the package name once more so artifacts
    /// are never rendered for a malformed identifier.
    pub fn from_answers(answers: Answers) -> Result<Self> {
        let package = answers
            .get(&FieldKey::Package)
            .ok_or_else(|| anyhow!("missing package name"))?;
        PackageName::parse(package)?;
        let seqfile = answers
            .get(&FieldKey::SeqfileName)
            .ok_or_else(|| anyhow!("missing sequence file name"))?;
        let twobit_name = twobit_name(seqfile);
        Ok(Self {
            answers,
            twobit_name,
        })
    }

    /// Accepted value for `key`, empty when the field was left blank.
    pub fn get(&self, key: FieldKey) -> &str {
        self.answers.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn package(&self) -> &str {
        self.get(FieldKey::Package)
    }

    /// Raw sequence file name as entered by the operator.
    pub fn seqfile_name(&self) -> &str {
        self.get(FieldKey::SeqfileName)
    }

    pub fn twobit_name(&self) -> &str {
        &self.twobit_name
    }

    /// Whether the sequence file has to be converted before forging.
    pub fn needs_conversion(&self) -> bool {
        self.twobit_name != self.seqfile_name()
    }

    /// File name of the seed document.
    pub fn seed_file_name(&self) -> String {
        format!("{}.seed", self.package())
    }
}
