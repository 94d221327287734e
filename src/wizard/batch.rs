//! Non-interactive variant of the wizard.
//!
//! Answers come from a JSON object keyed by field name. There is no
//! navigation and no retry: the first answer that fails validation aborts the
//! run before anything is written.
use crate::schema::{Answers, FieldSpec};
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Load supplied answers from a JSON object (`{"package": "...", ...}`).
pub fn load_answers(path: &Path) -> Result<Answers> {
    let bytes = fs::read(path).with_context(|| format!("read answers {}", path.display()))?;
    let answers: Answers = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse answers JSON {}", path.display()))?;
    Ok(answers)
}

/// Resolve every schema field from the supplied answers, falling back to the
/// step's suggested default. Validation failures are fatal.
pub fn collect_batch(fields: &[FieldSpec], supplied: &Answers) -> Result<Answers> {
    let mut answers = Answers::new();
    for spec in fields {
        let value = supplied
            .get(&spec.key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .or_else(|| spec.suggested_default(&answers))
            .unwrap_or_default();
        spec.validate(&value, &answers)
            .map_err(|reason| anyhow!("{}: {reason}", spec.key.as_str()))?;
        answers.insert(spec.key, value);
    }
    Ok(answers)
}
