//! Shared test doubles.
use crate::schema::{FieldKey, FieldSpec};
use crate::wizard::Prompter;
use anyhow::{anyhow, Result};
use std::collections::VecDeque;

/// Prompter replaying canned answers and recording what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub answers: VecDeque<String>,
    pub confirmations: VecDeque<bool>,
    pub asked: Vec<(FieldKey, Option<String>)>,
    pub confirm_prompts: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|value| value.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_confirmations(mut self, confirmations: &[bool]) -> Self {
        self.confirmations = confirmations.iter().copied().collect();
        self
    }

    /// Defaults offered each time `key` was asked.
    pub fn defaults_for(&self, key: FieldKey) -> Vec<Option<String>> {
        self.asked
            .iter()
            .filter(|(asked, _)| *asked == key)
            .map(|(_, default)| default.clone())
            .collect()
    }

    pub fn saw_notice(&self, needle: &str) -> bool {
        self.notices.iter().any(|notice| notice.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, spec: &FieldSpec, default: Option<&str>) -> Result<String> {
        self.asked.push((spec.key, default.map(str::to_string)));
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted at {}", spec.key.as_str()))
    }

    fn text(&mut self, _prompt: &str, default: &str) -> Result<String> {
        Ok(self
            .answers
            .pop_front()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.confirm_prompts.push(prompt.to_string());
        Ok(self.confirmations.pop_front().unwrap_or(false))
    }

    fn notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }
}
