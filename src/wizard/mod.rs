//! Wizard engine for the seed questions.
//!
//! The engine walks the schema with a single session object: each answer is
//! validated by the step's own descriptor, and the reserved `back` command
//! steps one question backwards without touching accepted answers. Terminal
//! I/O sits behind [`Prompter`] so the state machine can be driven by tests.
mod batch;
mod terminal;

pub use batch::{collect_batch, load_answers};
pub use terminal::TerminalPrompter;

use crate::schema::{Answers, FieldSpec};
use anyhow::{anyhow, Result};

/// Reserved navigation command, matched case-insensitively.
pub const BACK_COMMAND: &str = "back";

/// Operator-facing I/O used by the wizard and the tool adapter.
pub trait Prompter {
    /// Ask one schema question; `default` is what an empty answer means.
    fn ask(&mut self, spec: &FieldSpec, default: Option<&str>) -> Result<String>;
    /// Free-text input outside the schema (e.g. the build script name).
    fn text(&mut self, prompt: &str, default: &str) -> Result<String>;
    /// Yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
    fn notice(&mut self, text: &str);
}

/// Outcome of submitting one candidate to the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Accepted { notice: Option<String> },
    Rejected { reason: String, notice: Option<String> },
    Back,
    AtStart,
    Done,
}

/// Mutable wizard state: position plus the answers accepted so far.
#[derive(Debug)]
pub struct WizardSession<'a> {
    fields: &'a [FieldSpec],
    position: usize,
    answers: Answers,
}

impl<'a> WizardSession<'a> {
    pub fn new(fields: &'a [FieldSpec]) -> Self {
        Self {
            fields,
            position: 0,
            answers: Answers::new(),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn is_done(&self) -> bool {
        self.position == self.fields.len()
    }

    pub fn current(&self) -> Option<&'a FieldSpec> {
        self.fields.get(self.position)
    }

    /// Default for the current step: a previously accepted value wins over
    /// the step's suggestion.
    pub fn displayed_default(&self) -> Option<String> {
        let spec = self.current()?;
        self.answers
            .get(&spec.key)
            .cloned()
            .or_else(|| spec.suggested_default(&self.answers))
    }

    /// Suggestion to announce for the current step, if it is not a revisit.
    pub fn suggestion(&self) -> Option<String> {
        let spec = self.current()?;
        if self.answers.contains_key(&spec.key) {
            return None;
        }
        spec.suggested_default(&self.answers)
    }

    /// Apply one raw operator answer to the current step.
    pub fn submit(&mut self, raw: &str) -> Transition {
        let Some(spec) = self.current() else {
            return Transition::Done;
        };
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(BACK_COMMAND) {
            if self.position == 0 {
                return Transition::AtStart;
            }
            self.position -= 1;
            return Transition::Back;
        }

        let candidate = if trimmed.is_empty() {
            self.displayed_default().unwrap_or_default()
        } else {
            trimmed.to_string()
        };
        if let Err(reason) = spec.validate(&candidate, &self.answers) {
            let notice = spec.on_invalid.map(|hook| hook(&candidate));
            return Transition::Rejected { reason, notice };
        }
        let notice = spec.on_valid.map(|hook| hook(&candidate));
        self.answers.insert(spec.key, candidate);
        self.position += 1;
        Transition::Accepted { notice }
    }

    /// Consume a finished session, yielding its answers.
    pub fn finish(self) -> Result<Answers> {
        if !self.is_done() {
            return Err(anyhow!(
                "wizard stopped at question {} of {}",
                self.position + 1,
                self.fields.len()
            ));
        }
        Ok(self.answers)
    }
}

/// Run the interactive wizard to completion.
pub fn run_wizard(fields: &[FieldSpec], prompter: &mut dyn Prompter) -> Result<Answers> {
    let mut session = WizardSession::new(fields);
    while let Some(spec) = session.current() {
        if let Some(text) = spec.pre_action.and_then(|action| action()) {
            prompter.notice(&text);
        }
        if let Some(suggestion) = session.suggestion() {
            prompter.notice(&format!(
                "According to your input, I suggest this field set to: {suggestion}"
            ));
        }
        let default = session.displayed_default();
        let raw = prompter.ask(spec, default.as_deref())?;
        match session.submit(&raw) {
            Transition::Accepted { notice } => {
                if let Some(text) = notice {
                    prompter.notice(&text);
                }
                tracing::debug!(
                    key = spec.key.as_str(),
                    answered = session.answers().len(),
                    "answer accepted"
                );
            }
            Transition::Rejected { reason, notice } => {
                prompter.notice(notice.as_deref().unwrap_or(&reason));
                tracing::debug!(key = spec.key.as_str(), %reason, "answer rejected");
            }
            Transition::Back => {
                tracing::debug!(position = session.position(), "moved back");
            }
            Transition::AtStart => {
                prompter.notice("Already at the first question, cannot go back further.");
            }
            Transition::Done => break,
        }
    }
    session.finish()
}

#[cfg(test)]
mod tests;
