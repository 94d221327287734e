//! Terminal prompter built on `dialoguer`.
use super::{Prompter, BACK_COMMAND};
use crate::schema::FieldSpec;
use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};

/// Interactive prompter reading from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter {
    /// Answer yes to every confirmation without asking.
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, spec: &FieldSpec, default: Option<&str>) -> Result<String> {
        println!();
        println!("{}", spec.prompt.trim_end());
        println!("(type '{BACK_COMMAND}' to return to the previous question)");
        let mut input = Input::<String>::new()
            .with_prompt(format!("Please enter the {}", spec.label))
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let value = input
            .interact_text()
            .with_context(|| format!("read answer for {}", spec.key.as_str()))?;
        Ok(value.trim().to_string())
    }

    fn text(&mut self, prompt: &str, default: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .context("read input")?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            println!("{prompt} yes");
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("read confirmation")
    }

    fn notice(&mut self, text: &str) {
        println!("{text}");
    }
}
