//! User input and interaction handling.
//! The CLI only ever asks two kinds of questions: yes/no confirmations and
//! free-text answers with a suggested default.

use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Source of interactive answers.
pub trait Prompter {
    /// Asks a yes/no question. Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;

    /// Asks for a line of text. `None` means the user gave up on the question.
    fn input(&self, prompt: String, default: String) -> Result<Option<String>>;
}

/// [`Prompter`] reading from the terminal.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    /// Entering only whitespace abandons the question.
    fn input(&self, prompt: String, default: String) -> Result<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .default(default)
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}
