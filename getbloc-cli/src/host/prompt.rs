//! Interactive prompts

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

/// Source of interactive answers
///
/// `None` means the user gave no answer; callers treat that as a cancelled
/// command.
pub trait Prompter {
    /// Ask for an entity name
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn entity_name(&self, prompt: &str, placeholder: &str) -> Result<Option<String>>;

    /// Ask for the directory to generate into
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn target_directory(&self, label: &str) -> Result<Option<PathBuf>>;
}

/// [`Prompter`] on top of `dialoguer`
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    fn ask(&self, prompt: String) -> Result<Option<String>> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let answer = answer.trim().to_string();
        Ok((!answer.is_empty()).then_some(answer))
    }
}

impl Prompter for DialoguerPrompter {
    fn entity_name(&self, prompt: &str, placeholder: &str) -> Result<Option<String>> {
        self.ask(format!("{prompt} (e.g. {placeholder})"))
    }

    fn target_directory(&self, label: &str) -> Result<Option<PathBuf>> {
        Ok(self.ask(label.to_string())?.map(PathBuf::from))
    }
}
