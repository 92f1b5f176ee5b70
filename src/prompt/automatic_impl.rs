//! Prompt provider that answers without user interaction.

use super::interface::*;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
/// Useful for automation, testing, or CI/CD environments
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    choice_responses: HashMap<String, usize>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Add a predefined choice response for a specific prompt
    pub fn with_choice_response(mut self, prompt: &str, choice_index: usize) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice_index);
        self
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        if config.required && response.trim().is_empty() {
            return Err(Error::ValidationError(format!(
                "no answer for required prompt '{}'",
                config.prompt
            )));
        }

        log::debug!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let response = self
            .choice_responses
            .get(&config.prompt)
            .copied()
            .or(config.default_index)
            .unwrap_or(0);

        if response >= config.choices.len() {
            return Err(Error::ValidationError(format!(
                "choice {response} is out of range for '{}'",
                config.prompt
            )));
        }

        log::debug!(
            "Auto-answering choice prompt '{}' with: '{}'",
            config.prompt,
            config.choices[response]
        );
        Ok(response)
    }
}
