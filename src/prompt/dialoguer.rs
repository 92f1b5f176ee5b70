//! Dialoguer-based implementations of prompt interfaces

use super::interface::{SingleChoiceConfig, TextPromptConfig};
use crate::error::Result;
use dialoguer::{Input, Select};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(&config.prompt)
            .allow_empty(!config.required);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }
        if config.required {
            input = input.validate_with(|value: &String| -> std::result::Result<(), &'static str> {
                if value.trim().is_empty() {
                    Err("A value is required")
                } else {
                    Ok(())
                }
            });
        }

        Ok(input.interact_text()?)
    }
}

impl super::interface::SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        Ok(select.interact()?)
    }
}
