use crate::{
    constants::STDIN_INDICATOR,
    error::{Error, Result},
    prompt::{PromptProvider, SingleChoiceConfig, TextPromptConfig},
    registry,
    types::{PrefilledAnswers, ProjectAnswers},
};

pub const PROJECT_NAME_PROMPT: &str = "Project name";
pub const AUTHOR_PROMPT: &str = "Author";
pub const DESCRIPTION_PROMPT: &str = "Description";
pub const TEMPLATE_PROMPT: &str = "Choose a project template";

/// Collects the project answers, asking only for what was not supplied up front.
pub struct AnswerCollector<'a, P: PromptProvider> {
    provider: &'a P,
}

impl<'a, P: PromptProvider> AnswerCollector<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Runs the prompts in order: name, author, description, template.
    pub fn collect(&self, prefilled: PrefilledAnswers) -> Result<ProjectAnswers> {
        let project_name = match prefilled.project_name {
            Some(name) if name.trim().is_empty() => {
                return Err(Error::ValidationError("project name must not be empty".into()))
            }
            Some(name) => name,
            None => self.ask_text(PROJECT_NAME_PROMPT, true)?,
        };
        let author = match prefilled.author {
            Some(author) => author,
            None => self.ask_text(AUTHOR_PROMPT, false)?,
        };
        let description = match prefilled.description {
            Some(description) => description,
            None => self.ask_text(DESCRIPTION_PROMPT, false)?,
        };
        let template_key = match prefilled.template {
            Some(key) => registry::resolve(&key)?.key.to_string(),
            None => self.ask_template()?,
        };

        log::debug!("Collected answers for project '{project_name}' using '{template_key}'");
        Ok(ProjectAnswers { project_name, author, description, template_key })
    }

    fn ask_text(&self, prompt: &str, required: bool) -> Result<String> {
        self.provider.prompt_text(&TextPromptConfig {
            prompt: prompt.to_string(),
            default: None,
            required,
        })
    }

    fn ask_template(&self) -> Result<String> {
        let templates: Vec<_> = registry::list_all().collect();
        let index = self.provider.prompt_single_choice(&SingleChoiceConfig {
            prompt: TEMPLATE_PROMPT.to_string(),
            choices: templates.iter().map(ToString::to_string).collect(),
            default_index: Some(0),
        })?;

        templates.get(index).map(|template| template.key.to_string()).ok_or_else(|| {
            Error::ValidationError(format!("template choice {index} is out of range"))
        })
    }
}

/// Reads `--answers`, either inline JSON or JSON from stdin.
pub fn read_prefilled(answers_arg: Option<String>) -> Result<PrefilledAnswers> {
    let Some(answers_arg) = answers_arg else {
        return Ok(PrefilledAnswers::default());
    };
    let answers_str = if answers_arg == STDIN_INDICATOR {
        read_from(std::io::stdin())?
    } else {
        answers_arg
    };
    Ok(serde_json::from_str(&answers_str)?)
}

fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AutomaticPrompter;

    #[test]
    fn asks_every_question_when_nothing_is_prefilled() {
        let prompter = AutomaticPrompter::new()
            .with_text_response(PROJECT_NAME_PROMPT, "demo")
            .with_text_response(AUTHOR_PROMPT, "Jane")
            .with_text_response(DESCRIPTION_PROMPT, "test app")
            .with_choice_response(TEMPLATE_PROMPT, 2);

        let answers = AnswerCollector::new(&prompter).collect(PrefilledAnswers::default()).unwrap();

        assert_eq!(
            answers,
            ProjectAnswers {
                project_name: "demo".to_string(),
                author: "Jane".to_string(),
                description: "test app".to_string(),
                template_key: "template-vue2-manage".to_string(),
            }
        );
    }

    #[test]
    fn prefilled_answers_are_not_asked() {
        // No responses configured: a required prompt would fail if asked.
        let prompter = AutomaticPrompter::new();
        let prefilled = PrefilledAnswers {
            project_name: Some("demo".to_string()),
            author: Some("Jane".to_string()),
            description: Some("test app".to_string()),
            template: Some("webpack-plugins".to_string()),
        };

        let answers = AnswerCollector::new(&prompter).collect(prefilled).unwrap();

        assert_eq!(answers.template_key, "webpack-plugins");
        assert_eq!(answers.project_name, "demo");
    }

    #[test]
    fn unknown_prefilled_template_is_rejected() {
        let prompter = AutomaticPrompter::new();
        let prefilled = PrefilledAnswers {
            project_name: Some("demo".to_string()),
            template: Some("react".to_string()),
            ..Default::default()
        };

        let result = AnswerCollector::new(&prompter).collect(prefilled);

        assert!(matches!(result, Err(Error::UnknownTemplateError { .. })));
    }

    #[test]
    fn empty_prefilled_name_is_rejected() {
        let prompter = AutomaticPrompter::new();
        let prefilled =
            PrefilledAnswers { project_name: Some("  ".to_string()), ..Default::default() };

        let result = AnswerCollector::new(&prompter).collect(prefilled);

        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn reads_inline_answers() {
        let prefilled =
            read_prefilled(Some(r#"{"projectName":"demo","author":"Jane"}"#.to_string()))
                .unwrap();
        assert_eq!(prefilled.project_name.as_deref(), Some("demo"));
        assert_eq!(prefilled.author.as_deref(), Some("Jane"));
        assert_eq!(read_prefilled(None).unwrap(), PrefilledAnswers::default());
    }

    #[test]
    fn malformed_inline_answers_fail() {
        assert!(matches!(
            read_prefilled(Some("{not json".to_string())),
            Err(Error::JsonError(_))
        ));
    }
}
