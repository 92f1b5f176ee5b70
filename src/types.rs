//! Common types used across the h3c crate.

use crate::manifest::ManifestFields;
use serde::Deserialize;

/// Everything the user told us about the project to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnswers {
    /// Directory name and manifest `name`; never empty.
    pub project_name: String,
    pub author: String,
    pub description: String,
    /// Key of a registry template.
    pub template_key: String,
}

impl ProjectAnswers {
    pub fn manifest_fields(&self) -> ManifestFields {
        ManifestFields {
            name: self.project_name.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
        }
    }
}

/// Answers supplied up front through `--answers`.
///
/// Every field is optional; missing ones are asked interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefilledAnswers {
    pub project_name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
}
