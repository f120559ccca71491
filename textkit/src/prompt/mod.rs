//! Prompt builders
//!
//! Prompts are plain text made of labeled sections (`Task:`, `Input:`, ...)
//! separated by a blank line. Optional sections that are absent or blank
//! are left out; a missing mandatory field is an [`Error::MissingField`].

pub mod basic;
pub mod few_shot;

pub use basic::{build_basic_prompt, BasicPrompt};
pub use few_shot::{build_few_shot_prompt, Example, FewShotPrompt};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Layout settings shared by every builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Text placed between two sections
    pub section_separator: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            section_separator: "\n\n".to_string(),
        }
    }
}

/// Constraints given as one block of text or as a list of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Constraints {
    Text(String),
    List(Vec<String>),
}

impl Constraints {
    /// Lists render one `- item` per line; blank items are skipped.
    pub fn render(&self) -> Option<String> {
        let rendered = match self {
            Constraints::Text(text) => text.trim().to_string(),
            Constraints::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(|item| format!("- {}", item))
                .collect::<Vec<_>>()
                .join("\n"),
        };

        if rendered.is_empty() {
            None
        } else {
            Some(rendered)
        }
    }
}

impl From<&str> for Constraints {
    fn from(text: &str) -> Self {
        Constraints::Text(text.to_string())
    }
}

impl From<String> for Constraints {
    fn from(text: String) -> Self {
        Constraints::Text(text)
    }
}

impl From<Vec<String>> for Constraints {
    fn from(items: Vec<String>) -> Self {
        Constraints::List(items)
    }
}

impl From<Vec<&str>> for Constraints {
    fn from(items: Vec<&str>) -> Self {
        Constraints::List(items.into_iter().map(String::from).collect())
    }
}

/// Ordered labeled sections of a prompt under construction
#[derive(Debug, Default)]
pub(crate) struct Sections {
    parts: Vec<String>,
}

impl Sections {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `label:\nbody` unless the body is absent or blank
    pub(crate) fn push(&mut self, label: &str, body: Option<&str>) {
        if let Some(body) = body.map(str::trim).filter(|b| !b.is_empty()) {
            self.parts.push(format!("{}:\n{}", label, body));
        }
    }

    pub(crate) fn finish(self, separator: &str) -> String {
        self.parts.join(separator)
    }
}

/// Value of a mandatory text field, or the error naming it
pub(crate) fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(value) => Ok(value),
        None => {
            log::warn!("Prompt rejected: missing required field '{}'", field);
            Err(Error::missing_field(field))
        }
    }
}
