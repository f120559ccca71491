//! Single-shot prompt: a task plus optional context sections.

use super::{required, Constraints, PromptConfig, Sections};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Fields of a basic prompt
///
/// Deserializes from camelCase (`desiredOutput`) or snake_case keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicPrompt {
    pub task: Option<String>,
    pub audience: Option<String>,
    pub constraints: Option<Constraints>,
    pub input: Option<String>,
    #[serde(alias = "desired_output")]
    pub desired_output: Option<String>,
}

impl BasicPrompt {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            ..Self::default()
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<Constraints>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_desired_output(mut self, desired_output: impl Into<String>) -> Self {
        self.desired_output = Some(desired_output.into());
        self
    }

    /// Render with the given layout; fails when `task` is absent or blank
    pub fn render(&self, config: &PromptConfig) -> Result<String> {
        let task = required("task", self.task.as_deref())?;
        let constraints = self.constraints.as_ref().and_then(Constraints::render);

        let mut sections = Sections::new();
        sections.push("Task", Some(task));
        sections.push("Audience", self.audience.as_deref());
        sections.push("Constraints", constraints.as_deref());
        sections.push("Input", self.input.as_deref());
        sections.push("Desired output", self.desired_output.as_deref());

        Ok(sections.finish(&config.section_separator))
    }
}

/// Render `prompt` with the default blank-line layout
pub fn build_basic_prompt(prompt: &BasicPrompt) -> Result<String> {
    prompt.render(&PromptConfig::default())
}
