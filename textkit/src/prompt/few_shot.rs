//! Few-shot prompt: a task illustrated by numbered input/output examples.

use super::{required, Constraints, PromptConfig, Sections};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const INPUT_KEYS: [&str; 3] = ["input", "inputs", "example"];
const OUTPUT_KEYS: [&str; 3] = ["output", "outputs", "result"];

/// One worked example, kept as the JSON object it was given as
///
/// The input is read from `input`, falling back to `inputs` then `example`;
/// the output from `output`, then `outputs`, then `result`. Any value that is
/// not an object is taken as the input of an example with no output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct Example {
    fields: Map<String, Value>,
}

impl From<Value> for Example {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            other => {
                let mut fields = Map::new();
                fields.insert("input".to_string(), other);
                Self { fields }
            }
        }
    }
}

impl From<Example> for Value {
    fn from(example: Example) -> Self {
        Value::Object(example.fields)
    }
}

impl Example {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("input".to_string(), Value::String(input.into()));
        fields.insert("output".to_string(), Value::String(output.into()));
        Self { fields }
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn input_text(&self) -> String {
        self.lookup(&INPUT_KEYS)
    }

    pub fn output_text(&self) -> String {
        self.lookup(&OUTPUT_KEYS)
    }

    fn lookup(&self, keys: &[&str]) -> String {
        keys.iter()
            .find_map(|key| self.fields.get(*key).filter(|v| !v.is_null()))
            .map(value_text)
            .unwrap_or_default()
    }

    fn render(&self, index: usize) -> String {
        format!(
            "Example {}:\nInput: {}\nOutput: {}",
            index,
            self.input_text(),
            self.output_text()
        )
    }
}

/// Strings verbatim, anything else as compact JSON
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fields of a few-shot prompt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FewShotPrompt {
    pub task: Option<String>,
    pub instructions: Option<String>,
    pub constraints: Option<Constraints>,
    pub examples: Option<Vec<Example>>,
    pub input: Option<String>,
    #[serde(alias = "desired_output")]
    pub desired_output: Option<String>,
}

impl FewShotPrompt {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            ..Self::default()
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<Constraints>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.get_or_insert_with(Vec::new).push(example);
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

    /// Render with the given layout
    ///
    /// Fails when `task` is absent or blank, or when there is no example.
    pub fn render(&self, config: &PromptConfig) -> Result<String> {
        let task = required("task", self.task.as_deref())?;
        let examples = match self.examples.as_deref() {
            Some(examples) if !examples.is_empty() => examples,
            _ => {
                log::warn!("Prompt rejected: missing required field 'examples'");
                return Err(Error::missing_field("examples"));
            }
        };

        let rendered_examples = examples
            .iter()
            .enumerate()
            .map(|(i, example)| example.render(i + 1))
            .collect::<Vec<_>>()
            .join(config.section_separator.as_str());
        let constraints = self.constraints.as_ref().and_then(Constraints::render);

        let mut sections = Sections::new();
        sections.push("Task", Some(task));
        sections.push("Instructions", self.instructions.as_deref());
        sections.push("Constraints", constraints.as_deref());
        sections.push("Examples", Some(rendered_examples.as_str()));
        sections.push("Input", self.input.as_deref());
        sections.push("Desired output", self.desired_output.as_deref());

        log::debug!("Built few-shot prompt with {} example(s)", examples.len());
        Ok(sections.finish(&config.section_separator))
    }
}

/// Render `prompt` with the default blank-line layout
pub fn build_few_shot_prompt(prompt: &FewShotPrompt) -> Result<String> {
    prompt.render(&PromptConfig::default())
}
