//! `prompt` commands: basic prompts from flags, few-shot prompts from JSON

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use textkit::prompt::{BasicPrompt, Constraints, FewShotPrompt, PromptConfig};

#[derive(Debug, Subcommand)]
pub enum PromptCommand {
    /// Build a prompt from a task and optional context
    Basic {
        /// What the model should do
        #[arg(long)]
        task: Option<String>,

        /// Who the answer is for
        #[arg(long)]
        audience: Option<String>,

        /// A constraint; repeat for several
        #[arg(long = "constraint", value_name = "TEXT")]
        constraints: Vec<String>,

        /// Input text for the task
        #[arg(long)]
        input: Option<String>,

        /// Shape of the expected answer
        #[arg(long)]
        desired_output: Option<String>,
    },

    /// Build a few-shot prompt from a JSON document
    FewShot {
        /// JSON file with task, examples, ... ("-" reads stdin)
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },
}

pub fn run(command: PromptCommand, config: &PromptConfig) -> Result<()> {
    let prompt = match command {
        PromptCommand::Basic {
            task,
            audience,
            constraints,
            input,
            desired_output,
        } => {
            let prompt = BasicPrompt {
                task,
                audience,
                constraints: (!constraints.is_empty()).then(|| Constraints::List(constraints)),
                input,
                desired_output,
            };
            prompt.render(config)?
        }
        PromptCommand::FewShot { file } => {
            let document = read_document(&file)?;
            let prompt: FewShotPrompt = serde_json::from_str(&document)
                .with_context(|| format!("Invalid few-shot document '{}'", file.display()))?;
            prompt.render(config)?
        }
    };

    println!("{}", prompt);
    Ok(())
}

fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}
