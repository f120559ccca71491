use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textkit::TextkitConfig;

mod commands;

use commands::case_cmd::CaseArgs;
use commands::prompt_cmd::PromptCommand;

#[derive(Parser)]
#[command(name = "textkit-cli")]
#[command(about = "Case conversion and prompt building from the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML); defaults to $TEXTKIT_CONFIG when set
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to camel, pascal, kebab or dot case
    Case(CaseArgs),

    /// Build a prompt from labeled sections
    Prompt {
        #[command(subcommand)]
        command: PromptCommand,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = TextkitConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Case(args) => commands::case_cmd::run(args, &config),
        Commands::Prompt { command } => commands::prompt_cmd::run(command, &config.prompt),
        Commands::Config => commands::config_cmd::run(&config),
    }
}
