//! `case` command: convert arguments or stdin lines

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufRead, Write};
use textkit::{convert, ConversionOptions, Style, TextkitConfig};

#[derive(Debug, Args)]
pub struct CaseArgs {
    /// Target style (camel, pascal, kebab, dot)
    pub style: Style,

    /// Text to convert; each stdin line is converted when omitted
    pub text: Vec<String>,

    /// Keep all-caps words verbatim (ignored by kebab)
    #[arg(long, conflicts_with = "no_acronyms")]
    pub acronyms: bool,

    /// Lowercase all-caps words like any other
    #[arg(long)]
    pub no_acronyms: bool,

    /// Prefix for camel/pascal results that start with a digit
    #[arg(long, value_name = "PREFIX", conflicts_with = "no_digit_prefix")]
    pub digit_prefix: Option<String>,

    /// Allow camel/pascal results to start with a digit
    #[arg(long)]
    pub no_digit_prefix: bool,
}

impl CaseArgs {
    /// Command-line flags override the configured options
    fn options(&self, configured: ConversionOptions) -> ConversionOptions {
        let mut options = configured;

        if self.acronyms {
            options = options.with_preserve_acronyms(true);
        } else if self.no_acronyms {
            options = options.with_preserve_acronyms(false);
        }

        if let Some(prefix) = &self.digit_prefix {
            options = options.with_digit_prefix(prefix.as_str());
        } else if self.no_digit_prefix {
            options = options.without_digit_prefix();
        }

        options
    }
}

pub fn run(args: CaseArgs, config: &TextkitConfig) -> Result<()> {
    let options = args.options(config.case.options_for(args.style));
    log::debug!("Converting to {} with {:?}", args.style, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            writeln!(out, "{}", convert(&line, &options, args.style))?;
        }
    } else {
        let text = args.text.join(" ");
        writeln!(out, "{}", convert(&text, &options, args.style))?;
    }

    Ok(())
}
