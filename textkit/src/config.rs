//! TOML configuration
//!
//! ```toml
//! [case.camel]
//! preserveAcronyms = false
//! digitPrefix = "n"
//!
//! [case.dot]
//! preserve_acronyms = true
//!
//! [prompt]
//! section_separator = "\n\n"
//! ```
//!
//! Every section and key is optional; missing ones take the library defaults.

use crate::case::{ConversionOptions, DigitPrefix, Style};
use crate::error::{Error, ErrorContext, Result};
use crate::prompt::PromptConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when none is given explicitly
pub const CONFIG_ENV_VAR: &str = "TEXTKIT_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextkitConfig {
    #[serde(default)]
    pub case: CaseConfig,

    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Default conversion options per style
///
/// Kebab takes no options, so it has no table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    pub camel: ConversionOptions,
    pub pascal: ConversionOptions,
    pub dot: ConversionOptions,
}

impl CaseConfig {
    /// Options to use when converting to `style`
    pub fn options_for(&self, style: Style) -> ConversionOptions {
        match style {
            Style::Camel => self.camel.clone(),
            Style::Pascal => self.pascal.clone(),
            Style::Dot => self.dot.clone(),
            Style::Kebab => ConversionOptions::default(),
        }
    }
}

impl TextkitConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).with_context(|| {
            format!(
                "Failed to read config file '{}'. Make sure the file exists and is readable.",
                path_ref.display()
            )
        })?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file '{}'", path_ref.display()))?;

        log::debug!(
            "Successfully loaded configuration from: {}",
            path_ref.display()
        );
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TextkitConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path wins, then the `TEXTKIT_CONFIG` variable; with
    /// neither, defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(path),
            None => {
                log::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        if self.prompt.section_separator.is_empty() {
            return Err(Error::config("prompt.section_separator must not be empty"));
        }

        for (name, options) in [
            ("camel", &self.case.camel),
            ("pascal", &self.case.pascal),
            ("dot", &self.case.dot),
        ] {
            if let DigitPrefix::Prefix(prefix) = &options.digit_prefix {
                if prefix.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(Error::config(format!(
                        "case.{}.digitPrefix '{}' must not start with a digit",
                        name, prefix
                    )));
                }
            }
        }

        Ok(())
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize configuration: {}", e)))
    }
}
