//! textkit - small string-formatting helpers
//!
//! textkit provides:
//! - Unicode-aware case conversion (camelCase, PascalCase, kebab-case, dot.case)
//! - Prompt builders that assemble labeled text sections
//! - TOML configuration for per-style conversion defaults

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod case;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod prompt;

// Re-export main types for public API
pub use case::{
    convert, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, Casing,
    ConversionOptions, DigitPrefix, Style, TextLike,
};
#[cfg(feature = "config")]
pub use config::TextkitConfig;
pub use error::{Error, Result};
pub use prompt::{
    build_basic_prompt, build_few_shot_prompt, BasicPrompt, Example, FewShotPrompt,
    PromptConfig,
};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::case::{
        convert, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, Casing,
        ConversionOptions, DigitPrefix, Style, TextLike,
    };
    #[cfg(feature = "config")]
    pub use crate::config::TextkitConfig;
    pub use crate::error::{Error, ErrorContext, Result};
    pub use crate::prompt::{
        build_basic_prompt, build_few_shot_prompt, BasicPrompt, Constraints, Example,
        FewShotPrompt,
    };
}
