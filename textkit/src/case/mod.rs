//! Case conversion
//!
//! Every converter runs the same two phases: the tokenizer turns arbitrary
//! text into words, and a style renderer joins them back together.
//!
//! ```rust
//! use textkit::case::{to_camel_case, to_kebab_case, ConversionOptions};
//!
//! let options = ConversionOptions::default();
//! assert_eq!(to_camel_case("hello world", &options), "helloWorld");
//! assert_eq!(to_camel_case("XML_HTTP request", &options), "XMLHTTPRequest");
//! assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
//! ```
//!
//! Conversion is total: any input, including absent values, yields a string.

pub mod input;
pub mod options;
pub mod tokenizer;

pub use input::TextLike;
pub use options::{Casing, ConversionOptions, DigitPrefix};
pub use tokenizer::{tokenize, Token};

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target case style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Camel,
    Pascal,
    Kebab,
    Dot,
}

/// What a style does beyond joining words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    /// Text placed between words, if any
    pub separator: Option<&'static str>,
    /// Whether acronym tokens may be kept verbatim
    pub acronyms: bool,
    /// Acronym handling when the caller does not choose
    pub default_preserve_acronyms: bool,
    /// Whether a leading digit gets the configured prefix
    pub digit_guard: bool,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Camel, Style::Pascal, Style::Kebab, Style::Dot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Camel => "camel",
            Style::Pascal => "pascal",
            Style::Kebab => "kebab",
            Style::Dot => "dot",
        }
    }

    /// Kebab is the plain profile: always lowercase, leading digits allowed.
    pub fn profile(&self) -> StyleProfile {
        match self {
            Style::Camel | Style::Pascal => StyleProfile {
                separator: None,
                acronyms: true,
                default_preserve_acronyms: true,
                digit_guard: true,
            },
            Style::Kebab => StyleProfile {
                separator: Some("-"),
                acronyms: false,
                default_preserve_acronyms: false,
                digit_guard: false,
            },
            Style::Dot => StyleProfile {
                separator: Some("."),
                acronyms: true,
                default_preserve_acronyms: false,
                digit_guard: false,
            },
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Style::Camel),
            "pascal" | "pascalcase" => Ok(Style::Pascal),
            "kebab" | "kebabcase" | "kebab-case" => Ok(Style::Kebab),
            "dot" | "dotcase" | "dot.case" => Ok(Style::Dot),
            other => Err(Error::invalid_input(format!(
                "unknown case style '{}' (expected camel, pascal, kebab or dot)",
                other
            ))),
        }
    }
}

/// Convert `input` to `style`.
///
/// Options are merged with the style's profile once, up front. Returns an
/// empty string when the input holds no letters or numbers.
pub fn convert<T>(input: &T, options: &ConversionOptions, style: Style) -> String
where
    T: TextLike + ?Sized,
{
    let resolved = options.resolve(style);
    let text = input.to_text();
    let tokens = tokenize(&text, resolved.preserve_acronyms);

    log::trace!("{} conversion: {} token(s)", style, tokens.len());

    if tokens.is_empty() {
        return String::new();
    }

    let mut result = render(&tokens, style);

    if let Some(prefix) = resolved.digit_prefix {
        if result.starts_with(|c: char| c.is_ascii_digit()) {
            result.insert_str(0, prefix);
        }
    }

    result
}

fn render(tokens: &[Token], style: Style) -> String {
    match style.profile().separator {
        None => tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if token.is_acronym() {
                    token.as_str().to_string()
                } else if i == 0 && style == Style::Camel {
                    token.to_lowercase()
                } else {
                    token.capitalized()
                }
            })
            .collect(),
        Some(separator) => tokens
            .iter()
            .map(|token| {
                if token.is_acronym() {
                    token.as_str().to_string()
                } else {
                    token.to_lowercase()
                }
            })
            .collect::<Vec<_>>()
            .join(separator),
    }
}

/// camelCase, or PascalCase when `options.casing` is `Pascal`
pub fn to_camel_case<T>(input: &T, options: &ConversionOptions) -> String
where
    T: TextLike + ?Sized,
{
    convert(input, options, options.casing.style())
}

pub fn to_pascal_case<T>(input: &T, options: &ConversionOptions) -> String
where
    T: TextLike + ?Sized,
{
    convert(input, options, Style::Pascal)
}

/// dot.case; acronyms are lowered unless `preserve_acronyms` is set
pub fn to_dot_case<T>(input: &T, options: &ConversionOptions) -> String
where
    T: TextLike + ?Sized,
{
    convert(input, options, Style::Dot)
}

/// kebab-case, always lowercase and without a digit prefix
pub fn to_kebab_case<T>(input: &T) -> String
where
    T: TextLike + ?Sized,
{
    convert(input, &ConversionOptions::default(), Style::Kebab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn camel(input: &str) -> String {
        to_camel_case(input, &ConversionOptions::default())
    }

    #[test]
    fn test_camel_case_basics() {
        assert_eq!(camel("hello world"), "helloWorld");
        assert_eq!(camel("  --foo_bar--baz  "), "fooBarBaz");
        assert_eq!(camel("Hello"), "hello");
        assert_eq!(camel(""), "");
        assert_eq!(camel("!!!"), "");
    }

    #[test]
    fn test_camel_case_acronyms() {
        let keep = ConversionOptions::new().with_preserve_acronyms(true);
        let lower = ConversionOptions::new().with_preserve_acronyms(false);

        assert_eq!(to_camel_case("XML_HTTP request", &keep), "XMLHTTPRequest");
        assert_eq!(to_camel_case("XML http request", &lower), "xmlHttpRequest");
        assert_eq!(to_camel_case("parse XML", &keep), "parseXML");
    }

    #[test]
    fn test_acronym_before_number_is_stable() {
        for (input, expected) in [
            ("XML 2 parser", "XML2Parser"),
            ("XML 2", "XML2"),
            ("get URL v2", "getURLV2"),
            ("HTTP2 server", "HTTP2Server"),
            ("XML 東京", "XML東京"),
        ] {
            let once = camel(input);
            assert_eq!(once, expected);
            assert_eq!(camel(&once), expected, "re-converting {:?}", once);
        }

        let pascal = to_pascal_case("XML 2 parser", &ConversionOptions::default());
        assert_eq!(pascal, "XML2Parser");
        assert_eq!(to_pascal_case(&pascal, &ConversionOptions::default()), pascal);
    }

    #[test]
    fn test_capital_before_lowercase_starts_a_word() {
        assert_eq!(camel("ABc"), "aBc");
        assert_eq!(camel("IPhone"), "iPhone");
        assert_eq!(to_kebab_case("IPhone"), "i-phone");
    }

    #[test]
    fn test_digit_prefix() {
        assert_eq!(camel("123 abc"), "_123Abc");

        let disabled = ConversionOptions::new().without_digit_prefix();
        assert_eq!(to_camel_case("123 abc", &disabled), "123Abc");

        let custom = ConversionOptions::new().with_digit_prefix("n");
        assert_eq!(to_camel_case("9 lives", &custom), "n9Lives");
    }

    #[test]
    fn test_empty_result_is_never_prefixed() {
        let options = ConversionOptions::new().with_digit_prefix("x");
        assert_eq!(to_camel_case("  ", &options), "");
    }

    #[test]
    fn test_pascal_via_casing_option() {
        let options = ConversionOptions::new().with_casing(Casing::Pascal);
        assert_eq!(to_camel_case("hello world", &options), "HelloWorld");
        assert_eq!(to_pascal_case("hello world", &ConversionOptions::default()), "HelloWorld");
        assert_eq!(to_pascal_case("api key", &options), "ApiKey");
        assert_eq!(to_pascal_case("API key", &options), "APIKey");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
        assert_eq!(to_kebab_case("hello--world"), "hello-world");
        assert_eq!(to_kebab_case("-hello-world-"), "hello-world");
        assert_eq!(to_kebab_case("XML Parser"), "xml-parser");
        assert_eq!(to_kebab_case("404 page"), "404-page");
    }

    #[test]
    fn test_dot_case() {
        let options = ConversionOptions::default();
        assert_eq!(to_dot_case("Hello World", &options), "hello.world");
        assert_eq!(to_dot_case("XML parser", &options), "xml.parser");

        let keep = ConversionOptions::new().with_preserve_acronyms(true);
        assert_eq!(to_dot_case("XML parser", &keep), "XML.parser");
        assert_eq!(to_dot_case("1st place", &options), "1st.place");
    }

    #[test]
    fn test_non_text_input() {
        let options = ConversionOptions::default();
        assert_eq!(to_camel_case(&None::<&str>, &options), "");
        assert_eq!(to_camel_case(&json!(null), &options), "");
        assert_eq!(to_camel_case(&42i32, &options), "_42");
        assert_eq!(to_kebab_case(&json!(["user", "id"])), "user-id");
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("camel".parse::<Style>().unwrap(), Style::Camel);
        assert_eq!("Kebab-Case".parse::<Style>().unwrap(), Style::Kebab);
        assert_eq!(Style::Dot.to_string(), "dot");

        let err = "snake".parse::<Style>().unwrap_err();
        assert_eq!(err.error_code(), "E_INVALID_INPUT");
    }

    #[test]
    fn test_convert_dispatches_on_style() {
        let options = ConversionOptions::default();
        let input = "user profile ID";
        let results: Vec<String> = Style::ALL
            .iter()
            .map(|style| convert(input, &options, *style))
            .collect();

        assert_eq!(
            results,
            vec!["userProfileID", "UserProfileID", "user-profile-id", "user.profile.id"]
        );
    }
}
