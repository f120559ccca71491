//! Conversion options and their per-style resolution.

use super::Style;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// First-token rendering for the camel family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    #[default]
    Camel,
    Pascal,
}

impl Casing {
    /// The style this casing renders with
    pub fn style(self) -> Style {
        match self {
            Casing::Camel => Style::Camel,
            Casing::Pascal => Style::Pascal,
        }
    }
}

/// Text put in front of a result that would otherwise start with a digit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitPrefix {
    Disabled,
    Prefix(String),
}

impl DigitPrefix {
    pub const DEFAULT: &'static str = "_";

    pub fn as_prefix(&self) -> Option<&str> {
        match self {
            DigitPrefix::Disabled => None,
            DigitPrefix::Prefix(prefix) => Some(prefix.as_str()),
        }
    }
}

impl Default for DigitPrefix {
    fn default() -> Self {
        DigitPrefix::Prefix(Self::DEFAULT.to_string())
    }
}

impl From<&str> for DigitPrefix {
    fn from(prefix: &str) -> Self {
        DigitPrefix::Prefix(prefix.to_string())
    }
}

impl From<String> for DigitPrefix {
    fn from(prefix: String) -> Self {
        DigitPrefix::Prefix(prefix)
    }
}

/// `false` disables the guard, `true` keeps the default prefix
impl From<bool> for DigitPrefix {
    fn from(enabled: bool) -> Self {
        if enabled {
            DigitPrefix::default()
        } else {
            DigitPrefix::Disabled
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDigitPrefix {
    Flag(bool),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl<'de> Deserialize<'de> for DigitPrefix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawDigitPrefix::deserialize(deserializer)? {
            RawDigitPrefix::Flag(enabled) => DigitPrefix::from(enabled),
            RawDigitPrefix::Text(prefix) => DigitPrefix::Prefix(prefix),
            RawDigitPrefix::Integer(n) => DigitPrefix::Prefix(n.to_string()),
            RawDigitPrefix::Float(n) => DigitPrefix::Prefix(n.to_string()),
        })
    }
}

impl Serialize for DigitPrefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DigitPrefix::Disabled => serializer.serialize_bool(false),
            DigitPrefix::Prefix(prefix) => serializer.serialize_str(prefix),
        }
    }
}

/// Options accepted by the converters
///
/// `preserve_acronyms: None` means "whatever the target style defaults to":
/// camel and pascal keep acronyms, dot lowers them, kebab has no acronym mode.
///
/// Keys deserialize in camelCase (`styleCasing`, `preserveAcronyms`,
/// `digitPrefix`) or snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    #[serde(alias = "styleCasing", alias = "style_casing")]
    pub casing: Casing,

    #[serde(alias = "preserve_acronyms", skip_serializing_if = "Option::is_none")]
    pub preserve_acronyms: Option<bool>,

    #[serde(alias = "digit_prefix")]
    pub digit_prefix: DigitPrefix,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    pub fn with_preserve_acronyms(mut self, preserve: bool) -> Self {
        self.preserve_acronyms = Some(preserve);
        self
    }

    pub fn with_digit_prefix(mut self, prefix: impl Into<DigitPrefix>) -> Self {
        self.digit_prefix = prefix.into();
        self
    }

    pub fn without_digit_prefix(mut self) -> Self {
        self.digit_prefix = DigitPrefix::Disabled;
        self
    }

    /// Merge these options with the defaults of `style`.
    pub(crate) fn resolve(&self, style: Style) -> ResolvedOptions<'_> {
        let profile = style.profile();

        ResolvedOptions {
            preserve_acronyms: profile.acronyms
                && self
                    .preserve_acronyms
                    .unwrap_or(profile.default_preserve_acronyms),
            digit_prefix: if profile.digit_guard {
                self.digit_prefix.as_prefix()
            } else {
                None
            },
        }
    }
}

/// Options after merging with a style profile; read once per conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedOptions<'a> {
    pub(crate) preserve_acronyms: bool,
    pub(crate) digit_prefix: Option<&'a str>,
}
