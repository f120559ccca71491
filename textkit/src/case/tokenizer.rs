//! Unicode-aware word splitting
//!
//! Text is decomposed (NFKD) and stripped of combining marks, word
//! boundaries are inserted at case transitions, and whatever is neither a
//! letter nor a number separates tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase (or caseless letter, or number) followed by uppercase: `fooBar`
static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\p{Ll}\p{Lm}\p{Lo}\p{N}])(\p{Lu})")
        .expect("tokenizer: invalid case boundary regex")
});

/// Uppercase run followed by a number or caseless letter: `XML2`
static ACRONYM_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\p{Lu}{2,})([\p{N}\p{Lm}\p{Lo}])")
        .expect("tokenizer: invalid acronym end regex")
});

/// Last capital of an uppercase run that starts a word: `HTTPRequest`
static ACRONYM_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\p{Lu})(\p{Lu}\p{Ll})").expect("tokenizer: invalid acronym boundary regex")
});

static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("tokenizer: invalid delimiter regex"));

static ACRONYM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}{2,}$").expect("tokenizer: invalid acronym regex"));

/// A maximal run of letters and numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    acronym: bool,
}

impl Token {
    fn new(text: &str, preserve_acronyms: bool) -> Self {
        Self {
            text: text.to_string(),
            acronym: preserve_acronyms && is_acronym(text),
        }
    }

    /// The token exactly as it appeared after normalization
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the token is kept verbatim when rendered
    pub fn is_acronym(&self) -> bool {
        self.acronym
    }

    pub fn to_lowercase(&self) -> String {
        self.text.to_lowercase()
    }

    /// First character uppercased, the rest lowercased
    pub fn capitalized(&self) -> String {
        let mut chars = self.text.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        }
    }
}

/// True for runs of two or more uppercase letters
pub fn is_acronym(word: &str) -> bool {
    ACRONYM.is_match(word)
}

/// Compatibility-decompose `input` and drop combining marks (`café` → `cafe`)
pub fn normalize(input: &str) -> String {
    input.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Split `input` into tokens, in order, none of them empty.
///
/// When `preserve_acronyms` is false no token is tagged as an acronym.
pub fn tokenize(input: &str, preserve_acronyms: bool) -> Vec<Token> {
    let normalized = normalize(input);
    let split = LOWER_UPPER.replace_all(&normalized, "$1 $2");
    let split = ACRONYM_END.replace_all(&split, "$1 $2");
    let split = ACRONYM_TAIL.replace_all(&split, "$1 $2");

    DELIMITERS
        .split(&split)
        .filter(|word| !word.is_empty())
        .map(|word| Token::new(word, preserve_acronyms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        tokenize(input, true)
            .iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_splits_on_delimiter_runs() {
        assert_eq!(words("  --foo_bar--baz  "), vec!["foo", "bar", "baz"]);
        assert_eq!(words("a.b/c\\d"), vec!["a", "b", "c", "d"]);
        assert!(words("").is_empty());
        assert!(words(" -_- ").is_empty());
    }

    #[test]
    fn test_splits_case_transitions() {
        assert_eq!(words("fooBar"), vec!["foo", "Bar"]);
        assert_eq!(words("HelloWorld"), vec!["Hello", "World"]);
        assert_eq!(words("version2Beta"), vec!["version2", "Beta"]);
        assert_eq!(words("XMLHTTPRequest"), vec!["XMLHTTP", "Request"]);
        assert_eq!(words("ABc"), vec!["A", "Bc"]);
    }

    #[test]
    fn test_acronym_ends_before_numbers() {
        assert_eq!(words("XML2Parser"), vec!["XML", "2", "Parser"]);
        assert_eq!(words("HTTP2 server"), vec!["HTTP", "2", "server"]);
        assert_eq!(words("getURLV2"), vec!["get", "URLV", "2"]);
        assert_eq!(words("XML東京"), vec!["XML", "東京"]);
        // a lone capital keeps its digits
        assert_eq!(words("A2"), vec!["A2"]);
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("Ångström"), "Angstrom");
        assert_eq!(words("crème brûlée"), vec!["creme", "brulee"]);
    }

    #[test]
    fn test_compatibility_forms() {
        assert_eq!(normalize("ﬁle"), "file");
        assert_eq!(words("①②"), vec!["12"]);
    }

    #[test]
    fn test_non_latin_letters() {
        assert_eq!(words("привет мир"), vec!["привет", "мир"]);
        assert_eq!(words("東京Tower"), vec!["東京", "Tower"]);
    }

    #[test]
    fn test_acronym_tagging() {
        let tokens = tokenize("XML http A", true);
        assert!(tokens[0].is_acronym());
        assert!(!tokens[1].is_acronym());
        // single letters never count
        assert!(!tokens[2].is_acronym());

        let tokens = tokenize("XML", false);
        assert!(!tokens[0].is_acronym());
    }

    #[test]
    fn test_capitalized() {
        let token = Token::new("wORLD", false);
        assert_eq!(token.capitalized(), "World");
        assert_eq!(token.to_lowercase(), "world");
    }
}
