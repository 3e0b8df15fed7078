//! Check options and the compiled ignore matcher.
//!
//! Options arrive shaped like the host linter's JSON rule configuration and
//! are compiled once, up front. A malformed pattern is a configuration error
//! for the whole check, never a per-usage failure.

use maquette_palette::naming::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// User-facing options for the check.
///
/// ```
/// let options: maquette::CheckOptions =
///     serde_json::from_str(r#"{ "ignorePatterns": ["^app-"] }"#).unwrap();
/// assert_eq!(options.ignore_patterns.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOptions {
    /// Regular-expression sources. A usage whose name matches one of these,
    /// in any of its casing forms, is never reported.
    pub ignore_patterns: Vec<String>,
}

/// Configuration failure, surfaced before any traversal begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An `ignorePatterns` entry is not a valid regular expression.
    #[error("invalid ignore pattern {pattern:?}: {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled `ignorePatterns`.
///
/// A usage is exempt when any pattern matches the raw name or any of its
/// kebab-case, PascalCase, camelCase or snake_case renderings, so patterns
/// written against one naming convention keep working whichever convention
/// the template author used.
#[derive(Debug, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<Regex>,
}

impl IgnoreMatcher {
    /// Compile the configured patterns, failing fast on the first bad one.
    pub fn compile(options: &CheckOptions) -> Result<Self, ConfigError> {
        let mut patterns = Vec::with_capacity(options.ignore_patterns.len());
        for pattern in &options.ignore_patterns {
            let regex =
                Regex::new(pattern).map_err(|source| ConfigError::InvalidIgnorePattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            patterns.push(regex);
        }
        Ok(Self { patterns })
    }

    /// Whether a usage name is exempt from reporting.
    pub fn is_exempt(&self, name: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let kebab = to_kebab_case(name);
        let pascal = to_pascal_case(name);
        let camel = to_camel_case(name);
        let snake = to_snake_case(name);
        self.patterns.iter().any(|regex| {
            regex.is_match(name)
                || regex.is_match(&kebab)
                || regex.is_match(&pascal)
                || regex.is_match(&camel)
                || regex.is_match(&snake)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(patterns: &[&str]) -> IgnoreMatcher {
        let options = CheckOptions {
            ignore_patterns: patterns.iter().map(|p| p.to_string()).collect(),
        };
        IgnoreMatcher::compile(&options).unwrap()
    }

    #[test]
    fn test_empty_matcher_exempts_nothing() {
        let matcher = IgnoreMatcher::default();
        assert!(!matcher.is_exempt("FooBar"));
    }

    #[test]
    fn test_matches_raw_name() {
        let matcher = matcher(&["^Foo"]);
        assert!(matcher.is_exempt("FooBar"));
        assert!(!matcher.is_exempt("BarFoo"));
    }

    #[test]
    fn test_matches_any_casing_form() {
        // Pattern written in kebab-case still exempts a PascalCase usage.
        let matcher = matcher(&["^custom-"]);
        assert!(matcher.is_exempt("CustomWidget"));
        assert!(matcher.is_exempt("custom-widget"));

        // And a PascalCase pattern exempts a kebab-case usage.
        let matcher = super::tests::matcher(&["^Custom"]);
        assert!(matcher.is_exempt("custom-widget"));

        let matcher = super::tests::matcher(&["_widget$"]);
        assert!(matcher.is_exempt("CustomWidget"));
    }

    #[test]
    fn test_invalid_pattern_fails_compile() {
        let options = CheckOptions {
            ignore_patterns: vec!["^Ok".to_string(), "(unclosed".to_string()],
        };
        let err = IgnoreMatcher::compile(&options).unwrap_err();
        match err {
            ConfigError::InvalidIgnorePattern { pattern, .. } => {
                assert_eq!(pattern, "(unclosed");
            }
        }
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: CheckOptions =
            serde_json::from_str(r#"{ "ignorePatterns": ["^Foo", "bar$"] }"#).unwrap();
        assert_eq!(options.ignore_patterns, vec!["^Foo", "bar$"]);
    }

    #[test]
    fn test_options_default_is_empty() {
        let options: CheckOptions = serde_json::from_str("{}").unwrap();
        assert!(options.ignore_patterns.is_empty());
    }
}
