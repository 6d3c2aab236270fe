//! `ckkeywd`: one of a fixed set of keywords.
use crate::error::ConfigError;
use crate::utils::checker::reaches_validator;
use crate::utils::{Invalid, Validator};

/// Accepts exactly one of the configured keywords. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordValidator {
    keywords: Vec<String>,
}

impl KeywordValidator {
    /// # Errors
    /// - [`ConfigError::NoKeywords`] for an empty list.
    /// - [`ConfigError::Duplicate`] when a keyword appears twice.
    /// - [`ConfigError::Unreachable`] for an empty keyword, one with surrounding
    ///   whitespace, or a prompt command (`?`, `??`, `q`, `quit`).
    pub fn new<I, S>(keywords: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.into();
            if !reaches_validator(&keyword) {
                return Err(ConfigError::Unreachable(keyword));
            }
            if list.contains(&keyword) {
                return Err(ConfigError::Duplicate(keyword));
            }
            list.push(keyword);
        }

        if list.is_empty() {
            return Err(ConfigError::NoKeywords);
        }
        Ok(Self { keywords: list })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn joined(&self) -> String {
        self.keywords.join(",")
    }
}

impl Validator for KeywordValidator {
    type Output = String;

    fn validate(&self, text: &str) -> Result<String, Invalid> {
        self.keywords
            .iter()
            .find(|k| k.as_str() == text)
            .cloned()
            .ok_or(Invalid)
    }

    fn prompt(&self) -> String {
        "Enter appropriate value".to_string()
    }

    fn help(&self) -> String {
        format!("{},q", self.joined())
    }

    fn error(&self) -> String {
        format!(
            "ERROR: Please enter one of the following keywords: {},q",
            self.joined()
        )
    }

    fn hint(&self) -> String {
        format!("{},?,q", self.joined())
    }
}
