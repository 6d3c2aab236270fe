//! `ckstr`: free text, optionally constrained by a pattern.
use crate::error::ConfigError;
use crate::utils::validate::{DEFAULT_ERROR, DEFAULT_HELP};
use crate::utils::{Invalid, Validator};
use regex::Regex;

/// Non-empty text of at least `min_len` characters, optionally matching a
/// regular expression anchored at the start of the answer.
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    pattern: Option<(String, Regex)>,
    min_len: usize,
}

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`ConfigError::Pattern`] when `pattern` does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        self.pattern = Some((pattern.to_string(), regex));
        Ok(self)
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|(source, _)| source.as_str())
    }
}

impl Validator for StringValidator {
    type Output = String;

    fn validate(&self, text: &str) -> Result<String, Invalid> {
        if text.is_empty() || text.chars().count() < self.min_len {
            return Err(Invalid);
        }
        match &self.pattern {
            Some((_, regex)) if !regex.is_match(text) => Err(Invalid),
            _ => Ok(text.to_string()),
        }
    }

    fn help(&self) -> String {
        match self.pattern() {
            Some(pattern) => format!(
                "Please enter a string that matches the following pattern:\n{}",
                pattern
            ),
            None if self.min_len > 1 => {
                format!("Please enter a string of at least {} characters.", self.min_len)
            }
            None => DEFAULT_HELP.to_string(),
        }
    }

    fn error(&self) -> String {
        match (self.pattern(), self.min_len) {
            (None, 0 | 1) => DEFAULT_ERROR.to_string(),
            _ => format!("ERROR: {}", self.help()),
        }
    }
}
