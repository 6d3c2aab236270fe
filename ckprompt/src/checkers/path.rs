//! `ckpath`: a pathname.
//!
//! By default only the shape is checked: the path must be absolute. Extra
//! [`PathRule`]s ask the filesystem about the path (existence, kind, size,
//! readability); they run in the order they were added and the first failing
//! rule rejects the answer.
//!
//! ```rust
//! use ckprompt::checkers::{PathRule, PathValidator};
//! use ckprompt::utils::Validator;
//!
//! let dirs = PathValidator::new().with_rule(PathRule::Directory);
//! assert!(dirs.validate("/").is_ok());
//! assert!(dirs.validate("relative/path").is_err());
//! ```
use crate::utils::{Invalid, Validator};
use std::fs;
use std::path::{Path, PathBuf};

/// A filesystem condition a path must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// Something exists at the path.
    Exists,
    /// Nothing exists at the path yet.
    NotExists,
    Directory,
    /// A regular file.
    File,
    /// A regular file with a size above zero.
    NonEmpty,
    /// The path can be opened for reading.
    Readable,
}

impl PathRule {
    fn check(self, path: &Path) -> bool {
        match self {
            Self::Exists => path.exists(),
            Self::NotExists => fs::symlink_metadata(path).is_err(),
            Self::Directory => path.is_dir(),
            Self::File => path.is_file(),
            Self::NonEmpty => fs::metadata(path).is_ok_and(|m| m.is_file() && m.len() > 0),
            Self::Readable => {
                if path.is_dir() {
                    fs::read_dir(path).is_ok()
                } else {
                    fs::File::open(path).is_ok()
                }
            }
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Exists => "must exist",
            Self::NotExists => "must not exist",
            Self::Directory => "must be a directory",
            Self::File => "must be a regular file",
            Self::NonEmpty => "must be a non-empty file",
            Self::Readable => "must be readable",
        }
    }
}

/// Absolute pathname, plus any configured [`PathRule`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathValidator {
    absolute: bool,
    rules: Vec<PathRule>,
}

impl Default for PathValidator {
    fn default() -> Self {
        Self {
            absolute: true,
            rules: Vec::new(),
        }
    }
}

impl PathValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts relative paths too.
    pub fn allow_relative(mut self) -> Self {
        self.absolute = false;
        self
    }

    pub fn with_rule(mut self, rule: PathRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }
}

impl Validator for PathValidator {
    type Output = PathBuf;

    fn validate(&self, text: &str) -> Result<PathBuf, Invalid> {
        let path = PathBuf::from(text);
        if self.absolute && !path.has_root() {
            return Err(Invalid);
        }

        match self.rules.iter().find(|rule| !rule.check(&path)) {
            Some(rule) => {
                tracing::trace!(path = %path.display(), ?rule, "path rule failed");
                Err(Invalid)
            }
            None => Ok(path),
        }
    }

    fn prompt(&self) -> String {
        "Enter a pathname".to_string()
    }

    fn help(&self) -> String {
        let mut help = String::from("Enter a pathname");
        if self.absolute {
            help.push_str("\n- must be absolute");
        }
        for rule in &self.rules {
            help.push_str("\n- ");
            help.push_str(rule.describe());
        }
        help
    }

    fn error(&self) -> String {
        "ERROR: Invalid pathname".to_string()
    }
}
