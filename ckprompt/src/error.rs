//! # Errors
//!
//! Three kinds of failure exist around a prompt:
//!
//! - [`Invalid`](crate::utils::Invalid): the validator rejected the text. This never leaves the
//!   [`Checker`](crate::utils::Checker) loop, the user is simply asked again.
//! - [`CheckError`]: the prompt ended without a value (the user quit, input closed,
//!   the channel failed or the attempt limit was hit).
//! - [`ConfigError`]: a checker was built with parameters that can never accept anything
//!   (empty keyword set, inverted range, broken pattern...). These are reported by the
//!   constructors, before anything is printed.
use std::io;

/// Why the user left the prompt loop without giving an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbortReason {
    /// The input stream reached end-of-file.
    EndOfInput,
    /// The read was interrupted (e.g. by a signal).
    Interrupted,
    /// The user typed `q` or `quit`.
    Quit,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "end of input"),
            Self::Interrupted => write!(f, "interrupted"),
            Self::Quit => write!(f, "user quit"),
        }
    }
}

/// Failures surfaced to the caller of [`Checker::ask`](crate::utils::Checker::ask).
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("prompt aborted: {0}")]
    Aborted(AbortReason),
    #[error("no valid answer after {0} attempts")]
    AttemptsExhausted(usize),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl CheckError {
    /// `true` when the user ended the prompt (quit, EOF or interrupt).
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

/// Construction-time errors for checkers and prompt specs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("empty range: lower bound {lower} is greater than upper bound {upper}")]
    EmptyRange { lower: i64, upper: i64 },
    #[error("no keywords given")]
    NoKeywords,
    #[error("no menu choices given")]
    NoChoices,
    #[error("duplicate entry {0:?}")]
    Duplicate(String),
    #[error("entry {0:?} can never be typed at the prompt")]
    Unreachable(String),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("invalid date/time format {0:?}")]
    Format(String),
    #[error("default value {0:?} does not pass validation")]
    Default(String),
    #[error("cannot read identity database {path}: {source}")]
    IdentityDatabase {
        path: &'static str,
        #[source]
        source: io::Error,
    },
}
