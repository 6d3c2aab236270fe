//! # Prompt loop
//!
//! [`Checker`] drives a [`Validator`] through a [`Prompter`]:
//!
//! ```text
//!            +-----------+   line    +------------+   Ok(value)   +----------+
//!   start -->| PROMPTING |---------->| VALIDATING |-------------->| ACCEPTED |
//!            +-----------+           +------------+               +----------+
//!              ^    |  EOF / q             | Err(Invalid)
//!              |    v                      v
//!              | +---------+         +----------+
//!              | | ABORTED |         | REJECTED |-- error text --+
//!              | +---------+         +----------+                |
//!              +-------------------------------------------------+
//! ```
//!
//! Before validation the loop handles the interactive commands:
//! - `?` prints the help text,
//! - `??` reprints the menu (only for validators that have one),
//! - `q` / `quit` aborts,
//! - an empty line returns the default when one is configured, and is
//!   rejected otherwise.
//!
//! Retrying is unbounded unless [`PromptSpec::max_attempts`] is set.
use crate::error::{AbortReason, CheckError, ConfigError};
use crate::utils::terminal::{Prompter, Terminal};
use crate::utils::validate::{Invalid, Validator};
use std::{fmt, io, num::NonZeroUsize};

/// Per-call prompt configuration.
///
/// Every text left as `None` falls back to the validator's own text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PromptSpec<T> {
    /// Prompt line shown before the hint.
    pub prompt: Option<String>,
    /// Text printed on `?`.
    pub help: Option<String>,
    /// Text printed after a rejected answer.
    pub error: Option<String>,
    /// Value returned when the user just presses enter.
    pub default: Option<T>,
    /// Number of rejected answers after which the loop gives up.
    pub max_attempts: Option<NonZeroUsize>,
}

impl<T> Default for PromptSpec<T> {
    fn default() -> Self {
        Self {
            prompt: None,
            help: None,
            error: None,
            default: None,
            max_attempts: None,
        }
    }
}

/// What a trimmed line asks the loop to do.
enum Reply<'a> {
    Quit,
    Help,
    Menu,
    Empty,
    Text(&'a str),
}

impl<'a> Reply<'a> {
    fn classify(text: &'a str) -> Self {
        match text {
            "" => Reply::Empty,
            "?" => Reply::Help,
            "??" => Reply::Menu,
            t if t.eq_ignore_ascii_case("q") || t.eq_ignore_ascii_case("quit") => Reply::Quit,
            t => Reply::Text(t),
        }
    }
}

/// `true` when an answer typed exactly as `text` is handed to the validator:
/// not empty, not a prompt command, no surrounding whitespace.
pub(crate) fn reaches_validator(text: &str) -> bool {
    text.trim() == text && matches!(Reply::classify(text), Reply::Text(_))
}

/// Prompts until the [`Validator`] accepts the answer or the user gives up.
///
/// A checker holds no state between calls; [`ask`](Checker::ask) can be
/// invoked any number of times.
///
/// ```rust,no_run
/// use ckprompt::checkers::RangeValidator;
/// use ckprompt::utils::Checker;
///
/// let threads = Checker::new(RangeValidator::new(1, 16).unwrap())
///     .with_prompt("Worker threads")
///     .with_default(4)
///     .ask()
///     .unwrap();
/// println!("threads: {threads}");
/// ```
pub struct Checker<V: Validator> {
    validator: V,
    spec: PromptSpec<V::Output>,
}

impl<V> fmt::Debug for Checker<V>
where
    V: Validator + fmt::Debug,
    V::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("validator", &self.validator)
            .field("spec", &self.spec)
            .finish()
    }
}

impl<V: Validator> Checker<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            spec: PromptSpec::default(),
        }
    }

    /// Replaces the whole prompt configuration.
    pub fn with_spec(mut self, spec: PromptSpec<V::Output>) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.spec.prompt = Some(prompt.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.spec.help = Some(help.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.spec.error = Some(error.into());
        self
    }

    /// Value returned for an empty answer. It is not passed through the validator.
    pub fn with_default(mut self, default: V::Output) -> Self {
        self.spec.default = Some(default);
        self
    }

    /// Like [`with_default`](Checker::with_default), but from text.
    ///
    /// The text is validated now, so a bad default is reported here rather
    /// than the first time the user presses enter.
    pub fn with_default_text(self, text: &str) -> Result<Self, ConfigError> {
        let default = self
            .validator
            .validate(text.trim())
            .map_err(|Invalid| ConfigError::Default(text.to_string()))?;
        Ok(self.with_default(default))
    }

    pub fn with_max_attempts(mut self, attempts: NonZeroUsize) -> Self {
        self.spec.max_attempts = Some(attempts);
        self
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn spec(&self) -> &PromptSpec<V::Output> {
        &self.spec
    }

    /// The exact line written before each read: `"{prompt} [{hint}]: "`.
    pub fn prompt_line(&self) -> String {
        let prompt = self
            .spec
            .prompt
            .clone()
            .unwrap_or_else(|| self.validator.prompt());
        format!("{} [{}]: ", prompt, self.validator.hint())
    }

    fn help_text(&self) -> String {
        self.spec
            .help
            .clone()
            .unwrap_or_else(|| self.validator.help())
    }

    fn error_text(&self) -> String {
        self.spec
            .error
            .clone()
            .unwrap_or_else(|| self.validator.error())
    }
}

impl<V> Checker<V>
where
    V: Validator,
    V::Output: Clone,
{
    /// Runs the prompt loop on standard input/output.
    ///
    /// # Errors
    /// See [`ask_with`](Checker::ask_with).
    pub fn ask(&self) -> Result<V::Output, CheckError> {
        self.ask_with(&mut Terminal::stdio())
    }

    /// Runs the prompt loop on the given [`Prompter`].
    ///
    /// # Errors
    /// - [`CheckError::Aborted`] on end of input, an interrupted read or `q`.
    /// - [`CheckError::AttemptsExhausted`] when `max_attempts` answers were rejected.
    /// - [`CheckError::Io`] when the prompter fails.
    pub fn ask_with<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<V::Output, CheckError> {
        let line = self.prompt_line();
        let menu = self.validator.menu();
        let mut rejected = 0usize;

        if let Some(menu) = &menu {
            prompter.show(menu)?;
        }

        loop {
            let answer = match prompter.read_line(&line) {
                Ok(Some(answer)) => answer,
                Ok(None) => return Err(aborted(AbortReason::EndOfInput)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    return Err(aborted(AbortReason::Interrupted));
                }
                Err(e) => return Err(CheckError::Io(e)),
            };
            tracing::trace!(answer = %answer, "read answer");

            let text = match Reply::classify(answer.trim()) {
                Reply::Quit => return Err(aborted(AbortReason::Quit)),
                Reply::Help => {
                    prompter.show(&self.help_text())?;
                    continue;
                }
                Reply::Menu => match &menu {
                    Some(menu) => {
                        prompter.show(menu)?;
                        continue;
                    }
                    None => Some("??"),
                },
                Reply::Empty => match &self.spec.default {
                    Some(default) => {
                        tracing::debug!("empty answer, using default");
                        return Ok(default.clone());
                    }
                    None => None,
                },
                Reply::Text(text) => Some(text),
            };

            if let Some(Ok(value)) = text.map(|text| self.validator.validate(text)) {
                tracing::debug!(rejected, "answer accepted");
                return Ok(value);
            }

            rejected += 1;
            tracing::debug!(rejected, "answer rejected");
            prompter.show(&self.error_text())?;

            if let Some(max) = self.spec.max_attempts {
                if rejected >= max.get() {
                    tracing::debug!(rejected, "attempt limit reached");
                    return Err(CheckError::AttemptsExhausted(rejected));
                }
            }
        }
    }
}

fn aborted(reason: AbortReason) -> CheckError {
    tracing::debug!(%reason, "prompt aborted");
    CheckError::Aborted(reason)
}
