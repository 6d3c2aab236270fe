//! # Validation capability
//!
//! A [`Validator`] turns the raw text typed by the user into a canonical, typed value,
//! or rejects it with [`Invalid`]. It is the only thing a new checker has to provide:
//! the prompting, retrying, default and help handling all live in
//! [`Checker`](crate::utils::Checker).
//!
//! ## Example
//! ```rust
//! use ckprompt::utils::{Invalid, Validator};
//!
//! /// Accepts even numbers only.
//! struct Even;
//!
//! impl Validator for Even {
//!     type Output = u64;
//!
//!     fn validate(&self, text: &str) -> Result<u64, Invalid> {
//!         let n: u64 = text.parse().map_err(|_| Invalid)?;
//!         if n % 2 == 0 { Ok(n) } else { Err(Invalid) }
//!     }
//!
//!     fn error(&self) -> String {
//!         "ERROR - Please enter an even number.".to_string()
//!     }
//! }
//!
//! assert_eq!(Even.validate("42"), Ok(42));
//! assert_eq!(Even.validate("7"), Err(Invalid));
//! ```

/// Prompt shown when neither the validator nor the caller supplies one.
pub const DEFAULT_PROMPT: &str = "Enter an appropriate value";
/// Help shown on `?` when the validator does not override [`Validator::help`].
pub const DEFAULT_HELP: &str = "Please enter a string which contains no embedded,\nleading or trailing spaces or tabs";
/// Error shown after a rejection when the validator does not override [`Validator::error`].
pub const DEFAULT_ERROR: &str = "ERROR: Please enter a string which contains no embedded,\nleading or trailing spaces or tabs.";
/// Hint listing the commands available at every prompt.
pub const DEFAULT_HINT: &str = "?,q";

/// Rejection signal: "this input is not acceptable, ask again".
///
/// Carries no payload on purpose; what to tell the user is the validator's
/// [`error`](Validator::error) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("input rejected")]
pub struct Invalid;

/// The validation contract every checker is built on.
///
/// Only [`validate`](Validator::validate) is required. The text methods have
/// defaults so a minimal validator is a single function.
pub trait Validator {
    /// Canonical value produced for accepted input.
    type Output;

    /// Returns the canonical value for `text`, or [`Invalid`].
    ///
    /// `text` is already trimmed and never empty.
    fn validate(&self, text: &str) -> Result<Self::Output, Invalid>;

    fn prompt(&self) -> String {
        DEFAULT_PROMPT.to_string()
    }

    /// Text printed when the user asks for help with `?`.
    fn help(&self) -> String {
        DEFAULT_HELP.to_string()
    }

    /// Text printed after a rejected answer.
    fn error(&self) -> String {
        DEFAULT_ERROR.to_string()
    }

    /// Commands listed between brackets after the prompt.
    fn hint(&self) -> String {
        DEFAULT_HINT.to_string()
    }

    /// A menu printed before the first prompt and again on `??`.
    fn menu(&self) -> Option<String> {
        None
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    type Output = V::Output;

    fn validate(&self, text: &str) -> Result<Self::Output, Invalid> {
        (**self).validate(text)
    }

    fn prompt(&self) -> String {
        (**self).prompt()
    }

    fn help(&self) -> String {
        (**self).help()
    }

    fn error(&self) -> String {
        (**self).error()
    }

    fn hint(&self) -> String {
        (**self).hint()
    }

    fn menu(&self) -> Option<String> {
        (**self).menu()
    }
}

/// A [`Validator`] backed by a closure, see [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnValidator<F> {
    f: F,
}

/// Builds a validator from a closure, keeping the default texts.
///
/// ```rust
/// use ckprompt::utils::{from_fn, Invalid, Validator};
///
/// let upper = from_fn(|text: &str| {
///     if text.chars().all(|c| c.is_ascii_uppercase()) {
///         Ok(text.to_string())
///     } else {
///         Err(Invalid)
///     }
/// });
///
/// assert_eq!(upper.validate("ABC"), Ok("ABC".to_string()));
/// assert!(upper.validate("abc").is_err());
/// ```
pub fn from_fn<T, F>(f: F) -> FnValidator<F>
where
    F: Fn(&str) -> Result<T, Invalid>,
{
    FnValidator { f }
}

impl<T, F> Validator for FnValidator<F>
where
    F: Fn(&str) -> Result<T, Invalid>,
{
    type Output = T;

    fn validate(&self, text: &str) -> Result<T, Invalid> {
        (self.f)(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lowercase;

    impl Validator for Lowercase {
        type Output = String;

        fn validate(&self, text: &str) -> Result<String, Invalid> {
            if text.chars().all(|c| c.is_lowercase()) {
                Ok(text.to_string())
            } else {
                Err(Invalid)
            }
        }

        fn hint(&self) -> String {
            "lowercase,?,q".to_string()
        }
    }

    #[test]
    fn test_validator_default_texts() {
        assert_eq!(Lowercase.prompt(), DEFAULT_PROMPT);
        assert_eq!(Lowercase.help(), DEFAULT_HELP);
        assert_eq!(Lowercase.error(), DEFAULT_ERROR);
        assert_eq!(Lowercase.hint(), "lowercase,?,q");
        assert!(Lowercase.menu().is_none());
    }

    #[test]
    fn test_validator_by_reference() {
        let v = &Lowercase;
        assert_eq!(v.validate("abc"), Ok("abc".to_string()));
        assert_eq!(v.validate("Abc"), Err(Invalid));
        assert_eq!(v.hint(), "lowercase,?,q");
    }

    #[test]
    fn test_from_fn_validator() {
        let positive = from_fn(|text: &str| match text.parse::<i32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Invalid),
        });

        assert_eq!(positive.validate("5"), Ok(5));
        assert_eq!(positive.validate("0"), Err(Invalid));
        assert_eq!(positive.validate("five"), Err(Invalid));
        assert_eq!(positive.error(), DEFAULT_ERROR);
    }

    #[test]
    fn test_invalid_message() {
        assert_eq!(format!("{}", Invalid), "input rejected");
    }
}
