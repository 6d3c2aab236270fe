//! # Ready-made checkers
//!
//! One [`Validator`] per Solaris `ck*` command, and a `ck*` function for each
//! that prompts on the terminal and returns the canonical value:
//!
//! | Function    | Validator          | Returns       |
//! |-------------|--------------------|---------------|
//! | [`ckdate`]  | [`DateValidator`]  | `NaiveDate`   |
//! | [`ckgid`]   | [`IdValidator`]    | `u32`         |
//! | [`ckint`]   | [`IntValidator`]   | `i64`         |
//! | [`ckitem`]  | [`ItemValidator`]  | `String`      |
//! | [`ckkeywd`] | [`KeywordValidator`] | `String`    |
//! | [`ckpath`]  | [`PathValidator`]  | `PathBuf`     |
//! | [`ckrange`] | [`RangeValidator`] | `i64`         |
//! | [`ckstr`]   | [`StringValidator`] | `String`     |
//! | [`cktime`]  | [`TimeValidator`]  | `NaiveTime`   |
//! | [`ckuid`]   | [`IdValidator`]    | `u32`         |
//! | [`ckyorn`]  | [`YornValidator`]  | `bool`        |
//!
//! The functions cover the common case. For defaults, custom help text, an
//! attempt limit or a scripted terminal, build a
//! [`Checker`](crate::utils::Checker) around the validator instead.
//!
//! ```rust,no_run
//! use ckprompt::checkers::{ckint, ckyorn};
//!
//! let a = ckint("Enter a value").unwrap();
//! let b = ckint("Enter another value").unwrap();
//! if ckyorn("Multiply them?").unwrap() {
//!     println!("{} * {} = {}", a, b, a * b);
//! }
//! ```
use crate::error::CheckError;
use crate::utils::{Checker, Validator};
use chrono::{NaiveDate, NaiveTime};
use std::path::PathBuf;

pub mod datetime;
pub use datetime::{DateValidator, TimeValidator};

pub mod ident;
pub use ident::{IdDatabase, IdEntry, IdKind, IdValidator};

pub mod item;
pub use item::ItemValidator;

pub mod keyword;
pub use keyword::KeywordValidator;

pub mod number;
pub use number::{IntValidator, RangeValidator};

pub mod path;
pub use path::{PathRule, PathValidator};

pub mod string;
pub use string::StringValidator;

pub mod yorn;
pub use yorn::YornValidator;

fn run<V>(validator: V, prompt: &str) -> Result<V::Output, CheckError>
where
    V: Validator,
    V::Output: Clone,
{
    Checker::new(validator).with_prompt(prompt).ask()
}

/// Prompts for a date in `format` (default `%m/%d/%y`).
///
/// # Errors
/// [`CheckError::Config`] for a malformed format, otherwise see [`Checker::ask_with`].
pub fn ckdate(prompt: &str, format: Option<&str>) -> Result<NaiveDate, CheckError> {
    let validator = match format {
        Some(format) => DateValidator::with_format(format)?,
        None => DateValidator::new(),
    };
    run(validator, prompt)
}

/// Prompts for the name or id of a group in `/etc/group`.
///
/// # Errors
/// [`CheckError::Config`] when the group file cannot be read, otherwise see [`Checker::ask_with`].
pub fn ckgid(prompt: &str) -> Result<u32, CheckError> {
    run(IdValidator::system_groups()?, prompt)
}

/// Prompts for an integer.
///
/// # Errors
/// See [`Checker::ask_with`].
pub fn ckint(prompt: &str) -> Result<i64, CheckError> {
    run(IntValidator::new(), prompt)
}

/// Shows a menu of `choices` and prompts for one of them.
///
/// # Errors
/// [`CheckError::Config`] for an empty or duplicated list, otherwise see [`Checker::ask_with`].
pub fn ckitem(prompt: &str, label: Option<&str>, choices: &[&str]) -> Result<String, CheckError> {
    let mut validator = ItemValidator::new(choices.iter().copied())?;
    if let Some(label) = label {
        validator = validator.with_label(label);
    }
    run(validator, prompt)
}

/// Prompts for one of `keywords`.
///
/// # Errors
/// [`CheckError::Config`] for an empty or duplicated list, otherwise see [`Checker::ask_with`].
pub fn ckkeywd(prompt: &str, keywords: &[&str]) -> Result<String, CheckError> {
    run(KeywordValidator::new(keywords.iter().copied())?, prompt)
}

/// Prompts for an absolute pathname.
///
/// # Errors
/// See [`Checker::ask_with`].
pub fn ckpath(prompt: &str) -> Result<PathBuf, CheckError> {
    run(PathValidator::new(), prompt)
}

/// Prompts for an integer between `lower` and `upper` inclusive.
///
/// # Errors
/// [`CheckError::Config`] when `lower > upper`, otherwise see [`Checker::ask_with`].
pub fn ckrange(prompt: &str, lower: i64, upper: i64) -> Result<i64, CheckError> {
    run(RangeValidator::new(lower, upper)?, prompt)
}

/// Prompts for a non-empty string, optionally matching `pattern`.
///
/// # Errors
/// [`CheckError::Config`] for a pattern that does not compile, otherwise see [`Checker::ask_with`].
pub fn ckstr(prompt: &str, pattern: Option<&str>) -> Result<String, CheckError> {
    let validator = match pattern {
        Some(pattern) => StringValidator::new().with_pattern(pattern)?,
        None => StringValidator::new(),
    };
    run(validator, prompt)
}

/// Prompts for a time of day in `format` (default `%H:%M:%S`).
///
/// # Errors
/// [`CheckError::Config`] for a malformed format, otherwise see [`Checker::ask_with`].
pub fn cktime(prompt: &str, format: Option<&str>) -> Result<NaiveTime, CheckError> {
    let validator = match format {
        Some(format) => TimeValidator::with_format(format)?,
        None => TimeValidator::new(),
    };
    run(validator, prompt)
}

/// Prompts for the name or id of a user in `/etc/passwd`.
///
/// # Errors
/// [`CheckError::Config`] when the passwd file cannot be read, otherwise see [`Checker::ask_with`].
pub fn ckuid(prompt: &str) -> Result<u32, CheckError> {
    run(IdValidator::system_users()?, prompt)
}

/// Prompts for yes or no.
///
/// # Errors
/// See [`Checker::ask_with`].
pub fn ckyorn(prompt: &str) -> Result<bool, CheckError> {
    run(YornValidator, prompt)
}
