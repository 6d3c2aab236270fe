use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::process::ExitCode;

use anyhow::Context;
use ckprompt::checkers::number::{RANGE_LOWER, RANGE_UPPER};
use ckprompt::checkers::*;
use ckprompt::utils::{Checker, Prompter, Terminal, Validator};
use ckprompt::{AbortReason, CheckError};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Prompt for a value, validate it and print it.
///
/// Prompts, help and errors go to stderr; stdout carries only the answer.
///
/// Exit status: 0 answered, 1 end of input or terminal failure,
/// 3 user quit, 4 bad checker configuration.
#[derive(Debug, Parser)]
#[command(name = "ckprompt", version)]
struct Cli {
    #[command(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct Common {
    /// Prompt text shown before the hint
    #[arg(short, long, global = true)]
    prompt: Option<String>,

    /// Text printed when the user types `?`
    #[arg(long, global = true)]
    help_text: Option<String>,

    /// Text printed after an invalid answer
    #[arg(short, long, global = true)]
    error: Option<String>,

    /// Answer used when the user just presses enter
    #[arg(short, long, global = true)]
    default: Option<String>,

    /// Give up after this many invalid answers
    #[arg(long, global = true)]
    max_attempts: Option<NonZeroUsize>,

    /// Print the answer as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// A date
    Date {
        #[arg(short, long)]
        format: Option<String>,
    },
    /// A group name or id from /etc/group
    Gid {
        /// Accept any non-negative id without looking it up
        #[arg(long)]
        numeric: bool,
    },
    /// An integer
    Int,
    /// One entry of a menu
    Item {
        #[arg(short, long)]
        label: Option<String>,
        /// Accepted entries that are not listed
        #[arg(long)]
        invisible: Vec<String>,
        #[arg(required = true)]
        choices: Vec<String>,
    },
    /// One of a set of keywords
    Keywd {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// A pathname
    Path {
        #[arg(long)]
        relative: bool,
        #[arg(long)]
        exists: bool,
        #[arg(long, conflicts_with = "exists")]
        not_exists: bool,
        #[arg(long)]
        dir: bool,
        #[arg(long, conflicts_with = "dir")]
        file: bool,
        #[arg(long)]
        non_empty: bool,
        #[arg(long)]
        readable: bool,
    },
    /// An integer within bounds
    Range {
        #[arg(short, long, default_value_t = RANGE_LOWER, allow_negative_numbers = true)]
        lower: i64,
        #[arg(short, long, default_value_t = RANGE_UPPER, allow_negative_numbers = true)]
        upper: i64,
    },
    /// A string
    Str {
        /// Regular expression the answer must start with a match of
        #[arg(short = 'r', long)]
        pattern: Option<String>,
        #[arg(long, default_value_t = 1)]
        min_len: usize,
    },
    /// A time of day
    Time {
        #[arg(short, long)]
        format: Option<String>,
    },
    /// A user name or id from /etc/passwd
    Uid {
        /// Accept any non-negative id without looking it up
        #[arg(long)]
        numeric: bool,
    },
    /// Yes or no
    Yorn,
    /// Multiply two integers
    Demo,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CKPROMPT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut term = Terminal::stderr();
    match run(cli, &mut term, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = exit_code(&e);
            tracing::debug!(code, "exiting with failure");
            if !matches!(e.downcast_ref::<CheckError>(), Some(CheckError::Aborted(_))) {
                eprintln!("ckprompt: {:#}", e);
            }
            ExitCode::from(code)
        }
    }
}

/// Maps a failure to the Solaris `ck*` exit status.
fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<CheckError>() {
        Some(CheckError::Aborted(AbortReason::Quit)) => 3,
        Some(CheckError::Config(_)) => 4,
        _ => 1,
    }
}

fn run<P: Prompter, O: Write>(cli: Cli, term: &mut P, out: &mut O) -> anyhow::Result<()> {
    let common = &cli.common;

    match cli.command {
        Command::Date { format } => {
            let validator = match format {
                Some(f) => DateValidator::with_format(&f).map_err(CheckError::from)?,
                None => DateValidator::new(),
            };
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Gid { numeric } => {
            let validator = if numeric {
                IdValidator::group()
            } else {
                IdValidator::system_groups().map_err(CheckError::from)?
            };
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Int => emit(out, &ask(IntValidator::new(), common, term)?, common.json),
        Command::Item {
            label,
            invisible,
            choices,
        } => {
            let mut validator = ItemValidator::new(choices)
                .and_then(|v| v.with_invisible(invisible))
                .map_err(CheckError::from)?;
            if let Some(label) = label {
                validator = validator.with_label(label);
            }
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Keywd { keywords } => {
            let validator = KeywordValidator::new(keywords).map_err(CheckError::from)?;
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Path {
            relative,
            exists,
            not_exists,
            dir,
            file,
            non_empty,
            readable,
        } => {
            let mut validator = PathValidator::new();
            if relative {
                validator = validator.allow_relative();
            }
            let rules = [
                (exists, PathRule::Exists),
                (not_exists, PathRule::NotExists),
                (dir, PathRule::Directory),
                (file, PathRule::File),
                (non_empty, PathRule::NonEmpty),
                (readable, PathRule::Readable),
            ];
            for (_, rule) in rules.into_iter().filter(|(on, _)| *on) {
                validator = validator.with_rule(rule);
            }
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Range { lower, upper } => {
            let validator = RangeValidator::new(lower, upper).map_err(CheckError::from)?;
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Str { pattern, min_len } => {
            let mut validator = StringValidator::new().with_min_len(min_len);
            if let Some(pattern) = pattern {
                validator = validator.with_pattern(&pattern).map_err(CheckError::from)?;
            }
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Time { format } => {
            let validator = match format {
                Some(f) => TimeValidator::with_format(&f).map_err(CheckError::from)?,
                None => TimeValidator::new(),
            };
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Uid { numeric } => {
            let validator = if numeric {
                IdValidator::user()
            } else {
                IdValidator::system_users().map_err(CheckError::from)?
            };
            emit(out, &ask(validator, common, term)?, common.json)
        }
        Command::Yorn => emit(out, &ask(YornValidator, common, term)?, common.json),
        Command::Demo => demo(term, out),
    }
}

/// Builds a [`Checker`] from the shared flags and runs it on `term`.
fn ask<V, P>(validator: V, common: &Common, term: &mut P) -> Result<V::Output, CheckError>
where
    V: Validator,
    P: Prompter,
    V::Output: Clone,
{
    let mut checker = Checker::new(validator);
    if let Some(prompt) = &common.prompt {
        checker = checker.with_prompt(prompt.as_str());
    }
    if let Some(help) = &common.help_text {
        checker = checker.with_help(help.as_str());
    }
    if let Some(error) = &common.error {
        checker = checker.with_error(error.as_str());
    }
    if let Some(default) = &common.default {
        checker = checker.with_default_text(default)?;
    }
    if let Some(attempts) = common.max_attempts {
        checker = checker.with_max_attempts(attempts);
    }
    checker.ask_with(term)
}

/// Prints the answer: strings bare, everything else in its JSON form.
fn emit<T: Serialize>(out: &mut impl Write, value: &T, json: bool) -> anyhow::Result<()> {
    let value = serde_json::to_value(value).context("cannot serialize answer")?;
    match value {
        serde_json::Value::String(text) if !json => writeln!(out, "{}", text)?,
        other => writeln!(out, "{}", other)?,
    }
    Ok(())
}

fn demo<P: Prompter>(term: &mut P, out: &mut impl Write) -> anyhow::Result<()> {
    let v1 = Checker::new(IntValidator::new())
        .with_prompt("Enter a value")
        .ask_with(&mut *term)?;
    let v2 = Checker::new(IntValidator::new())
        .with_prompt("Enter another value")
        .ask_with(&mut *term)?;
    let product = v1
        .checked_mul(v2)
        .with_context(|| format!("{} * {} does not fit in 64 bits", v1, v2))?;
    writeln!(out, "{} * {} = {}", v1, v2, product)?;
    Ok(())
}
