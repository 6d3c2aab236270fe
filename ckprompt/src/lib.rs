//! # ckprompt
//!
//! Interactive prompt-and-validate routines for CLI applications, modelled on
//! the SunOS/Solaris `ck*` commands (`ckint`, `ckyorn`, `ckpath`, ...).
//!
//! Every routine works the same way: print a prompt, read a line, validate it.
//! A rejected answer prints an error and the same prompt again, until the user
//! gives a valid answer or leaves.
//!
//! ## Features
//!
//! - **Typed answers** - integers, booleans, dates, times, paths, ids, keywords
//!   and menu items come back as Rust values, not strings.
//! - **One loop for every type** - [`utils::Checker`] handles prompting, retries,
//!   defaults, `?` help and `q` quit; a checker only has to validate.
//! - **Extensible** - implement [`utils::Validator`] (one method) for new types.
//! - **Scriptable** - [`utils::Terminal`] works over any reader/writer pair, so
//!   sessions can be tested with a `Cursor`.
//!
//! ("serde" feature)
//! - `Serialize`/`Deserialize` for [`utils::PromptSpec`] and the date/time answers.
//!
//! ## At the prompt
//!
//! ```text
//! Enter an integer [?,q]: abc
//! ERROR - Please enter an integer.
//! Enter an integer [?,q]: ?
//! Please enter an integer.
//! Enter an integer [?,q]: 12
//! ```
//!
//! - `?` shows the help text
//! - `??` reprints the menu (menu checkers only)
//! - `q` or `quit` aborts with [`CheckError::Aborted`]
//! - an empty line returns the default when one is configured
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ckprompt::checkers::{ckrange, ckyorn};
//!
//! let threads = ckrange("Scan threads", 1, 16).unwrap();
//! let verbose = ckyorn("Verbose output?").unwrap();
//! println!("{threads} {verbose}");
//! ```
//!
//! ### Defaults, custom text and attempt limits
//!
//! ```rust,no_run
//! use std::num::NonZeroUsize;
//! use ckprompt::checkers::KeywordValidator;
//! use ckprompt::utils::Checker;
//!
//! let action = Checker::new(KeywordValidator::new(["start", "stop"]).unwrap())
//!     .with_prompt("Service action")
//!     .with_default("start".to_string())
//!     .with_max_attempts(NonZeroUsize::new(3).unwrap())
//!     .ask();
//! ```
//!
//! ### A new checker
//!
//! ```rust
//! use std::io::Cursor;
//! use std::net::Ipv4Addr;
//! use ckprompt::utils::{Checker, Invalid, Terminal, Validator};
//!
//! struct Ipv4;
//!
//! impl Validator for Ipv4 {
//!     type Output = Ipv4Addr;
//!
//!     fn validate(&self, text: &str) -> Result<Ipv4Addr, Invalid> {
//!         text.parse().map_err(|_| Invalid)
//!     }
//!
//!     fn error(&self) -> String {
//!         "ERROR - Please enter an IPv4 address.".to_string()
//!     }
//! }
//!
//! let mut term = Terminal::new(Cursor::new("localhost\n127.0.0.1\n"), Vec::new());
//! let ip = Checker::new(Ipv4).with_prompt("Target").ask_with(&mut term).unwrap();
//! assert_eq!(ip, Ipv4Addr::LOCALHOST);
//! ```
//!
//! ## Error Handling
//!
//! Rejected answers never leave the loop. What reaches the caller is a
//! [`CheckError`]: the user aborted, the attempt limit was hit, or the terminal
//! failed. Checkers with parameters report bad ones as [`ConfigError`] from
//! their constructors.
//!
//! ```rust,no_run
//! use ckprompt::checkers::ckint;
//! use ckprompt::{AbortReason, CheckError};
//!
//! match ckint("Port") {
//!     Ok(port) => println!("port {port}"),
//!     Err(CheckError::Aborted(AbortReason::Quit)) => eprintln!("bye"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod checkers;

pub mod error;
pub use error::{AbortReason, CheckError, ConfigError};

pub mod utils;
