//! # Terminal I/O
//!
//! The [`Prompter`] trait is the seam between the prompt loop and the user:
//! write a prompt, read one line back, print help or error text.
//!
//! [`Terminal`] implements it over any `BufRead` + `Write` pair. Use
//! [`Terminal::stdio`] for the real console, [`Terminal::stderr`] when stdout
//! must carry only the answer, or feed it a `Cursor` to script a session:
//!
//! ```rust
//! use std::io::Cursor;
//! use ckprompt::utils::{Prompter, Terminal};
//!
//! let mut term = Terminal::new(Cursor::new("hello\n"), Vec::new());
//! let line = term.read_line("Say something [?,q]: ").unwrap();
//!
//! assert_eq!(line.as_deref(), Some("hello"));
//! assert_eq!(term.output_text(), "Say something [?,q]: ");
//! ```
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// Reads answers and shows messages for a [`Checker`](crate::utils::Checker).
pub trait Prompter {
    /// Shows `prompt` and reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is stripped.
    /// Bytes that are not UTF-8 come back as U+FFFD, so they reach the
    /// validator as an ordinary (rejected) answer.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Prints a full message (help, error, menu) followed by a newline.
    fn show(&mut self, text: &str) -> io::Result<()>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        (**self).show(text)
    }
}

/// A line-oriented terminal over an input reader and an output writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal bound to the process' standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl Terminal<StdinLock<'static>, Stderr> {
    /// Terminal reading standard input and writing prompts to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the terminal, handing back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R> Terminal<R, Vec<u8>> {
    /// Everything written so far, for in-memory terminals.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl<R: BufRead, W: Write> Prompter for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let answer = String::from_utf8_lossy(&raw);
        Ok(Some(answer.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }
}
