pub mod checker;
pub use checker::{Checker, PromptSpec};

pub mod terminal;
pub use terminal::{Prompter, Terminal};

pub mod validate;
pub use validate::{FnValidator, Invalid, Validator, from_fn};
