//! `ckyorn`: yes or no.
use crate::utils::{Invalid, Validator};

/// Accepts `y`, `yes`, `n`, `no` in any letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YornValidator;

impl Validator for YornValidator {
    type Output = bool;

    fn validate(&self, text: &str) -> Result<bool, Invalid> {
        match text.to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(Invalid),
        }
    }

    fn prompt(&self) -> String {
        "Yes or No".to_string()
    }

    fn help(&self) -> String {
        "\nTo respond in the affirmative, enter y, yes, Y, or YES.\nTo respond in the negative, enter n, no, N, or NO.\n".to_string()
    }

    fn error(&self) -> String {
        "ERROR - Please enter yes or no.".to_string()
    }

    fn hint(&self) -> String {
        "y,n,?,q".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Checker, Terminal};
    use std::io::Cursor;

    #[test]
    fn test_yorn_tokens() {
        for yes in ["y", "Y", "yes", "YES", "Yes"] {
            assert_eq!(YornValidator.validate(yes), Ok(true));
        }
        for no in ["n", "N", "no", "NO", "nO"] {
            assert_eq!(YornValidator.validate(no), Ok(false));
        }
        for bad in ["yep", "nope", "true", "0", "ye"] {
            assert_eq!(YornValidator.validate(bad), Err(Invalid));
        }
    }

    #[test]
    fn test_ckyorn_scripted() {
        let mut term = Terminal::new(Cursor::new("bad\nn\n"), Vec::new());
        let answer = Checker::new(YornValidator)
            .with_prompt("prompt")
            .ask_with(&mut term)
            .unwrap();

        assert!(!answer);
        assert_eq!(
            term.output_text(),
            "prompt [y,n,?,q]: ERROR - Please enter yes or no.\nprompt [y,n,?,q]: "
        );
    }
}
