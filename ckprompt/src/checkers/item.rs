//! `ckitem`: pick an entry from a numbered menu.
//!
//! The menu is printed before the first prompt and again whenever the user
//! types `??`. An entry can be chosen by its number, by its full key, or by a
//! case-insensitive prefix that matches exactly one key. A number within the
//! menu always selects by position; other numbers are tried as keys. Invisible
//! entries are never listed or numbered but can still be typed.
use crate::error::ConfigError;
use crate::utils::{Invalid, Validator};

const HELP: &str = "
Enter the number of the menu item you wish to select, the token
which is associated with the menu item, or a partial string which
uniquely identifies the token for the menu item. Enter ?? to
reprint the menu.
";

const ERROR: &str = "
ERROR: Entry does not match available menu selection. Enter the number
of the menu item you wish to select, the token which is associated
with the menu item, or a partial string which uniquely identifies the
token for the menu item. Enter ?? to reprint the menu.
";

/// Menu of choices; the canonical value is the chosen key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemValidator {
    label: Option<String>,
    choices: Vec<String>,
    invisible: Vec<String>,
}

impl ItemValidator {
    /// # Errors
    /// - [`ConfigError::NoChoices`] for an empty list.
    /// - [`ConfigError::Duplicate`] when a key appears twice.
    pub fn new<I, S>(choices: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validator = Self {
            label: None,
            choices: Vec::new(),
            invisible: Vec::new(),
        };
        for choice in choices {
            let choice = validator.unique(choice.into())?;
            validator.choices.push(choice);
        }

        if validator.choices.is_empty() {
            return Err(ConfigError::NoChoices);
        }
        Ok(validator)
    }

    /// Line printed above the numbered entries.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds entries that are accepted but not shown.
    ///
    /// # Errors
    /// [`ConfigError::Duplicate`] when a key is already present.
    pub fn with_invisible<I, S>(mut self, invisible: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in invisible {
            let item = self.unique(item.into())?;
            self.invisible.push(item);
        }
        Ok(self)
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    fn unique(&self, key: String) -> Result<String, ConfigError> {
        if self.all().any(|k| *k == key) {
            return Err(ConfigError::Duplicate(key));
        }
        Ok(key)
    }

    fn all(&self) -> impl Iterator<Item = &String> {
        self.choices.iter().chain(self.invisible.iter())
    }
}

impl Validator for ItemValidator {
    type Output = String;

    fn validate(&self, text: &str) -> Result<String, Invalid> {
        let numbered = text
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| self.choices.get(index));
        if let Some(choice) = numbered {
            return Ok(choice.clone());
        }

        if let Some(exact) = self.all().find(|k| k.as_str() == text) {
            return Ok(exact.clone());
        }

        let needle = text.to_lowercase();
        let mut matches = self
            .all()
            .filter(|k| k.to_lowercase().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(only.clone()),
            _ => Err(Invalid),
        }
    }

    fn prompt(&self) -> String {
        "Enter selection".to_string()
    }

    fn help(&self) -> String {
        HELP.to_string()
    }

    fn error(&self) -> String {
        ERROR.to_string()
    }

    fn hint(&self) -> String {
        "?,??,q".to_string()
    }

    fn menu(&self) -> Option<String> {
        let entries = self
            .choices
            .iter()
            .enumerate()
            .map(|(n, choice)| format!("{}: {}", n + 1, choice));
        let lines: Vec<String> = self.label.clone().into_iter().chain(entries).collect();
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Checker, Terminal};
    use std::io::Cursor;

    fn menu() -> ItemValidator {
        ItemValidator::new(["this", "that", "other"])
            .unwrap()
            .with_label("items")
    }

    #[test]
    fn test_item_by_number() {
        let v = menu();
        assert_eq!(v.validate("1"), Ok("this".to_string()));
        assert_eq!(v.validate("3"), Ok("other".to_string()));
        assert_eq!(v.validate("0"), Err(Invalid));
        assert_eq!(v.validate("4"), Err(Invalid));
    }

    #[test]
    fn test_item_by_key_or_unique_prefix() {
        let v = menu();
        assert_eq!(v.validate("that"), Ok("that".to_string()));
        assert_eq!(v.validate("o"), Ok("other".to_string()));
        assert_eq!(v.validate("THI"), Ok("this".to_string()));
        assert_eq!(v.validate("th"), Err(Invalid)); // ambiguous
        assert_eq!(v.validate("zzz"), Err(Invalid));
    }

    #[test]
    fn test_exact_key_wins_over_prefix() {
        let v = ItemValidator::new(["go", "gone"]).unwrap();
        assert_eq!(v.validate("go"), Ok("go".to_string()));
        assert_eq!(v.validate("gon"), Ok("gone".to_string()));
    }

    #[test]
    fn test_numeric_key_outside_menu_range() {
        let v = ItemValidator::new(["2023", "2024", "latest"]).unwrap();
        assert_eq!(v.validate("2"), Ok("2024".to_string()));
        assert_eq!(v.validate("2024"), Ok("2024".to_string()));
        assert_eq!(v.validate("2023"), Ok("2023".to_string()));
        assert_eq!(v.validate("202"), Err(Invalid)); // ambiguous prefix
    }

    #[test]
    fn test_invisible_items() {
        let v = menu().with_invisible(["secret"]).unwrap();
        assert_eq!(v.validate("secret"), Ok("secret".to_string()));
        assert_eq!(v.validate("sec"), Ok("secret".to_string()));
        assert_eq!(v.validate("4"), Err(Invalid));
        assert_eq!(v.menu().unwrap(), "items\n1: this\n2: that\n3: other");
    }

    #[test]
    fn test_item_configuration_errors() {
        assert!(matches!(
            ItemValidator::new(Vec::<&str>::new()),
            Err(ConfigError::NoChoices)
        ));
        assert!(matches!(
            ItemValidator::new(["a", "a"]),
            Err(ConfigError::Duplicate(_))
        ));
        assert!(matches!(
            menu().with_invisible(["this"]),
            Err(ConfigError::Duplicate(_))
        ));
    }

    #[test]
    fn test_ckitem_scripted() {
        let mut term = Terminal::new(Cursor::new("1\n"), Vec::new());
        let checker = Checker::new(ItemValidator::new(["this", "that"]).unwrap().with_label("items"))
            .with_prompt("menu");
        let value = checker.ask_with(&mut term).unwrap();

        assert_eq!(value, "this");
        assert_eq!(term.output_text(), "items\n1: this\n2: that\nmenu [?,??,q]: ");
    }

    #[test]
    fn test_ckitem_reprints_menu() {
        let mut term = Terminal::new(Cursor::new("??\nthat\n"), Vec::new());
        let value = Checker::new(ItemValidator::new(["this", "that"]).unwrap())
            .with_prompt("menu")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, "that");
        assert_eq!(
            term.output_text(),
            "1: this\n2: that\nmenu [?,??,q]: 1: this\n2: that\nmenu [?,??,q]: "
        );
    }
}
