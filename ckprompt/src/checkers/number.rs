//! Integer checkers: `ckint` and `ckrange`.
use crate::error::ConfigError;
use crate::utils::{Invalid, Validator};
use std::ops::RangeInclusive;

/// Lower bound used by `ckrange` when none is given.
pub const RANGE_LOWER: i64 = -(1 << 31);
/// Upper bound used by `ckrange` when none is given.
pub const RANGE_UPPER: i64 = (1 << 31) - 1;

fn checked_bounds(bounds: RangeInclusive<i64>) -> Result<RangeInclusive<i64>, ConfigError> {
    if bounds.is_empty() {
        return Err(ConfigError::EmptyRange {
            lower: *bounds.start(),
            upper: *bounds.end(),
        });
    }
    Ok(bounds)
}

fn parse_within(text: &str, bounds: Option<&RangeInclusive<i64>>) -> Result<i64, Invalid> {
    let value: i64 = text.parse().map_err(|_| Invalid)?;
    match bounds {
        Some(bounds) if !bounds.contains(&value) => Err(Invalid),
        _ => Ok(value),
    }
}

fn help_for(bounds: Option<&RangeInclusive<i64>>) -> String {
    match bounds {
        Some(b) => format!("Please enter an integer between {} and {}.", b.start(), b.end()),
        None => "Please enter an integer.".to_string(),
    }
}

/// Base-10 integer, optionally limited to an inclusive range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntValidator {
    bounds: Option<RangeInclusive<i64>>,
}

impl IntValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts accepted values to `bounds`.
    ///
    /// # Errors
    /// [`ConfigError::EmptyRange`] when the range holds no value.
    pub fn within(bounds: RangeInclusive<i64>) -> Result<Self, ConfigError> {
        Ok(Self {
            bounds: Some(checked_bounds(bounds)?),
        })
    }

    pub fn bounds(&self) -> Option<&RangeInclusive<i64>> {
        self.bounds.as_ref()
    }
}

impl Validator for IntValidator {
    type Output = i64;

    fn validate(&self, text: &str) -> Result<i64, Invalid> {
        parse_within(text, self.bounds.as_ref())
    }

    fn prompt(&self) -> String {
        "Enter an integer".to_string()
    }

    fn help(&self) -> String {
        help_for(self.bounds.as_ref())
    }

    fn error(&self) -> String {
        format!("ERROR - {}", self.help())
    }
}

/// Integer between explicit `lower` and `upper` bounds, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValidator {
    bounds: RangeInclusive<i64>,
}

impl RangeValidator {
    /// # Errors
    /// [`ConfigError::EmptyRange`] when `lower > upper`.
    pub fn new(lower: i64, upper: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            bounds: checked_bounds(lower..=upper)?,
        })
    }

    pub fn lower(&self) -> i64 {
        *self.bounds.start()
    }

    pub fn upper(&self) -> i64 {
        *self.bounds.end()
    }
}

impl Default for RangeValidator {
    fn default() -> Self {
        Self {
            bounds: RANGE_LOWER..=RANGE_UPPER,
        }
    }
}

impl Validator for RangeValidator {
    type Output = i64;

    fn validate(&self, text: &str) -> Result<i64, Invalid> {
        parse_within(text, Some(&self.bounds))
    }

    fn prompt(&self) -> String {
        "Enter an integer".to_string()
    }

    fn help(&self) -> String {
        help_for(Some(&self.bounds))
    }

    fn error(&self) -> String {
        format!("ERROR - {}", self.help())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Checker, Terminal};
    use std::io::Cursor;

    #[test]
    fn test_int_validate() {
        let v = IntValidator::new();
        assert_eq!(v.validate("42"), Ok(42));
        assert_eq!(v.validate("-17"), Ok(-17));
        assert_eq!(v.validate("+3"), Ok(3));
        assert_eq!(v.validate("abc"), Err(Invalid));
        assert_eq!(v.validate("4.2"), Err(Invalid));
        assert_eq!(v.validate("0x10"), Err(Invalid));
        assert_eq!(v.validate("99999999999999999999"), Err(Invalid)); // overflow
    }

    #[test]
    fn test_int_within_bounds() {
        let v = IntValidator::within(0..=100).unwrap();
        assert_eq!(v.validate("100"), Ok(100));
        assert_eq!(v.validate("101"), Err(Invalid));
        assert_eq!(v.help(), "Please enter an integer between 0 and 100.");

        assert!(matches!(
            IntValidator::within(5..=1),
            Err(ConfigError::EmptyRange { lower: 5, upper: 1 })
        ));
    }

    #[test]
    fn test_ckint_scripted() {
        let mut term = Terminal::new(Cursor::new("abc\n12\n"), Vec::new());
        let value = Checker::new(IntValidator::new())
            .with_prompt("int")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, 12);
        assert_eq!(
            term.output_text(),
            "int [?,q]: ERROR - Please enter an integer.\nint [?,q]: "
        );
    }

    #[test]
    fn test_ckint_rejects_undecodable_line() {
        let mut term = Terminal::new(Cursor::new(b"\xff\xfe\n12\n".to_vec()), Vec::new());
        let value = Checker::new(IntValidator::new())
            .with_prompt("int")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, 12);
        assert_eq!(
            term.output_text(),
            "int [?,q]: ERROR - Please enter an integer.\nint [?,q]: "
        );
    }

    #[test]
    fn test_range_matches_bounded_int() {
        let range = RangeValidator::new(-3, 3).unwrap();
        let int = IntValidator::within(-3..=3).unwrap();
        for text in ["-4", "-3", "0", "3", "4", "x"] {
            assert_eq!(range.validate(text), int.validate(text), "{text}");
        }
        assert_eq!(range.help(), int.help());
        assert_eq!(range.error(), int.error());
    }

    #[test]
    fn test_range_validate() {
        let v = RangeValidator::new(1, 10).unwrap();
        assert_eq!(v.validate("1"), Ok(1));
        assert_eq!(v.validate("10"), Ok(10));
        assert_eq!(v.validate("0"), Err(Invalid));
        assert_eq!(v.validate("42"), Err(Invalid));
        assert_eq!(v.validate("ten"), Err(Invalid));
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(matches!(
            RangeValidator::new(5, 1),
            Err(ConfigError::EmptyRange { lower: 5, upper: 1 })
        ));
        assert!(RangeValidator::new(3, 3).is_ok());
    }

    #[test]
    fn test_range_default_bounds() {
        let v = RangeValidator::default();
        assert_eq!(v.lower(), -2_147_483_648);
        assert_eq!(v.upper(), 2_147_483_647);
        assert_eq!(v.validate("2147483648"), Err(Invalid));
    }

    #[test]
    fn test_ckrange_scripted() {
        let mut term = Terminal::new(Cursor::new("9\n3\n"), Vec::new());
        let value = Checker::new(RangeValidator::new(1, 5).unwrap())
            .with_prompt("int")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, 3);
        assert_eq!(
            term.output_text(),
            "int [?,q]: ERROR - Please enter an integer between 1 and 5.\nint [?,q]: "
        );
    }
}
