//! `ckdate` and `cktime`: calendar dates and times of day.
//!
//! Both take a `strftime`-style format understood by [`chrono`]. A format that
//! `chrono` cannot interpret, or one that cannot describe a whole date (or
//! time), is rejected when the validator is built.
use crate::error::ConfigError;
use crate::utils::{Invalid, Validator};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};
use std::fmt::{self, Write};

/// Format used by `ckdate` when none is given.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%y";
/// Format used by `cktime` when none is given.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Accepts `format` only if a sample value rendered with it parses back.
fn check_format(format: &str, round_trips: fn(&str) -> bool) -> Result<String, ConfigError> {
    if format.is_empty()
        || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        || !round_trips(format)
    {
        return Err(ConfigError::Format(format.to_string()));
    }
    Ok(format.to_string())
}

// chrono reports fields the value does not have as fmt::Error.
fn render(formatted: impl fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok().map(|()| out)
}

fn date_round_trips(format: &str) -> bool {
    NaiveDate::from_ymd_opt(2001, 2, 3)
        .and_then(|sample| render(sample.format(format)))
        .is_some_and(|text| NaiveDate::parse_from_str(&text, format).is_ok())
}

fn time_round_trips(format: &str) -> bool {
    NaiveTime::from_hms_opt(13, 14, 15)
        .and_then(|sample| render(sample.format(format)))
        .is_some_and(|text| NaiveTime::parse_from_str(&text, format).is_ok())
}

/// A date in a fixed format, returned as a [`NaiveDate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValidator {
    format: String,
}

impl Default for DateValidator {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DateValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`ConfigError::Format`] for an empty or malformed format, or one that
    /// cannot yield a full date (`%H:%M`, `%Y`).
    pub fn with_format(format: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            format: check_format(format, date_round_trips)?,
        })
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Validator for DateValidator {
    type Output = NaiveDate;

    fn validate(&self, text: &str) -> Result<NaiveDate, Invalid> {
        NaiveDate::parse_from_str(text, &self.format).map_err(|e| {
            tracing::trace!(error = %e, format = %self.format, "date parse failed");
            Invalid
        })
    }

    fn prompt(&self) -> String {
        "Enter the date".to_string()
    }

    fn help(&self) -> String {
        format!("Please enter a date. Format is {}.", self.format)
    }

    fn error(&self) -> String {
        format!("ERROR - Please enter a date.  Format is {}.", self.format)
    }
}

/// A time of day in a fixed format, returned as a [`NaiveTime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValidator {
    format: String,
}

impl Default for TimeValidator {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl TimeValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// [`ConfigError::Format`] for an empty or malformed format, or one
    /// without an hour and minute.
    pub fn with_format(format: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            format: check_format(format, time_round_trips)?,
        })
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Validator for TimeValidator {
    type Output = NaiveTime;

    fn validate(&self, text: &str) -> Result<NaiveTime, Invalid> {
        NaiveTime::parse_from_str(text, &self.format).map_err(|e| {
            tracing::trace!(error = %e, format = %self.format, "time parse failed");
            Invalid
        })
    }

    fn prompt(&self) -> String {
        "Enter the time".to_string()
    }

    fn help(&self) -> String {
        format!("Please enter a time. Format is {}.", self.format)
    }

    fn error(&self) -> String {
        format!("ERROR - Please enter a time.  Format is {}.", self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Checker, Terminal};
    use std::io::Cursor;

    #[test]
    fn test_date_default_format() {
        let v = DateValidator::new();
        assert_eq!(v.validate("9/10/11"), Ok(NaiveDate::from_ymd_opt(2011, 9, 10).unwrap()));
        assert_eq!(v.validate("01/02/03"), Ok(NaiveDate::from_ymd_opt(2003, 1, 2).unwrap()));
        assert_eq!(v.validate("13/01/20"), Err(Invalid));
        assert_eq!(v.validate("2/30/20"), Err(Invalid));
        assert_eq!(v.validate("bad"), Err(Invalid));
    }

    #[test]
    fn test_date_custom_format() {
        let v = DateValidator::with_format("%Y-%m-%d").unwrap();
        assert_eq!(v.validate("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert_eq!(v.validate("2023-02-29"), Err(Invalid));
        assert_eq!(v.help(), "Please enter a date. Format is %Y-%m-%d.");
    }

    #[test]
    fn test_malformed_format_rejected() {
        assert!(matches!(DateValidator::with_format("%Q"), Err(ConfigError::Format(_))));
        assert!(matches!(TimeValidator::with_format(""), Err(ConfigError::Format(_))));
    }

    #[test]
    fn test_format_without_needed_fields_rejected() {
        for format in ["%H:%M", "%Y", "%m/%d"] {
            assert!(
                matches!(DateValidator::with_format(format), Err(ConfigError::Format(_))),
                "date format {format} accepted"
            );
        }
        for format in ["%Y-%m-%d", "%H"] {
            assert!(
                matches!(TimeValidator::with_format(format), Err(ConfigError::Format(_))),
                "time format {format} accepted"
            );
        }

        assert!(DateValidator::with_format("%d.%m.%Y").is_ok());
        assert!(DateValidator::with_format("%Y-%j").is_ok());
        assert!(TimeValidator::with_format("%I:%M %p").is_ok());
    }

    #[test]
    fn test_time_validate() {
        let v = TimeValidator::new();
        assert_eq!(v.validate("9:10:11"), Ok(NaiveTime::from_hms_opt(9, 10, 11).unwrap()));
        assert_eq!(v.validate("23:59:59"), Ok(NaiveTime::from_hms_opt(23, 59, 59).unwrap()));
        assert_eq!(v.validate("24:00:00"), Err(Invalid));
        assert_eq!(v.validate("noon"), Err(Invalid));

        let short = TimeValidator::with_format("%H:%M").unwrap();
        assert_eq!(short.validate("07:30"), Ok(NaiveTime::from_hms_opt(7, 30, 0).unwrap()));
    }

    #[test]
    fn test_ckdate_scripted() {
        let mut term = Terminal::new(Cursor::new("bad\n1/2/03\n"), Vec::new());
        let value = Checker::new(DateValidator::new())
            .with_prompt("date")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, NaiveDate::from_ymd_opt(2003, 1, 2).unwrap());
        assert_eq!(
            term.output_text(),
            "date [?,q]: ERROR - Please enter a date.  Format is %m/%d/%y.\ndate [?,q]: "
        );
    }

    #[test]
    fn test_cktime_scripted() {
        let mut term = Terminal::new(Cursor::new("9:10:11\n"), Vec::new());
        let value = Checker::new(TimeValidator::new())
            .with_prompt("time")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, NaiveTime::from_hms_opt(9, 10, 11).unwrap());
        assert_eq!(term.output_text(), "time [?,q]: ");
    }
}
