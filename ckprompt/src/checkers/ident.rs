//! `ckuid` and `ckgid`: user and group ids.
//!
//! Without a database any non-negative 32-bit id is accepted. With an
//! [`IdDatabase`] attached the id must exist, and names are accepted too
//! (case-insensitively) and resolved to their id.
//!
//! ```rust
//! use ckprompt::checkers::{IdDatabase, IdValidator};
//! use ckprompt::utils::Validator;
//!
//! let groups = IdDatabase::parse_group("wheel:*:0:root\nstaff:*:20:\n");
//! let v = IdValidator::with_database(groups);
//!
//! assert_eq!(v.validate("staff"), Ok(20));
//! assert_eq!(v.validate("0"), Ok(0));
//! assert!(v.validate("42").is_err());
//! ```
use crate::error::ConfigError;
use crate::utils::{Invalid, Validator};

const PASSWD: &str = "/etc/passwd";
const GROUP: &str = "/etc/group";

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn read_system(path: &'static str) -> Result<String, ConfigError> {
            std::fs::read_to_string(path)
                .map_err(|source| ConfigError::IdentityDatabase { path, source })
        }
    } else {
        fn read_system(path: &'static str) -> Result<String, ConfigError> {
            Err(ConfigError::IdentityDatabase {
                path,
                source: std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    "no account database on this platform",
                ),
            })
        }
    }
}

/// Whether ids name users or groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Group,
}

impl IdKind {
    fn noun(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
        }
    }
}

/// One account or group: lower-cased name and numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdEntry {
    pub name: String,
    pub id: u32,
}

/// Names and ids read from `passwd`/`group` formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdDatabase {
    kind: IdKind,
    entries: Vec<IdEntry>,
}

impl IdDatabase {
    /// Parses `name:passwd:uid:gid:gecos:home:shell` lines.
    pub fn parse_passwd(contents: &str) -> Self {
        Self::parse(IdKind::User, contents)
    }

    /// Parses `name:passwd:gid:members` lines. Names starting with `_` are skipped.
    pub fn parse_group(contents: &str) -> Self {
        Self::parse(IdKind::Group, contents)
    }

    /// Reads `/etc/passwd`.
    ///
    /// # Errors
    /// [`ConfigError::IdentityDatabase`] when the file cannot be read.
    pub fn system_users() -> Result<Self, ConfigError> {
        Ok(Self::parse_passwd(&read_system(PASSWD)?))
    }

    /// Reads `/etc/group`.
    ///
    /// # Errors
    /// [`ConfigError::IdentityDatabase`] when the file cannot be read.
    pub fn system_groups() -> Result<Self, ConfigError> {
        Ok(Self::parse_group(&read_system(GROUP)?))
    }

    fn parse(kind: IdKind, contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let fields: Vec<&str> = line.split(':').collect();
                let entry = match (fields.first(), fields.get(2)) {
                    (Some(name), Some(id)) if !name.is_empty() => {
                        id.parse().ok().map(|id| IdEntry {
                            name: name.to_lowercase(),
                            id,
                        })
                    }
                    _ => None,
                };
                if entry.is_none() {
                    tracing::trace!(line, "skipping malformed {} entry", kind.noun());
                }
                entry
            })
            .filter(|entry| kind == IdKind::User || !entry.name.starts_with('_'))
            .collect();

        Self { kind, entries }
    }

    pub fn kind(&self) -> IdKind {
        self.kind
    }

    pub fn entries(&self) -> &[IdEntry] {
        &self.entries
    }

    pub fn id_of(&self, name: &str) -> Option<u32> {
        let name = name.to_lowercase();
        self.entries.iter().find(|e| e.name == name).map(|e| e.id)
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }
}

/// User or group id, optionally checked against an [`IdDatabase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdValidator {
    kind: IdKind,
    database: Option<IdDatabase>,
}

impl IdValidator {
    /// Any non-negative user id.
    pub fn user() -> Self {
        Self {
            kind: IdKind::User,
            database: None,
        }
    }

    /// Any non-negative group id.
    pub fn group() -> Self {
        Self {
            kind: IdKind::Group,
            database: None,
        }
    }

    pub fn with_database(database: IdDatabase) -> Self {
        Self {
            kind: database.kind(),
            database: Some(database),
        }
    }

    /// Users from `/etc/passwd`.
    ///
    /// # Errors
    /// [`ConfigError::IdentityDatabase`] when the file cannot be read.
    pub fn system_users() -> Result<Self, ConfigError> {
        IdDatabase::system_users().map(Self::with_database)
    }

    /// Groups from `/etc/group`.
    ///
    /// # Errors
    /// [`ConfigError::IdentityDatabase`] when the file cannot be read.
    pub fn system_groups() -> Result<Self, ConfigError> {
        IdDatabase::system_groups().map(Self::with_database)
    }

    fn names(&self) -> String {
        self.database
            .iter()
            .flat_map(|db| db.entries())
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Validator for IdValidator {
    type Output = u32;

    fn validate(&self, text: &str) -> Result<u32, Invalid> {
        match (text.parse::<u32>(), &self.database) {
            (Ok(id), None) => Ok(id),
            (Ok(id), Some(db)) if db.contains_id(id) => Ok(id),
            (Ok(_), Some(_)) => Err(Invalid),
            (Err(_), Some(db)) => db.id_of(text).ok_or(Invalid),
            (Err(_), None) => Err(Invalid),
        }
    }

    fn prompt(&self) -> String {
        match self.database {
            Some(_) => format!("Enter the name of an existing {}", self.kind.noun()),
            None => format!("Enter a {} id", self.kind.noun()),
        }
    }

    fn help(&self) -> String {
        match self.database {
            Some(_) => format!(
                "Please enter one of the following {} names: {}",
                self.kind.noun(),
                self.names()
            ),
            None => format!("Please enter a non-negative {} id.", self.kind.noun()),
        }
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

    const PASSWD_TEXT: &str = "\
# local accounts
root:x:0:0:root:/root:/bin/bash
jsmith:x:1001:1000:Joe Smith,Room 1007,(234)555-8910,(234)555-0044,email:/home/jsmith:/bin/sh

broken-line
nobody:x:notanumber:0::/:/bin/false
";

    const GROUP_TEXT: &str = "wheel:*:0:root\ndaemon:*:1:root\n_spotlight:*:89:\nStaff:*:20:  # trailing comment\n";

    #[test]
    fn test_parse_passwd() {
        let db = IdDatabase::parse_passwd(PASSWD_TEXT);
        assert_eq!(db.kind(), IdKind::User);
        assert_eq!(
            db.entries(),
            &[
                IdEntry { name: "root".to_string(), id: 0 },
                IdEntry { name: "jsmith".to_string(), id: 1001 },
            ]
        );
    }

    #[test]
    fn test_parse_group_filters_underscore_names() {
        let db = IdDatabase::parse_group(GROUP_TEXT);
        let names: Vec<&str> = db.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["wheel", "daemon", "staff"]);
        assert_eq!(db.id_of("STAFF"), Some(20));
        assert!(!db.contains_id(89));
    }

    #[test]
    fn test_numeric_ids_without_database() {
        let v = IdValidator::user();
        assert_eq!(v.validate("0"), Ok(0));
        assert_eq!(v.validate("4294967295"), Ok(u32::MAX));
        assert_eq!(v.validate("-1"), Err(Invalid));
        assert_eq!(v.validate("root"), Err(Invalid));
        assert_eq!(v.help(), "Please enter a non-negative user id.");
    }

    #[test]
    fn test_ids_checked_against_database() {
        let v = IdValidator::with_database(IdDatabase::parse_passwd(PASSWD_TEXT));
        assert_eq!(v.validate("jsmith"), Ok(1001));
        assert_eq!(v.validate("JSmith"), Ok(1001));
        assert_eq!(v.validate("1001"), Ok(1001));
        assert_eq!(v.validate("1002"), Err(Invalid));
        assert_eq!(v.validate("nobody"), Err(Invalid));
        assert_eq!(
            v.help(),
            "Please enter one of the following user names: root, jsmith"
        );
    }

    #[test]
    fn test_ckgid_scripted() {
        let groups = IdDatabase::parse_group(GROUP_TEXT);
        let mut term = Terminal::new(Cursor::new("wheel\n"), Vec::new());
        let value = Checker::new(IdValidator::with_database(groups))
            .with_prompt("group")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, 0);
        assert_eq!(term.output_text(), "group [?,q]: ");
    }

    #[test]
    fn test_ckuid_scripted_rejects_unknown_user() {
        let users = IdDatabase::parse_passwd(PASSWD_TEXT);
        let mut term = Terminal::new(Cursor::new("alice\njsmith\n"), Vec::new());
        let value = Checker::new(IdValidator::with_database(users))
            .with_prompt("user")
            .ask_with(&mut term)
            .unwrap();

        assert_eq!(value, 1001);
        assert_eq!(
            term.output_text(),
            "user [?,q]: ERROR - Please enter one of the following user names: root, jsmith\nuser [?,q]: "
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_system_users_has_root() {
        if let Ok(db) = IdDatabase::system_users() {
            assert_eq!(db.id_of("root"), Some(0));
        }
    }
}
