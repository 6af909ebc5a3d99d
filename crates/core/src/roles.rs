//! The three fixed wiki roles.
//!
//! Role strings are parsed once at the boundary (database row, token claims)
//! and carried as [`Role`] everywhere else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_EDITOR: &str = "EDITOR";
pub const ROLE_VIEWER: &str = "VIEWER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

/// Roles allowed to create, edit, restore and delete pages.
pub const EDITOR_ROLES: &[Role] = &[Role::Admin, Role::Editor];

impl Role {
    /// Role assigned to self-registered accounts.
    pub const DEFAULT: Role = Role::Viewer;

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Editor => ROLE_EDITOR,
            Role::Viewer => ROLE_VIEWER,
        }
    }

    /// Whether this role is one of `allowed`.
    pub fn is_any_of(self, allowed: &[Role]) -> bool {
        allowed.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_EDITOR => Ok(Role::Editor),
            ROLE_VIEWER => Ok(Role::Viewer),
            other => Err(CoreError::Validation(format!("Unknown role '{other}'"))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_known_roles() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("EDITOR".parse::<Role>().unwrap(), Role::Editor);
        assert_eq!("VIEWER".parse::<Role>().unwrap(), Role::Viewer);
    }

    #[test]
    fn rejects_unknown_and_lowercase_roles() {
        assert_matches!("admin".parse::<Role>(), Err(CoreError::Validation(_)));
        assert_matches!("OWNER".parse::<Role>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn editor_roles_exclude_viewer() {
        assert!(Role::Admin.is_any_of(EDITOR_ROLES));
        assert!(Role::Editor.is_any_of(EDITOR_ROLES));
        assert!(!Role::Viewer.is_any_of(EDITOR_ROLES));
    }

    #[test]
    fn serde_uses_uppercase_names() {
        assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"EDITOR\"");
        let parsed: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, Role::Admin);
        assert_eq!(Role::DEFAULT, Role::Viewer);
    }
}
