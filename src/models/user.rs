//! User model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::trim_owned;

/// Library user. Identity key is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "User ID cannot be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
}

impl NewUser {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
        .trimmed()
    }

    /// Strip surrounding whitespace from both fields
    pub fn trimmed(self) -> Self {
        Self {
            id: trim_owned(self.id),
            name: trim_owned(self.name),
        }
    }
}

impl From<NewUser> for User {
    fn from(new: NewUser) -> Self {
        User::new(new.id, new.name)
    }
}
