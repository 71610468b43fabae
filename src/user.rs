//! User records and their projections
//!
//! The record side of the corpus: a `User` with an optional age, the
//! name-or-number [`UserId`] union, the closed [`Field`] column set for
//! table projection, and the generic [`WithId`] wrapper.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DispatchError, DispatchResult};

/// A user record; the tag-free counterpart of the state types
///
/// Serde uses the corpus field spellings (`firstName`, `isAdmin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    /// Absent ages render as `unknown`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    pub is_admin: bool,
}

impl User {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        User {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: None,
            is_admin: false,
        }
    }

    /// Space-joined full name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// One-line summary: `Name: {full_name}, Age: {age|unknown}, Admin: {is_admin}`
    pub fn summary(&self) -> String {
        let age = match self.age {
            Some(age) => age.to_string(),
            None => "unknown".to_string(),
        };
        format!(
            "Name: {}, Age: {}, Admin: {}",
            self.full_name(),
            age,
            self.is_admin
        )
    }
}

/// A user identifier: either a name or a numeric id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Name(String),
    Number(u64),
}

impl UserId {
    /// The lookup key for this identifier: names pass through, numbers
    /// render as decimal digits with no fraction.
    pub fn lookup_key(&self) -> String {
        match self {
            UserId::Name(name) => name.clone(),
            UserId::Number(id) => id.to_string(),
        }
    }
}

/// Closed set of projectable [`User`] columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    Admin,
}

impl Field {
    /// All columns, in declaration order
    pub const ALL: [Field; 3] = [Field::Name, Field::Age, Field::Admin];

    /// The boundary spelling of this column
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Admin => "admin",
        }
    }

    /// Render one cell; exhaustive over the column set
    pub fn render(&self, user: &User) -> String {
        match self {
            Field::Name => user.full_name(),
            Field::Age => match user.age {
                Some(age) => age.to_string(),
                None => "unknown".to_string(),
            },
            Field::Admin => user.is_admin.to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = DispatchError;

    fn from_str(s: &str) -> DispatchResult<Self> {
        match s {
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            "admin" => Ok(Field::Admin),
            other => Err(DispatchError::unreachable(other)),
        }
    }
}

/// Project users onto columns: one row per user, cells in field order
pub fn project(users: &[User], fields: &[Field]) -> Vec<Vec<String>> {
    debug!("projecting {} users onto {} fields", users.len(), fields.len());
    users
        .iter()
        .map(|user| fields.iter().map(|field| field.render(user)).collect())
        .collect()
}

/// A payload with an attached id; the payload is never altered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithId<T> {
    pub id: String,
    #[serde(flatten)]
    pub value: T,
}

/// Attach a random 16-hex-digit id to a payload
pub fn attach_id<T>(value: T) -> WithId<T> {
    let id = format!("{:016x}", rand::rng().random::<u64>());
    WithId { id, value }
}
