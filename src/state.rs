//! Tagged data states and their exhaustive dispatchers
//!
//! `DataState` is the crate's canonical Tagged Value: the tag fully
//! determines which fields exist, and every consumer matches all variants
//! with no default arm, so extending the tag set without updating a
//! dispatcher is a compile error. Unknown tags only become constructible at
//! the untyped boundaries (`FromStr`, [`DataState::from_json`]), where they
//! surface as `UnreachableVariant`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DispatchError, DispatchResult};

/// The closed tag set of [`DataState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateTag {
    Loading,
    Failed,
    Success,
}

impl StateTag {
    /// All tags, in declaration order
    pub const ALL: [StateTag; 3] = [StateTag::Loading, StateTag::Failed, StateTag::Success];

    /// The boundary spelling of this tag (lowercase, as in the JSON shape)
    pub fn as_str(&self) -> &'static str {
        match self {
            StateTag::Loading => "loading",
            StateTag::Failed => "failed",
            StateTag::Success => "success",
        }
    }
}

impl fmt::Display for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StateTag {
    type Err = DispatchError;

    // 大小写敏感：封闭集合意味着拼写也是封闭的
    fn from_str(s: &str) -> DispatchResult<Self> {
        match s {
            "loading" => Ok(StateTag::Loading),
            "failed" => Ok(StateTag::Failed),
            "success" => Ok(StateTag::Success),
            other => Err(DispatchError::unreachable(other)),
        }
    }
}

/// Payload carried by the `success` variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub title: String,
}

/// A value whose legal fields are determined by its tag
///
/// Serde representation uses an internal `state` tag and the original field
/// names, so `{"state":"failed","error":"X"}` round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DataState {
    /// Nothing yet; carries no fields
    Loading,
    /// Terminal failure with a message
    Failed { error: String },
    /// Completed with a nested payload
    Success { data: Payload },
}

impl DataState {
    /// The tag of this value
    pub fn tag(&self) -> StateTag {
        match self {
            DataState::Loading => StateTag::Loading,
            DataState::Failed { .. } => StateTag::Failed,
            DataState::Success { .. } => StateTag::Success,
        }
    }

    /// Assemble a typed `DataState` from an untyped JSON record
    ///
    /// The `state` tag is checked first, so an unknown tag surfaces as
    /// `UnreachableVariant`; a missing tag, missing or mistyped fields, or
    /// non-record input are `InvalidShape`.
    pub fn from_json(text: &str) -> DispatchResult<DataState> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| DispatchError::invalid_shape("a JSON record", e.to_string()))?;
        let record = value
            .as_object()
            .ok_or_else(|| DispatchError::invalid_shape("a record with a `state` tag", kind_of(&value)))?;
        let tag_text = record
            .get("state")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                DispatchError::invalid_shape("a record with a string `state` tag", text.to_string())
            })?;
        let tag: StateTag = tag_text.parse()?;
        debug!("ingesting data state with tag `{}`", tag);

        match tag {
            StateTag::Loading => Ok(DataState::Loading),
            StateTag::Failed => {
                let error = record
                    .get("error")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        DispatchError::invalid_shape("a string `error` field", text.to_string())
                    })?;
                Ok(DataState::Failed {
                    error: error.to_string(),
                })
            }
            StateTag::Success => {
                let title = record
                    .get("data")
                    .and_then(|v| v.get("title"))
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        DispatchError::invalid_shape("a `data.title` string field", text.to_string())
                    })?;
                Ok(DataState::Success {
                    data: Payload {
                        title: title.to_string(),
                    },
                })
            }
        }
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "record",
    }
}

/// The Tagged-Result Dispatcher: one string per tag, no default arm
pub fn describe_state(state: &DataState) -> String {
    debug!("dispatching on tag `{}`", state.tag());
    match state {
        DataState::Loading => "Loading...".to_string(),
        DataState::Failed { error } => format!("Error: {}", error),
        DataState::Success { data } => format!("Title: {}", data.title),
    }
}

/// Two-tag outcome set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    /// All outcomes, in declaration order
    pub const ALL: [Outcome; 2] = [Outcome::Success, Outcome::Error];

    /// The boundary spelling of this outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = DispatchError;

    fn from_str(s: &str) -> DispatchResult<Self> {
        match s {
            "success" => Ok(Outcome::Success),
            "error" => Ok(Outcome::Error),
            other => Err(DispatchError::unreachable(other)),
        }
    }
}

/// Exhaustive dispatcher over [`Outcome`]
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => "Operation was successful",
        Outcome::Error => "An error occurred",
    }
}
