//! Dynamic input values for shape-directed dispatch
//!
//! `Input` is the untyped boundary of the crate: a caller hands over a value
//! whose shape is only known at run time, and operations classify it with
//! [`InputKind`] before dispatching. Typed code should prefer the concrete
//! enums in `state` and `user`; this module exists for the call sites where
//! the shape genuinely arrives unknown.

use std::fmt;

use crate::error::{DispatchError, DispatchResult};

/// A value whose shape is determined at run time
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// UTF-8 text
    Text(String),
    /// Numeric value (f64, integral values render without a fraction)
    Number(f64),
    /// Boolean flag
    Flag(bool),
    /// Sequence of further inputs
    List(Vec<Input>),
    /// Empty value
    Unit,
}

/// Shape classification for [`Input`], used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Flag,
    List,
    Unit,
}

impl InputKind {
    /// Lowercase name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Flag => "flag",
            InputKind::List => "list",
            InputKind::Unit => "unit",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Input {
    /// Classify this value's shape
    pub fn kind(&self) -> InputKind {
        match self {
            Input::Text(_) => InputKind::Text,
            Input::Number(_) => InputKind::Number,
            Input::Flag(_) => InputKind::Flag,
            Input::List(_) => InputKind::List,
            Input::Unit => InputKind::Unit,
        }
    }

    /// The text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The element slice, if this is a list value
    pub fn as_list(&self) -> Option<&[Input]> {
        match self {
            Input::List(items) => Some(items),
            _ => None,
        }
    }

    /// Parse a JSON document into an `Input`
    ///
    /// Objects are not a recognised shape and map to `InvalidShape`; this is
    /// an in-memory convenience for demos and tests, not a wire format.
    pub fn from_json(text: &str) -> DispatchResult<Input> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| DispatchError::invalid_shape("a JSON value", e.to_string()))?;
        Input::try_from(value)
    }
}

impl TryFrom<serde_json::Value> for Input {
    type Error = DispatchError;

    fn try_from(value: serde_json::Value) -> DispatchResult<Input> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(Input::Unit),
            Value::Bool(b) => Ok(Input::Flag(b)),
            Value::Number(n) => n
                .as_f64()
                .map(Input::Number)
                .ok_or_else(|| DispatchError::invalid_shape("a finite number", n.to_string())),
            Value::String(s) => Ok(Input::Text(s)),
            Value::Array(items) => items
                .into_iter()
                .map(Input::try_from)
                .collect::<DispatchResult<Vec<_>>>()
                .map(Input::List),
            Value::Object(_) => Err(DispatchError::invalid_shape(
                "scalar or sequence",
                "object",
            )),
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<f64> for Input {
    fn from(n: f64) -> Self {
        Input::Number(n)
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Flag(b)
    }
}

impl From<Vec<Input>> for Input {
    fn from(items: Vec<Input>) -> Self {
        Input::List(items)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(s) => write!(f, "{}", s),
            // 整数值不带小数部分
            Input::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                write!(f, "{}", *n as i64)
            }
            Input::Number(n) => write!(f, "{}", n),
            Input::Flag(b) => write!(f, "{}", b),
            Input::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Input::Unit => write!(f, "()"),
        }
    }
}

/// Narrow an unknown value: text reports its uppercase form, anything else
/// reports what it is not.
pub fn describe_unknown(value: &Input) -> String {
    match value {
        Input::Text(s) => s.to_uppercase(),
        other => format!("Not a string: {}", other),
    }
}
