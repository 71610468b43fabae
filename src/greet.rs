//! Scalar and sequence greetings
//!
//! Two explicit entry points: [`greet`] for a single name and [`greet_all`]
//! defined as its element-wise image, which preserves order and length by
//! construction.
//! [`greet_input`] is the shape-directed boundary for callers holding an
//! untyped [`Input`].

use tracing::debug;

use crate::error::{DispatchError, DispatchResult};
use crate::input::Input;

/// Greet a single name
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Greet every name in a sequence, in order
pub fn greet_all<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|n| greet(n.as_ref())).collect()
}

/// Shape-directed greeting over an untyped input
///
/// Text yields a text greeting; a list of all-text elements yields a list of
/// greetings. Anything else, including a list with a single non-text
/// element, is `InvalidShape` with no partial result.
pub fn greet_input(input: &Input) -> DispatchResult<Input> {
    debug!("greeting input of kind `{}`", input.kind());
    match input {
        Input::Text(name) => Ok(Input::Text(greet(name))),
        Input::List(items) => {
            let names: Vec<&str> = items
                .iter()
                .map(|item| {
                    item.as_text().ok_or_else(|| {
                        DispatchError::invalid_shape("a list of text", item.kind().name())
                    })
                })
                .collect::<DispatchResult<_>>()?;
            Ok(Input::List(
                greet_all(names).into_iter().map(Input::Text).collect(),
            ))
        }
        other => Err(DispatchError::invalid_shape(
            "text or a list of text",
            other.kind().name(),
        )),
    }
}
