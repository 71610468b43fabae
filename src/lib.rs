//! tagmatch
//!
//! Exhaustive dispatch over closed tag sets, plus shape-directed
//! scalar/sequence operations.
//!
//! # Example
//!
//! ```rust
//! use tagmatch::{describe_state, greet, DataState};
//!
//! assert_eq!(describe_state(&DataState::Loading), "Loading...");
//! assert_eq!(greet("Mario"), "Hello, Mario!");
//! ```

#![doc(html_root_url = "https://docs.rs/tagmatch")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod dates;
pub mod error;
pub mod greet;
pub mod input;
pub mod state;
pub mod user;

// Utility modules
pub mod util;

// Re-exports
pub use dates::{format_date, DateInput};
pub use error::{DispatchError, DispatchResult};
pub use greet::{greet, greet_all, greet_input};
pub use input::{describe_unknown, Input, InputKind};
pub use state::{describe_state, outcome_message, DataState, Outcome, Payload, StateTag};
pub use user::{attach_id, project, Field, User, UserId, WithId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "tagmatch";
