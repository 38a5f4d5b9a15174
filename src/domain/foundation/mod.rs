//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the tool shelf.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ToastId, ToolId};
pub use state_machine::{StateMachine, STATE_TRANSITION_FIELD};
pub use timestamp::Timestamp;
