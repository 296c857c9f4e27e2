//! Public runtime API surface.
//!
//! Types exposed to whoever embeds the agent: the server boundary trait and
//! the errors crossing it.

pub mod errors;
pub mod game;

pub use errors::{ApiError, Result, RuntimeError};
pub use game::GameApi;
