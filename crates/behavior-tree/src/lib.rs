//! Priority-ordered rule trees for tick-driven agents.
//!
//! An agent that must pick exactly one action per tick from an ordered list of
//! rules is a selector over sequences: each rule is a chain of guards followed
//! by an action, and the first rule whose chain succeeds wins.
//!
//! - **No Running state**: every node finishes within the tick it is ticked in
//! - **Borrowed contexts**: nodes may be generic over contexts that borrow
//!   per-tick data, so trees are cheap to build for a single decision
//! - **Zero dependencies**
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Behavior, BoxedBehavior};
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use status::Status;
