//! Autonomous dungeon agent: policy, loadout search and tick loop.
//!
//! This crate turns a [`game_core::GameSnapshot`] into one
//! [`game_core::CommandBatch`] per tick and drives that decision against a
//! game server. Nothing here speaks HTTP; transports implement [`GameApi`].
//!
//! Modules are organized by responsibility:
//! - [`agent`] wraps the policy and the yell throttle into one decision call
//! - [`policy`] holds the priority-ordered rules as behavior-tree nodes
//! - [`shop`] searches the shop catalogue for the starting loadout
//! - [`throttle`] suppresses repeated chat messages
//! - [`driver`] runs the fetch/decide/submit loop with retries
//! - [`api`] exposes the server boundary and its errors
//! - [`config`] groups every tunable with its default
//! - [`diagnostics`] flattens records into loggable lines
pub mod agent;
pub mod api;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod policy;
pub mod shop;
pub mod throttle;

pub use agent::{Agent, Decision, SkipReason};
pub use api::{ApiError, GameApi, Result, RuntimeError};
pub use config::{AgentConfig, DriverConfig, PolicyConfig, ShopConfig, ThrottleConfig};
pub use driver::{StepOutcome, TickDriver};
pub use shop::{EquipmentOptimizer, Loadout};
pub use throttle::YellThrottle;
