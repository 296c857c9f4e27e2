//! Composition root for the dungeon bot.
//!
//! Wires the [`runtime`] agent to the game server over HTTP:
//! - [`config`] reads the environment and command line
//! - [`http`] implements [`runtime::GameApi`] with `reqwest`
//! - [`logging`] installs the tracing subscriber
pub mod config;
pub mod http;
pub mod logging;

pub use config::{ClientConfig, RunMode};
pub use http::HttpGameApi;
