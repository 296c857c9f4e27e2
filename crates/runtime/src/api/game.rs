//! Asynchronous boundary to the game server.
//!
//! The agent never talks to the network itself. The [`TickDriver`] pulls
//! snapshots and pushes commands through a [`GameApi`] implementation: the
//! HTTP client in production, scripted fixtures in tests.
//!
//! [`TickDriver`]: crate::TickDriver
use async_trait::async_trait;
use game_core::{CommandBatch, GameSnapshot};

use super::errors::ApiError;

/// Server operations the agent needs.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Fetches the state for the current tick. Idempotent.
    async fn fetch_state(&self) -> Result<GameSnapshot, ApiError>;

    /// Submits one tick's commands.
    async fn submit(&self, batch: &CommandBatch) -> Result<(), ApiError>;

    /// Asks the server to respawn the character.
    async fn respawn(&self) -> Result<(), ApiError>;
}
