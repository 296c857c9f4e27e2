//! Fetch/decide/submit loop.
//!
//! The driver owns the [`Agent`] and a [`GameApi`]. Each step fetches a
//! snapshot, asks the agent for a decision and submits the resulting batch.
//! Transport failures are logged and followed by a retry delay; the agent
//! holds no per-tick state, so there is nothing to roll back.

use game_core::{CommandBatch, GameError, GameSnapshot};

use crate::agent::{Agent, Decision, SkipReason};
use crate::api::{GameApi, Result};
use crate::config::DriverConfig;
use crate::diagnostics;

/// What a single step did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Submitted(CommandBatch),
    Skipped(SkipReason),
    FetchFailed,
    SubmitFailed,
}

/// Drives one agent against one game server.
pub struct TickDriver<A> {
    api: A,
    agent: Agent,
    config: DriverConfig,
}

impl<A: GameApi> TickDriver<A> {
    pub fn new(api: A, agent: Agent, config: DriverConfig) -> Self {
        Self { api, agent, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Runs one tick.
    pub async fn step(&mut self) -> StepOutcome {
        let snapshot = match self.api.fetch_state().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("Failed to fetch game state [{}]: {}", err.error_code(), err);
                tokio::time::sleep(self.config.retry_delay).await;
                return StepOutcome::FetchFailed;
            }
        };

        log_tick(&snapshot);

        match self.agent.decide(&snapshot) {
            Decision::Skip(reason) => {
                tracing::info!("Skipping tick {}: {}", snapshot.tick, reason);
                tokio::time::sleep(self.config.idle_delay).await;
                StepOutcome::Skipped(reason)
            }
            Decision::Command(batch) => {
                if let Some(action) = &batch.action {
                    tracing::info!("Submitting {}", action.kind());
                }
                diagnostics::log_flattened(&batch, "Command");
                match self.api.submit(&batch).await {
                    Ok(()) => StepOutcome::Submitted(batch),
                    Err(err) => {
                        tracing::warn!(
                            "Failed to submit commands [{}, {}]: {}",
                            err.error_code(),
                            err.severity().as_str(),
                            err
                        );
                        tokio::time::sleep(self.config.retry_delay).await;
                        StepOutcome::SubmitFailed
                    }
                }
            }
        }
    }

    /// Runs `ticks` steps and returns what each one did.
    pub async fn run_ticks(&mut self, ticks: usize) -> Vec<StepOutcome> {
        let mut outcomes = Vec::with_capacity(ticks);
        for _ in 0..ticks {
            outcomes.push(self.step().await);
        }
        outcomes
    }

    /// Runs until the task is cancelled.
    pub async fn run(&mut self) {
        tracing::info!("Agent loop started");
        loop {
            self.step().await;
        }
    }

    /// Asks the server to respawn the character.
    pub async fn respawn(&self) -> Result<()> {
        tracing::info!("Respawning ...");
        self.api.respawn().await?;
        Ok(())
    }
}

fn log_tick(snapshot: &GameSnapshot) {
    tracing::info!("Tick {} score {}", snapshot.tick, snapshot.score);
    diagnostics::log_flattened(&snapshot.character.attributes, "Character.Attributes");
    if let Err(err) = snapshot.current_level_map() {
        tracing::warn!("{} ({})", err, err.error_code());
    }
    match snapshot.current_position {
        Some(position) => tracing::info!(
            "Level {} position {}",
            snapshot.current_level,
            position
        ),
        None => tracing::info!("Level {} position unknown", snapshot.current_level),
    }
}
