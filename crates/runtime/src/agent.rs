//! The decision core: one snapshot in, one decision out.

use behavior_tree::Behavior;
use game_core::{CommandBatch, GameSnapshot};

use crate::config::AgentConfig;
use crate::policy::{AgentContext, policy_tree};
use crate::throttle::YellThrottle;

/// Result of deciding on a tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    /// Submit this batch.
    Command(CommandBatch),
    /// Submit nothing this tick.
    Skip(SkipReason),
}

/// Why a tick produced nothing to submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// Unarmed on the entry level and the shop search found nothing to buy.
    NoAffordableLoadout,
    /// The batch only carried a message, and the message repeated too soon.
    MessageSuppressed,
    /// No rule produced a decision.
    NoRuleMatched,
}

/// Stateless policy plus the long-lived yell throttle.
///
/// `decide` takes `&mut self`: one agent serves one character, one tick at a
/// time.
#[derive(Debug)]
pub struct Agent {
    config: AgentConfig,
    throttle: YellThrottle,
}

impl Agent {
    pub fn new(config: AgentConfig) -> Self {
        let throttle = YellThrottle::new(config.throttle);
        Self { config, throttle }
    }

    /// Runs the rule list against `snapshot` and throttles the outgoing yell.
    pub fn decide(&mut self, snapshot: &GameSnapshot) -> Decision {
        let decision = {
            let mut ctx = AgentContext::new(snapshot, &self.config);
            let status = policy_tree().tick(&mut ctx);
            tracing::debug!("Policy finished with {:?}", status);
            ctx.take_decision()
        };

        match decision {
            Some(Decision::Command(batch)) => {
                let batch = self.throttle.filter(batch, snapshot.tick);
                if batch.is_empty() {
                    tracing::debug!("Only a repeated message left; skipping tick");
                    Decision::Skip(SkipReason::MessageSuppressed)
                } else {
                    Decision::Command(batch)
                }
            }
            Some(skip @ Decision::Skip(_)) => skip,
            None => {
                tracing::warn!("No rule matched at tick {}", snapshot.tick);
                Decision::Skip(SkipReason::NoRuleMatched)
            }
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}
