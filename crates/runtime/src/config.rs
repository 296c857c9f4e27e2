//! Agent tunables.
//!
//! Every threshold the policy, the shop search and the throttle consult lives
//! here, grouped per concern, with the defaults the bot ships with.

use std::time::Duration;

use game_core::{Attribute, DEFAULT_DECOY};
use serde::{Deserialize, Serialize};

/// Complete agent configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub policy: PolicyConfig,
    pub shop: ShopConfig,
    pub throttle: ThrottleConfig,
}

/// Thresholds for the ordered decision rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Skill points are spent once they exceed this amount.
    pub skill_point_threshold: f32,
    /// Held back from the pool before it is split.
    pub skill_point_decrement: f32,
    /// Each configured attribute receives `remainder / divisor`.
    pub skill_point_divisor: f32,
    pub skill_point_attributes: Vec<Attribute>,
    /// Resting and healing need more than this many ticks since the last hit.
    pub quiet_ticks: i32,
    /// Heal when life drops below this value.
    pub heal_life_threshold: f32,
    /// Heal only when the nearest hostile is farther than this.
    pub heal_safe_radius: u32,
    /// Distance from the stairs at which the agent waits for the party.
    pub stairs_wait_radius: u32,
    /// Monster name that never counts as hostile.
    pub decoy: String,
    /// Level where shopping happens and nobody waits at the stairs.
    pub entry_level: i32,
}

impl PolicyConfig {
    pub const DEFAULT_SKILL_POINT_THRESHOLD: f32 = 1.5;
    pub const DEFAULT_SKILL_POINT_DECREMENT: f32 = 0.1;
    pub const DEFAULT_SKILL_POINT_DIVISOR: f32 = 7.0;
    pub const DEFAULT_SKILL_POINT_ATTRIBUTES: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::SlashResist,
        Attribute::PierceResist,
    ];
    pub const DEFAULT_QUIET_TICKS: i32 = 2;
    pub const DEFAULT_HEAL_LIFE_THRESHOLD: f32 = 100.0;
    pub const DEFAULT_HEAL_SAFE_RADIUS: u32 = 3;
    pub const DEFAULT_STAIRS_WAIT_RADIUS: u32 = 1;
    pub const DEFAULT_ENTRY_LEVEL: i32 = 0;
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            skill_point_threshold: Self::DEFAULT_SKILL_POINT_THRESHOLD,
            skill_point_decrement: Self::DEFAULT_SKILL_POINT_DECREMENT,
            skill_point_divisor: Self::DEFAULT_SKILL_POINT_DIVISOR,
            skill_point_attributes: Self::DEFAULT_SKILL_POINT_ATTRIBUTES.to_vec(),
            quiet_ticks: Self::DEFAULT_QUIET_TICKS,
            heal_life_threshold: Self::DEFAULT_HEAL_LIFE_THRESHOLD,
            heal_safe_radius: Self::DEFAULT_HEAL_SAFE_RADIUS,
            stairs_wait_radius: Self::DEFAULT_STAIRS_WAIT_RADIUS,
            decoy: DEFAULT_DECOY.to_string(),
            entry_level: Self::DEFAULT_ENTRY_LEVEL,
        }
    }
}

/// Weights and cutoffs of the loadout search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// A single item may cost at most `money / reserve_ratio`.
    pub reserve_ratio: f32,
    /// Weight of the best stamina and life regeneration in a loadout.
    pub rest_weight: f32,
    pub slash_resist_weight: f32,
    pub pierce_resist_weight: f32,
    pub fire_resist_weight: f32,
    /// Pairs kept after the first round.
    pub pair_beam_width: usize,
    /// Sets kept after every later round.
    pub beam_width: usize,
    /// Rounds that each add one item to the pairs.
    pub extension_rounds: usize,
}

impl ShopConfig {
    pub const DEFAULT_RESERVE_RATIO: f32 = 5.0;
    pub const DEFAULT_REST_WEIGHT: f32 = 0.05;
    pub const DEFAULT_SLASH_RESIST_WEIGHT: f32 = 1.0;
    pub const DEFAULT_PIERCE_RESIST_WEIGHT: f32 = 1.0;
    pub const DEFAULT_FIRE_RESIST_WEIGHT: f32 = 0.5;
    pub const DEFAULT_PAIR_BEAM_WIDTH: usize = 500;
    pub const DEFAULT_BEAM_WIDTH: usize = 100;
    /// Pairs grow to sets of six, one item per slot.
    pub const DEFAULT_EXTENSION_ROUNDS: usize = 4;
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            reserve_ratio: Self::DEFAULT_RESERVE_RATIO,
            rest_weight: Self::DEFAULT_REST_WEIGHT,
            slash_resist_weight: Self::DEFAULT_SLASH_RESIST_WEIGHT,
            pierce_resist_weight: Self::DEFAULT_PIERCE_RESIST_WEIGHT,
            fire_resist_weight: Self::DEFAULT_FIRE_RESIST_WEIGHT,
            pair_beam_width: Self::DEFAULT_PAIR_BEAM_WIDTH,
            beam_width: Self::DEFAULT_BEAM_WIDTH,
            extension_rounds: Self::DEFAULT_EXTENSION_ROUNDS,
        }
    }
}

/// Chat deduplication window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Identical messages are suppressed for this many ticks.
    pub window_ticks: u64,
}

impl ThrottleConfig {
    pub const DEFAULT_WINDOW_TICKS: u64 = 10;
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            window_ticks: Self::DEFAULT_WINDOW_TICKS,
        }
    }
}

/// Pacing of the fetch/decide/submit loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Sleep after a failed fetch or submit.
    pub retry_delay: Duration,
    /// Sleep after a tick that produced nothing to submit.
    pub idle_delay: Duration,
}

impl DriverConfig {
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
    pub const DEFAULT_IDLE_DELAY: Duration = Duration::from_secs(1);

    pub const fn new(retry_delay: Duration, idle_delay: Duration) -> Self {
        Self {
            retry_delay,
            idle_delay,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RETRY_DELAY, Self::DEFAULT_IDLE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AgentConfig =
            serde_json::from_str(r#"{ "shop": { "beam_width": 7 } }"#)
                .expect("config decodes");

        assert_eq!(config.shop.beam_width, 7);
        assert_eq!(config.shop.pair_beam_width, ShopConfig::DEFAULT_PAIR_BEAM_WIDTH);
        assert_eq!(config.policy, PolicyConfig::default());
        assert_eq!(config.throttle.window_ticks, 10);
    }
}
