//! Guard nodes for the policy tree.
//!
//! Guards inspect the context and return Success or Failure. They never
//! record a decision.

use behavior_tree::{Behavior, Status};

use crate::policy::AgentContext;

/// Unspent skill points exceed the spending threshold.
pub struct HasSkillPoints;

impl Behavior<AgentContext<'_>> for HasSkillPoints {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let points = ctx.character().skill_points;
        Status::from_bool(points > ctx.config.policy.skill_point_threshold)
    }
}

/// Nothing is held in the main hand.
pub struct IsUnarmed;

impl Behavior<AgentContext<'_>> for IsUnarmed {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        Status::from_bool(ctx.character().is_unarmed())
    }
}

/// The character stands on the entry level (where the shop is).
pub struct OnEntryLevel;

impl Behavior<AgentContext<'_>> for OnEntryLevel {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let level = ctx.character().coordinates.level;
        Status::from_bool(level == ctx.config.policy.entry_level)
    }
}

/// Stamina or mana is below its maximum.
pub struct NeedsRest;

impl Behavior<AgentContext<'_>> for NeedsRest {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let character = ctx.character();
        let (now, max) = (&character.attributes, &character.max_attributes);
        Status::from_bool(now.stamina < max.stamina || now.mana < max.mana)
    }
}

/// Life is below the healing threshold.
pub struct LifeBelowThreshold;

impl Behavior<AgentContext<'_>> for LifeBelowThreshold {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        Status::from_bool(ctx.stats().life < ctx.config.policy.heal_life_threshold)
    }
}

/// The last hit was long enough ago.
pub struct IsQuiet;

impl Behavior<AgentContext<'_>> for IsQuiet {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        Status::from_bool(ctx.is_quiet())
    }
}

/// A hostile is on the level.
pub struct HasHostile;

impl Behavior<AgentContext<'_>> for HasHostile {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        Status::from_bool(ctx.hostile().is_some())
    }
}

/// An attack skill was selected for this tick.
pub struct HasAttackSkill;

impl Behavior<AgentContext<'_>> for HasAttackSkill {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        Status::from_bool(ctx.attack().is_some())
    }
}

/// The hostile is within reach of the selected attack skill.
///
/// Fails when there is no hostile or no attack skill.
pub struct HostileInAttackRange;

impl Behavior<AgentContext<'_>> for HostileInAttackRange {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let (Some(distance), Some(attack)) = (ctx.hostile_distance(), ctx.attack()) else {
            return Status::Failure;
        };
        tracing::debug!(
            "Hostile at distance {}, {} reaches {}",
            distance,
            attack.skill.name,
            attack.range
        );
        Status::from_bool(distance <= attack.range)
    }
}

/// The server reports line of sight to the hostile's tile.
pub struct HostileInSight;

impl Behavior<AgentContext<'_>> for HostileInSight {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let Some(hostile) = ctx.hostile() else {
            return Status::Failure;
        };
        Status::from_bool(ctx.map.has_line_of_sight(hostile.position))
    }
}

/// No hostile, or the nearest one is farther than the heal safety radius.
pub struct HostileOutsideSafeRadius;

impl Behavior<AgentContext<'_>> for HostileOutsideSafeRadius {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let radius = ctx.config.policy.heal_safe_radius;
        Status::from_bool(
            ctx.hostile_distance()
                .is_none_or(|distance| distance > radius),
        )
    }
}

/// The character is next to the stairs on a level other than the entry level.
pub struct AtStairsOnDeeperLevel;

impl Behavior<AgentContext<'_>> for AtStairsOnDeeperLevel {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let policy = &ctx.config.policy;
        if ctx.snapshot.current_level == policy.entry_level {
            return Status::Failure;
        }
        let Some(stairs) = ctx.map.stairs_or_nearest_portal_up() else {
            return Status::Failure;
        };
        Status::from_bool(ctx.map.distance_to(stairs) <= policy.stairs_wait_radius)
    }
}

/// Another player on the level is still away from the stairs.
pub struct PartyLagging;

impl Behavior<AgentContext<'_>> for PartyLagging {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let Some(stairs) = ctx.map.stairs_or_nearest_portal_up() else {
            return Status::Failure;
        };
        let radius = ctx.config.policy.stairs_wait_radius;
        let lagging = ctx
            .map
            .others_on_level()
            .into_iter()
            .find(|(position, _)| position.distance(stairs) > radius);

        if let Some((position, player)) = lagging {
            tracing::debug!("Waiting for {} at {}", player.name, position);
            return Status::Success;
        }
        Status::Failure
    }
}
