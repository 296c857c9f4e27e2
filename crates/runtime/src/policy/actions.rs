//! Action nodes for the policy tree.
//!
//! Action nodes build the tick's [`CommandBatch`] and record it on the
//! context. Each attaches a short yell; the agent's throttle decides whether
//! it actually goes out.

use behavior_tree::{Behavior, Status};
use game_core::{
    AttributeVector, Command, CommandBatch, MapObject, Skill, SkillTarget, SkillUse,
};

use crate::agent::SkipReason;
use crate::policy::AgentContext;
use crate::shop::EquipmentOptimizer;

pub const YELL_LEVEL_UP: &str = "Getting stronger!";
pub const YELL_SHOPPING: &str = "Time to gear up.";
pub const YELL_REST: &str = "Catching my breath...";
pub const YELL_HEAL: &str = "Patching myself up.";
pub const YELL_ATTACK: &str = "Have at you!";
pub const YELL_CHASE: &str = "Come here!";
pub const YELL_RETREAT: &str = "Falling back!";
pub const YELL_STAIRS: &str = "Onward, to the stairs!";
pub const YELL_WAIT: &str = "Come on, the stairs are here!";
pub const YELL_LOST: &str = "Where are the stairs? I can't find them!";

/// Splits skill points across the configured attributes.
///
/// A fixed decrement is held back and each attribute receives
/// `remainder / divisor`.
pub struct AssignSkillPoints;

impl Behavior<AgentContext<'_>> for AssignSkillPoints {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let policy = &ctx.config.policy;
        let remainder = ctx.character().skill_points - policy.skill_point_decrement;
        let share = remainder / policy.skill_point_divisor;
        let points = policy
            .skill_point_attributes
            .iter()
            .fold(AttributeVector::ZERO, |points, &attribute| {
                points.with(attribute, share)
            });

        tracing::info!(
            "Spending {:.2} skill points ({:.3} per attribute)",
            ctx.character().skill_points,
            share
        );
        ctx.command(CommandBatch::new(Command::AssignSkillPoints(points)).with_yell(YELL_LEVEL_UP));
        Status::Success
    }
}

/// Runs the loadout search and buys the result.
///
/// Succeeds either way: an empty result skips the tick rather than letting
/// the character wander off unarmed.
pub struct ShopForLoadout;

impl Behavior<AgentContext<'_>> for ShopForLoadout {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let optimizer = EquipmentOptimizer::new(&ctx.config.shop);
        match optimizer.optimize(ctx.character(), &ctx.snapshot.shop_items) {
            Some(loadout) => {
                let ids = loadout.ids();
                tracing::info!(
                    "Buying {:?} for {} (score {:.2})",
                    ids,
                    loadout.total_price(),
                    loadout.score
                );
                ctx.command(CommandBatch::new(Command::Buy(ids)).with_yell(YELL_SHOPPING));
            }
            None => {
                tracing::error!(
                    "Found no affordable loadout among {} shop items with {} money",
                    ctx.snapshot.shop_items.len(),
                    ctx.character().money
                );
                ctx.skip(SkipReason::NoAffordableLoadout);
            }
        }
        Status::Success
    }
}

/// Caches the strongest usable attack skill on the context.
///
/// Fails when the character has none.
pub struct SelectAttackSkill;

impl Behavior<AgentContext<'_>> for SelectAttackSkill {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        match ctx.select_attack() {
            Some(choice) => {
                tracing::debug!(
                    "Attack skill {}: damage {:.1}, range {}",
                    choice.skill.name,
                    choice.damage,
                    choice.range
                );
                Status::Success
            }
            None => {
                tracing::debug!("No usable attack skill");
                Status::Failure
            }
        }
    }
}

/// Uses a skill that refills whichever of stamina or mana is short.
pub struct UseRestSkill;

impl Behavior<AgentContext<'_>> for UseRestSkill {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let character = ctx.character();
        let stats = ctx.stats();
        let stamina_short = stats.stamina < character.max_attributes.stamina;
        let mana_short = stats.mana < character.max_attributes.mana;

        let skill = ctx.usable_skills().find(|skill| {
            let restores = |amount: Option<f32>| amount.is_some_and(|value| value > 0.0);
            (stamina_short && restores(skill.stamina_restore(stats)))
                || (mana_short && restores(skill.mana_restore(stats)))
        });

        let Some(skill) = skill else {
            tracing::debug!("Rest wanted but no restoring skill is usable");
            return Status::Failure;
        };
        tracing::info!("Resting with {}", skill.name);
        let use_skill = self_use(ctx, skill);
        ctx.command(CommandBatch::new(Command::UseSkill(use_skill)).with_yell(YELL_REST));
        Status::Success
    }
}

/// Uses a skill that restores the character's own life.
pub struct UseHealSkill;

impl Behavior<AgentContext<'_>> for UseHealSkill {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let stats = ctx.stats();
        let skill = ctx
            .usable_skills()
            .find(|skill| skill.life_restore(stats).is_some_and(|life| life > 0.0));

        let Some(skill) = skill else {
            tracing::debug!("Healing wanted but no healing skill is usable");
            return Status::Failure;
        };
        tracing::info!("Healing with {}", skill.name);
        let use_skill = self_use(ctx, skill);
        ctx.command(CommandBatch::new(Command::UseSkill(use_skill)).with_yell(YELL_HEAL));
        Status::Success
    }
}

/// Uses the selected attack skill on the nearest hostile.
pub struct AttackHostile;

impl Behavior<AgentContext<'_>> for AttackHostile {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let (Some(hostile), Some(attack)) = (ctx.hostile(), ctx.attack()) else {
            return Status::Failure;
        };
        tracing::info!(
            "Attacking at {} with {} (estimated damage {:.1} before resistances)",
            hostile.position,
            attack.skill.name,
            attack.damage
        );
        let use_skill = aim(attack.skill, hostile, ctx.map.decoy());
        ctx.command(CommandBatch::new(Command::UseSkill(use_skill)).with_yell(YELL_ATTACK));
        Status::Success
    }
}

/// Moves toward the nearest hostile.
pub struct MoveTowardHostile;

impl Behavior<AgentContext<'_>> for MoveTowardHostile {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let Some(hostile) = ctx.hostile() else {
            return Status::Failure;
        };
        tracing::info!("Closing in on hostile at {}", hostile.position);
        ctx.command(CommandBatch::new(Command::Move(hostile.position)).with_yell(YELL_CHASE));
        Status::Success
    }
}

/// Falls back to the spawn point, else the stairs, else asks for directions.
pub struct RetreatToSpawn;

impl Behavior<AgentContext<'_>> for RetreatToSpawn {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let batch = if let Some(spawn) = ctx.map.spawn_point() {
            tracing::info!("No attack skill; retreating to spawn at {}", spawn);
            CommandBatch::new(Command::Move(spawn)).with_yell(YELL_RETREAT)
        } else if let Some(stairs) = ctx.map.stairs_or_nearest_portal_up() {
            tracing::info!("No attack skill and no spawn; heading for stairs at {}", stairs);
            CommandBatch::new(Command::Move(stairs)).with_yell(YELL_RETREAT)
        } else {
            tracing::warn!("No attack skill, spawn or stairs on this level");
            CommandBatch::yell_only(YELL_LOST)
        };
        ctx.command(batch);
        Status::Success
    }
}

/// Stalls next to the stairs, calling the rest of the party over.
pub struct WaitForParty;

impl Behavior<AgentContext<'_>> for WaitForParty {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        tracing::info!("Waiting at the stairs for the party");
        ctx.command(CommandBatch::yell_only(YELL_WAIT));
        Status::Success
    }
}

/// Moves toward the best portal up, or the stairs.
pub struct MoveTowardStairs;

impl Behavior<AgentContext<'_>> for MoveTowardStairs {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let Some(stairs) = ctx.map.stairs_or_nearest_portal_up() else {
            return Status::Failure;
        };
        tracing::info!("Moving toward stairs at {}", stairs);
        ctx.command(CommandBatch::new(Command::Move(stairs)).with_yell(YELL_STAIRS));
        Status::Success
    }
}

/// Chat-only fallback when the level shows no way down.
pub struct AskForStairs;

impl Behavior<AgentContext<'_>> for AskForStairs {
    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        tracing::info!("Can't find stairs");
        ctx.command(CommandBatch::yell_only(YELL_LOST));
        Status::Success
    }
}

/// Skill use aimed at a hostile tile according to the skill's target kind.
pub fn aim(skill: &Skill, hostile: &MapObject, decoy: &str) -> SkillUse {
    match skill.target {
        SkillTarget::Position => SkillUse::at_position(&skill.id, hostile.position),
        SkillTarget::Character => match hostile.first_hostile(decoy) {
            Some(monster) => SkillUse::on_target(&skill.id, &monster.id),
            None => SkillUse::untargeted(&skill.id),
        },
        SkillTarget::None | SkillTarget::Caster => SkillUse::untargeted(&skill.id),
    }
}

/// Skill use aimed at the character itself.
fn self_use(ctx: &AgentContext<'_>, skill: &Skill) -> SkillUse {
    match (skill.target, ctx.position()) {
        (SkillTarget::Character, _) => SkillUse::on_target(&skill.id, &ctx.character().id),
        (SkillTarget::Position, Some(position)) => SkillUse::at_position(&skill.id, position),
        _ => SkillUse::untargeted(&skill.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AttributeVector, Monster, Position};

    fn skill(target: SkillTarget) -> Skill {
        Skill::new("zap", target).with_damage(AttributeVector::constant(1.0))
    }

    fn goblin_tile() -> MapObject {
        MapObject::at(Position::new(4, 2))
            .with_monster(Monster::new("chest-1", "Chest"))
            .with_monster(Monster::new("gob-1", "Goblin"))
    }

    #[test]
    fn aim_follows_target_kind() {
        let tile = goblin_tile();

        let at_tile = aim(&skill(SkillTarget::Position), &tile, "Chest");
        assert_eq!(at_tile.position, Some(Position::new(4, 2)));
        assert!(at_tile.target_id.is_none());

        let at_monster = aim(&skill(SkillTarget::Character), &tile, "Chest");
        assert_eq!(at_monster.target_id.as_deref(), Some("gob-1"));

        let plain = aim(&skill(SkillTarget::None), &tile, "Chest");
        assert_eq!(plain, SkillUse::untargeted("zap"));
    }
}
