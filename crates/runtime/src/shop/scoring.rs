//! Per-item value estimates used by the loadout search.
//!
//! Every function evaluates skills against a set's combined stats, so the
//! same weapon scores differently depending on what it is worn with.

use game_core::{AttributeVector, Item, Skill};

use crate::config::ShopConfig;

/// Skill that can carry a loadout: an attack with positive intrinsic power.
fn is_weapon_skill(skill: &Skill, stats: &AttributeVector) -> bool {
    skill.is_attack(stats)
        && skill
            .damage
            .as_ref()
            .is_some_and(|formula| AttributeVector::UNIT.dot(formula) > 0.0)
}

/// True when the item grants at least one weapon skill.
pub fn is_weapon(item: &Item, stats: &AttributeVector) -> bool {
    item.skills.iter().any(|skill| is_weapon_skill(skill, stats))
}

/// `damage × trunc(range)` of the item's hardest-hitting weapon skill.
///
/// The skill is picked by damage alone; its range then scales the value.
/// Ties keep the first skill.
pub fn weapon_value(item: &Item, stats: &AttributeVector) -> Option<f32> {
    let mut best: Option<(&Skill, f32)> = None;
    for skill in item
        .skills
        .iter()
        .filter(|skill| is_weapon_skill(skill, stats))
    {
        let Some(damage) = skill.damage_with(stats) else {
            continue;
        };
        if best.is_none_or(|(_, top)| damage > top) {
            best = Some((skill, damage));
        }
    }

    let (skill, damage) = best?;
    Some(damage * skill.range_with(stats)? as f32)
}

/// Largest stamina the item's skills give back to the caster, never negative.
pub fn stamina_regen(item: &Item, stats: &AttributeVector) -> f32 {
    item.skills
        .iter()
        .filter_map(|skill| skill.stamina_restore(stats))
        .fold(0.0, f32::max)
}

/// Largest life the item's skills restore on the caster, never negative.
pub fn life_regen(item: &Item, stats: &AttributeVector) -> f32 {
    item.skills
        .iter()
        .filter_map(|skill| skill.life_restore(stats))
        .fold(0.0, f32::max)
}

/// `(1 + slash·w1)(1 + pierce·w2)(1 + fire·w3)` from the item's static bonus.
pub fn resist_factor(item: &Item, config: &ShopConfig) -> f32 {
    let bonus = &item.attributes;
    (1.0 + bonus.slash_resist * config.slash_resist_weight)
        * (1.0 + bonus.pierce_resist * config.pierce_resist_weight)
        * (1.0 + bonus.fire_resist * config.fire_resist_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Attribute, Effect, SkillTarget, Slot};

    fn stats() -> AttributeVector {
        AttributeVector::ZERO.with(Attribute::Strength, 4.0)
    }

    fn attack(id: &str, damage: f32, range: f32) -> Skill {
        Skill::new(id, SkillTarget::Character)
            .with_damage(AttributeVector::constant(damage))
            .with_range(AttributeVector::constant(range))
    }

    #[test]
    fn weapon_value_uses_hardest_hitting_skill() {
        let sword = Item::new("sword", Slot::MainHand, 10)
            .with_skill(attack("poke", 2.0, 5.0))
            .with_skill(attack("smash", 6.0, 1.0));

        assert_eq!(weapon_value(&sword, &stats()), Some(6.0));
    }

    #[test]
    fn zero_intrinsic_power_is_not_a_weapon() {
        let stick = Item::new("stick", Slot::MainHand, 1).with_skill(attack("tap", 0.0, 1.0));
        assert!(!is_weapon(&stick, &stats()));
        assert_eq!(weapon_value(&stick, &stats()), None);
    }

    #[test]
    fn regen_ignores_draining_skills() {
        let amulet = Item::new("amulet", Slot::Neck, 5)
            .with_skill(
                Skill::new("sprint", SkillTarget::Caster)
                    .with_caster_effect(Effect::stamina(AttributeVector::constant(-3.0))),
            )
            .with_skill(
                Skill::new("breathe", SkillTarget::Caster).with_caster_effect(Effect::stamina(
                    AttributeVector::ZERO.with(Attribute::Strength, 0.5),
                )),
            );

        assert_eq!(stamina_regen(&amulet, &stats()), 2.0);
        assert_eq!(life_regen(&amulet, &stats()), 0.0);
    }

    #[test]
    fn resist_factor_weights_each_resist() {
        let plate = Item::new("plate", Slot::Body, 20).with_attributes(
            AttributeVector::ZERO
                .with(Attribute::SlashResist, 1.0)
                .with(Attribute::FireResist, 2.0),
        );

        assert_eq!(resist_factor(&plate, &ShopConfig::default()), 4.0);
    }
}
