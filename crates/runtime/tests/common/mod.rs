//! Snapshot fixtures shared by the integration tests.
#![allow(dead_code)]

use game_core::{
    Attribute, AttributeVector, Character, Coordinates, Effect, Equipment, GameSnapshot, Item,
    LevelMap, MapObject, Monster, PlayerMapEntry, Position, Skill, SkillTarget, Slot,
};

pub const HERO: &str = "hero";

pub fn full_stats() -> AttributeVector {
    AttributeVector::ZERO
        .with(Attribute::Strength, 10.0)
        .with(Attribute::Life, 150.0)
        .with(Attribute::Stamina, 100.0)
        .with(Attribute::Mana, 50.0)
}

/// Character-targeted attack reaching two tiles.
pub fn slash() -> Skill {
    Skill::new("slash", SkillTarget::Character)
        .with_cost(AttributeVector::ZERO.with(Attribute::Stamina, 5.0))
        .with_damage(AttributeVector::constant(5.0).with(Attribute::Strength, 1.0))
        .with_range(AttributeVector::constant(2.0))
}

pub fn breathe() -> Skill {
    Skill::new("breathe", SkillTarget::Caster)
        .with_caster_effect(Effect::stamina(AttributeVector::constant(10.0)))
}

pub fn mend() -> Skill {
    Skill::new("mend", SkillTarget::Character)
        .with_cost(AttributeVector::ZERO.with(Attribute::Mana, 5.0))
        .with_target_effect(Effect::life(AttributeVector::constant(20.0)))
}

pub fn sword() -> Item {
    Item::new("sword", Slot::MainHand, 30).with_skill(slash())
}

pub fn charm() -> Item {
    Item::new("charm", Slot::Neck, 10)
        .with_skill(breathe())
        .with_skill(mend())
}

pub fn hero(items: Vec<Item>) -> Character {
    let mut hero = Character::new(HERO);
    hero.attributes = full_stats();
    hero.max_attributes = full_stats();
    hero.coordinates = Coordinates::new(1, Position::ORIGIN);
    hero.equipment = Equipment::from_items(items).expect("fixture slots are distinct");
    hero
}

pub fn armed_hero() -> Character {
    hero(vec![sword(), charm()])
}

pub fn snapshot(character: Character, level: LevelMap) -> GameSnapshot {
    GameSnapshot {
        tick: 1,
        score: 0.0,
        current_level: level.level,
        current_position: Some(character.coordinates.position),
        character,
        levels: vec![level],
        shop_items: Vec::new(),
    }
}

/// Level with stairs far away and nothing else.
pub fn quiet_level(level: i32) -> LevelMap {
    LevelMap::new(level).with_object(MapObject::at(Position::new(8, 8)).stairs())
}

/// Adds a goblin at `position` with the given server distance and sight.
pub fn with_goblin(level: LevelMap, position: Position, distance: u32, sight: bool) -> LevelMap {
    level
        .with_object(MapObject::at(position).with_monster(Monster::new("gob", "Goblin")))
        .with_entry(PlayerMapEntry::new(position, distance, sight))
}
