//! Blackboard shared by the policy nodes for one decision.
//!
//! [`AgentContext`] borrows the tick's snapshot and the agent configuration,
//! holds the map query built over them, caches the nearest hostile and the
//! chosen attack skill, and collects the decision the tree arrives at.
//!
//! # Lifetime
//!
//! The `'a` lifetime ties the context to the snapshot it was built from. A
//! context never outlives the `decide` call that created it.

use game_core::{
    AttributeVector, Character, CommandBatch, GameSnapshot, MapObject, MapQuery, Position, Skill,
};

use crate::agent::{Decision, SkipReason};
use crate::config::AgentConfig;

/// The attack skill the agent would use this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackChoice<'a> {
    pub skill: &'a Skill,
    pub damage: f32,
    /// Reach in whole tiles.
    pub range: u32,
    /// Ranking key: `damage × range`.
    pub value: f32,
}

/// Per-decision blackboard.
pub struct AgentContext<'a> {
    pub snapshot: &'a GameSnapshot,
    pub map: MapQuery<'a>,
    pub config: &'a AgentConfig,
    hostile: Option<&'a MapObject>,
    attack: Option<AttackChoice<'a>>,
    decision: Option<Decision>,
}

impl<'a> AgentContext<'a> {
    pub fn new(snapshot: &'a GameSnapshot, config: &'a AgentConfig) -> Self {
        let map = MapQuery::new(snapshot).with_decoy(&config.policy.decoy);
        let hostile = map.nearest_hostile();
        Self {
            snapshot,
            map,
            config,
            hostile,
            attack: None,
            decision: None,
        }
    }

    pub fn character(&self) -> &'a Character {
        &self.snapshot.character
    }

    /// The acting character's current attributes.
    pub fn stats(&self) -> &'a AttributeVector {
        &self.snapshot.character.attributes
    }

    pub fn position(&self) -> Option<Position> {
        self.snapshot.current_position
    }

    /// Nearest tile holding a non-decoy monster.
    pub fn hostile(&self) -> Option<&'a MapObject> {
        self.hostile
    }

    pub fn hostile_distance(&self) -> Option<u32> {
        self.hostile
            .map(|object| self.map.distance_to(object.position))
    }

    /// True when the character has not been hit for more than the configured
    /// number of ticks.
    pub fn is_quiet(&self) -> bool {
        self.character().last_damage_taken > self.config.policy.quiet_ticks
    }

    /// Equipped skills whose cost the character can pay right now.
    pub fn usable_skills(&self) -> impl Iterator<Item = &'a Skill> + use<'a> {
        let stats = self.stats();
        self.character()
            .equipment
            .skills()
            .filter(move |skill| skill.is_affordable(stats))
    }

    /// Picks and caches the strongest usable attack skill.
    ///
    /// Ties keep the first skill in equipment order.
    pub fn select_attack(&mut self) -> Option<AttackChoice<'a>> {
        let stats = self.stats();
        let mut best: Option<AttackChoice<'a>> = None;
        for skill in self.usable_skills() {
            let Some(value) = skill.attack_value(stats) else {
                continue;
            };
            if best.is_some_and(|top| value <= top.value) {
                continue;
            }
            let (Some(damage), Some(range)) = (skill.damage_with(stats), skill.range_with(stats))
            else {
                continue;
            };
            best = Some(AttackChoice {
                skill,
                damage,
                range,
                value,
            });
        }
        self.attack = best;
        best
    }

    /// The cached attack choice, if [`AgentContext::select_attack`] found one.
    pub fn attack(&self) -> Option<AttackChoice<'a>> {
        self.attack
    }

    /// Records the outcome of the decision.
    ///
    /// The first recorded decision wins; a second one indicates two action
    /// nodes succeeded in the same evaluation and is ignored.
    pub fn decide(&mut self, decision: Decision) {
        if let Some(existing) = &self.decision {
            tracing::warn!(
                "Decision already made ({:?}); ignoring {:?}",
                existing,
                decision
            );
            return;
        }
        self.decision = Some(decision);
    }

    pub fn command(&mut self, batch: CommandBatch) {
        self.decide(Decision::Command(batch));
    }

    pub fn skip(&mut self, reason: SkipReason) {
        self.decide(Decision::Skip(reason));
    }

    pub fn take_decision(self) -> Option<Decision> {
        self.decision
    }
}
