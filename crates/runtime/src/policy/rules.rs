//! The ordered rule list, expressed as a behavior tree.
//!
//! ```text
//! Selector
//!   ├─ spend skill points
//!   ├─ initial shopping
//!   └─ Sequence
//!        ├─ (optional) select attack skill
//!        └─ Selector
//!             ├─ rest
//!             ├─ heal
//!             ├─ engage   (attack | chase | retreat)
//!             └─ progress (wait for party | stairs | ask for stairs)
//! ```
//!
//! The first rule whose guards all hold records the decision.

use behavior_tree::BoxedBehavior;
use behavior_tree::builder::{always_succeed, inverter, node, selector, sequence};

use super::actions::*;
use super::conditions::*;
use crate::policy::AgentContext;

/// Builds the policy tree for one decision.
pub fn policy_tree<'a>() -> BoxedBehavior<'a, AgentContext<'a>> {
    selector(vec![
        spend_skill_points(),
        initial_shopping(),
        sequence(vec![
            always_succeed(node(SelectAttackSkill)),
            selector(vec![rest(), heal(), engage(), progress()]),
        ]),
    ])
}

fn spend_skill_points<'a>() -> BoxedBehavior<'a, AgentContext<'a>> {
    sequence(vec![node(HasSkillPoints), node(AssignSkillPoints)])
}

fn initial_shopping<'a>() -> BoxedBehavior<'a, AgentContext<'a>> {
    sequence(vec![node(IsUnarmed), node(OnEntryLevel), node(ShopForLoadout)])
}

fn rest<'a>() -> BoxedBehavior<'a, AgentContext<'a>> {
    sequence(vec![
        node(NeedsRest),
        node(IsQuiet),
        inverter(node(HostileInAttackRange)),
        node(UseRestSkill),
    ])
}

fn heal<'a>() -> BoxedBehavior<'a, AgentContext<'a>> {
    sequence(vec![
        node(LifeBelowThreshold),
        node(IsQuiet),
        node(HostileOutsideSafeRadius),
        node(UseHealSkill),
    ])
}

fn engage<'a>() -> BoxedBehavior<'a, AgentContext<'a>> {
    sequence(vec![
        node(HasHostile),
        selector(vec![
            sequence(vec![
                node(HasAttackSkill),
                node(HostileInAttackRange),
                node(HostileInSight),
                node(AttackHostile),
            ]),
            sequence(vec![node(HasAttackSkill), node(MoveTowardHostile)]),
            node(RetreatToSpawn),
        ]),
    ])
}

fn progress<'a>() -> BoxedBehavior<'a, AgentContext<'a>> {
    selector(vec![
        sequence(vec![
            node(AtStairsOnDeeperLevel),
            node(PartyLagging),
            node(WaitForParty),
        ]),
        node(MoveTowardStairs),
        node(AskForStairs),
    ])
}
