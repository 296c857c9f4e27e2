//! Commands emitted by the agent for a single tick.
//!
//! A [`CommandBatch`] carries at most one primary [`Command`] plus an optional
//! chat message. The "one primary action" rule is enforced by the type: the
//! action is a single optional enum value.

use crate::{AttributeVector, Position};

/// Use of one skill, optionally aimed at a character or a tile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SkillUse {
    pub skill_id: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub target_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<Position>,
}

impl SkillUse {
    /// Skill use without a target.
    pub fn untargeted(skill_id: impl Into<String>) -> Self {
        Self {
            skill_id: skill_id.into(),
            target_id: None,
            position: None,
        }
    }

    /// Skill use aimed at a character or monster id.
    pub fn on_target(skill_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            target_id: Some(target_id.into()),
            ..Self::untargeted(skill_id)
        }
    }

    /// Skill use aimed at a tile.
    pub fn at_position(skill_id: impl Into<String>, position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::untargeted(skill_id)
        }
    }
}

/// The primary action of a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Command {
    /// Distribute skill points across attributes.
    AssignSkillPoints(AttributeVector),
    /// Buy the listed shop item ids.
    Buy(Vec<String>),
    UseSkill(SkillUse),
    /// Move one way-point toward a tile.
    Move(Position),
}

impl Command {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::AssignSkillPoints(_) => "assign_skill_points",
            Command::Buy(_) => "buy",
            Command::UseSkill(_) => "use_skill",
            Command::Move(_) => "move",
        }
    }
}

/// Everything submitted for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CommandBatch {
    pub action: Option<Command>,
    pub yell: Option<String>,
}

impl CommandBatch {
    pub fn new(action: Command) -> Self {
        Self {
            action: Some(action),
            yell: None,
        }
    }

    /// A batch that only chats.
    pub fn yell_only(text: impl Into<String>) -> Self {
        Self {
            action: None,
            yell: Some(text.into()),
        }
    }

    #[must_use]
    pub fn with_yell(mut self, text: impl Into<String>) -> Self {
        self.yell = Some(text.into());
        self
    }

    /// True when there is nothing to submit.
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.yell.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_neither_action_nor_yell() {
        assert!(CommandBatch::default().is_empty());
        assert!(!CommandBatch::yell_only("hi").is_empty());
        assert!(!CommandBatch::new(Command::Move(Position::ORIGIN)).is_empty());
    }

    #[test]
    fn skill_use_constructors_set_one_target() {
        let on_target = SkillUse::on_target("slash", "m1");
        assert_eq!(on_target.target_id.as_deref(), Some("m1"));
        assert!(on_target.position.is_none());

        let at_tile = SkillUse::at_position("fireball", Position::new(2, 3));
        assert!(at_tile.target_id.is_none());
        assert_eq!(at_tile.position, Some(Position::new(2, 3)));
    }
}
