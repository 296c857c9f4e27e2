//! Skills granted by items and the effects they apply.
//!
//! Every optional formula on a [`Skill`] is an `Option`: an absent formula
//! means the skill cannot serve that purpose at all, which is different from a
//! formula that evaluates to zero. The evaluation helpers reflect this by
//! returning `None` for absent formulas.

use crate::AttributeVector;

/// What a skill is aimed at when used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum SkillTarget {
    /// Used without any target.
    #[default]
    None,
    /// Applies to the user.
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Caster,
    /// Aimed at a character or monster by id.
    Character,
    /// Aimed at a tile.
    Position,
}

/// Resource changes applied to one side of a skill use.
///
/// Each formula is evaluated against the caster's stats. On the wire the
/// formulas sit under an `attributes` object.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EffectWire", into = "EffectWire"))]
pub struct Effect {
    pub life: Option<AttributeVector>,
    pub stamina: Option<AttributeVector>,
    pub mana: Option<AttributeVector>,
}

impl Effect {
    pub fn life(formula: AttributeVector) -> Self {
        Self {
            life: Some(formula),
            ..Self::default()
        }
    }

    pub fn stamina(formula: AttributeVector) -> Self {
        Self {
            stamina: Some(formula),
            ..Self::default()
        }
    }

    pub fn mana(formula: AttributeVector) -> Self {
        Self {
            mana: Some(formula),
            ..Self::default()
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct EffectWire {
    attributes: EffectFormulas,
}

#[cfg(feature = "serde")]
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct EffectFormulas {
    #[serde(skip_serializing_if = "Option::is_none")]
    life: Option<AttributeVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stamina: Option<AttributeVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mana: Option<AttributeVector>,
}

#[cfg(feature = "serde")]
impl From<EffectWire> for Effect {
    fn from(wire: EffectWire) -> Self {
        let EffectFormulas {
            life,
            stamina,
            mana,
        } = wire.attributes;
        Self {
            life,
            stamina,
            mana,
        }
    }
}

#[cfg(feature = "serde")]
impl From<Effect> for EffectWire {
    fn from(effect: Effect) -> Self {
        Self {
            attributes: EffectFormulas {
                life: effect.life,
                stamina: effect.stamina,
                mana: effect.mana,
            },
        }
    }
}

/// A usable skill.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Resources that must be available to use the skill.
    pub cost: AttributeVector,
    pub target: SkillTarget,
    #[cfg_attr(feature = "serde", serde(rename = "damageAmount"))]
    pub damage: Option<AttributeVector>,
    pub range: Option<AttributeVector>,
    #[cfg_attr(feature = "serde", serde(rename = "casterEffects"))]
    pub caster_effect: Option<Effect>,
    #[cfg_attr(feature = "serde", serde(rename = "targetEffects"))]
    pub target_effect: Option<Effect>,
}

impl Skill {
    pub fn new(id: impl Into<String>, target: SkillTarget) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            target,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: AttributeVector) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: AttributeVector) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: AttributeVector) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_caster_effect(mut self, effect: Effect) -> Self {
        self.caster_effect = Some(effect);
        self
    }

    #[must_use]
    pub fn with_target_effect(mut self, effect: Effect) -> Self {
        self.target_effect = Some(effect);
        self
    }

    /// True when `stats` cover the skill's cost.
    pub fn is_affordable(&self, stats: &AttributeVector) -> bool {
        stats.meets(&self.cost)
    }

    /// True when using the skill changes the caster's mana by a negative amount.
    pub fn drains_mana(&self, stats: &AttributeVector) -> bool {
        self.caster_effect
            .as_ref()
            .and_then(|effect| effect.mana.as_ref())
            .is_some_and(|formula| stats.dot(formula) < 0.0)
    }

    /// Damage dealt with the given stats, if the skill deals damage.
    pub fn damage_with(&self, stats: &AttributeVector) -> Option<f32> {
        self.damage.as_ref().map(|formula| stats.dot(formula))
    }

    /// Effective range in whole tiles, truncated toward zero and floored at 0.
    pub fn range_with(&self, stats: &AttributeVector) -> Option<u32> {
        self.range
            .as_ref()
            .map(|formula| stats.dot(formula).max(0.0) as u32)
    }

    /// True for skills that can attack a hostile: character-targeted, with both
    /// damage and range formulas, and not draining the caster's mana.
    pub fn is_attack(&self, stats: &AttributeVector) -> bool {
        self.target == SkillTarget::Character
            && self.damage.is_some()
            && self.range.is_some()
            && !self.drains_mana(stats)
    }

    /// `damage × range` for attack skills, `None` otherwise.
    pub fn attack_value(&self, stats: &AttributeVector) -> Option<f32> {
        if !self.is_attack(stats) {
            return None;
        }
        Some(self.damage_with(stats)? * self.range_with(stats)? as f32)
    }

    /// Stamina the caster regains from the skill.
    pub fn stamina_restore(&self, stats: &AttributeVector) -> Option<f32> {
        self.caster_formula(|effect| effect.stamina.as_ref())
            .map(|formula| stats.dot(formula))
    }

    /// Mana the caster regains from the skill.
    pub fn mana_restore(&self, stats: &AttributeVector) -> Option<f32> {
        self.caster_formula(|effect| effect.mana.as_ref())
            .map(|formula| stats.dot(formula))
    }

    /// Life restored by the skill when used on oneself.
    ///
    /// Considers the caster effect and, for skills that may target the user,
    /// the target effect; the larger of the two wins.
    pub fn life_restore(&self, stats: &AttributeVector) -> Option<f32> {
        let caster = self
            .caster_formula(|effect| effect.life.as_ref())
            .map(|formula| stats.dot(formula));
        let target = match self.target {
            SkillTarget::Caster | SkillTarget::Character => self
                .target_effect
                .as_ref()
                .and_then(|effect| effect.life.as_ref())
                .map(|formula| stats.dot(formula)),
            SkillTarget::None | SkillTarget::Position => None,
        };

        match (caster, target) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    fn caster_formula<'a>(
        &'a self,
        pick: impl Fn(&'a Effect) -> Option<&'a AttributeVector>,
    ) -> Option<&'a AttributeVector> {
        self.caster_effect.as_ref().and_then(pick)
    }
}
