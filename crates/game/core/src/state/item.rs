//! Shop and equipment items.

use bitflags::bitflags;

use super::Skill;
use crate::AttributeVector;

/// Equip location. A character holds at most one item per slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    Head,
    MainHand,
    OffHand,
    Body,
    Legs,
    Neck,
}

impl Slot {
    /// Number of distinct slots, and therefore the largest possible loadout.
    pub const COUNT: usize = 6;

    /// Single-bit mask for this slot.
    pub const fn mask(self) -> SlotSet {
        match self {
            Slot::Head => SlotSet::HEAD,
            Slot::MainHand => SlotSet::MAIN_HAND,
            Slot::OffHand => SlotSet::OFF_HAND,
            Slot::Body => SlotSet::BODY,
            Slot::Legs => SlotSet::LEGS,
            Slot::Neck => SlotSet::NECK,
        }
    }
}

bitflags! {
    /// Set of occupied slots, used for O(1) disjointness checks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SlotSet: u8 {
        const HEAD      = 1 << 0;
        const MAIN_HAND = 1 << 1;
        const OFF_HAND  = 1 << 2;
        const BODY      = 1 << 3;
        const LEGS      = 1 << 4;
        const NECK      = 1 << 5;
    }
}

impl SlotSet {
    /// True when `slot` is already taken.
    #[inline]
    pub fn occupied(self, slot: Slot) -> bool {
        self.contains(slot.mask())
    }

    /// Returns the set with `slot` added.
    #[inline]
    #[must_use]
    pub fn with(self, slot: Slot) -> Self {
        self | slot.mask()
    }
}

/// An item offered by the shop or equipped by a character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Item {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub slot: Slot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    /// Minimum stats needed to buy and use the item.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: AttributeVector,
    /// Static bonus granted while equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: AttributeVector,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,
}

impl Item {
    pub fn new(id: impl Into<String>, slot: Slot, price: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            slot,
            price,
            requirements: AttributeVector::ZERO,
            attributes: AttributeVector::ZERO,
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_requirements(mut self, requirements: AttributeVector) -> Self {
        self.requirements = requirements;
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeVector) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }
}
