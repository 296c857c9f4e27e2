//! Characters and their equipment.
//!
//! Equipment stores the items a character wears. Items provide:
//! - Static attribute bonuses (already folded into the server's attributes)
//! - The skills available to the character

use super::{Coordinates, Item, Skill, Slot, SlotSet, StateError};
use crate::AttributeVector;

/// Items currently equipped by a character, at most one per [`Slot`].
///
/// The one-item-per-slot invariant is enforced on construction, including
/// when deserializing a snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Item>", into = "Vec<Item>")
)]
pub struct Equipment {
    items: Vec<Item>,
}

impl Equipment {
    /// Builds equipment from a list of items, rejecting duplicate slots.
    pub fn from_items(items: Vec<Item>) -> Result<Self, StateError> {
        let mut occupied = SlotSet::empty();
        for item in &items {
            if occupied.occupied(item.slot) {
                return Err(StateError::DuplicateSlot {
                    slot: item.slot,
                    item: item.id.clone(),
                });
            }
            occupied = occupied.with(item.slot);
        }
        Ok(Self { items })
    }

    /// The item in `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&Item> {
        self.items.iter().find(|item| item.slot == slot)
    }

    /// The primary-hand weapon, if any.
    pub fn main_hand(&self) -> Option<&Item> {
        self.get(Slot::MainHand)
    }

    /// All skills granted by equipped items, in equip order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.items.iter().flat_map(|item| item.skills.iter())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<Item>> for Equipment {
    type Error = StateError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Equipment> for Vec<Item> {
    fn from(equipment: Equipment) -> Self {
        equipment.items
    }
}

/// A player character: the acting agent or another player on the map.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Current attributes, including resource pools (life, stamina, mana).
    pub attributes: AttributeVector,
    pub max_attributes: AttributeVector,
    pub skill_points: f32,
    pub money: u32,
    /// Ticks since the character last took damage.
    pub last_damage_taken: i32,
    pub coordinates: Coordinates,
    #[cfg_attr(feature = "serde", serde(rename = "equip"))]
    pub equipment: Equipment,
}

impl Character {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Self::default()
        }
    }

    /// True when the primary-hand slot is empty.
    pub fn is_unarmed(&self) -> bool {
        self.equipment.main_hand().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_items_rejects_duplicate_slot() {
        let items = vec![
            Item::new("sword", Slot::MainHand, 10),
            Item::new("helm", Slot::Head, 5),
            Item::new("axe", Slot::MainHand, 12),
        ];

        let err = Equipment::from_items(items).unwrap_err();
        assert_eq!(
            err,
            StateError::DuplicateSlot {
                slot: Slot::MainHand,
                item: "axe".into(),
            }
        );
    }

    #[test]
    fn unarmed_without_main_hand() {
        let mut character = Character::new("hero");
        assert!(character.is_unarmed());

        let shield = Item::new("shield", Slot::OffHand, 4);
        character.equipment = Equipment::from_items(vec![shield.clone()]).unwrap();
        assert!(character.is_unarmed());

        let sword = Item::new("sword", Slot::MainHand, 10);
        character.equipment = Equipment::from_items(vec![shield, sword]).unwrap();
        assert!(!character.is_unarmed());
        assert_eq!(character.equipment.len(), 2);
        assert_eq!(
            character.equipment.main_hand().map(|item| item.id.as_str()),
            Some("sword")
        );
    }
}
