//! Snapshot state representation.
//!
//! These types mirror what the server reports each tick: the acting
//! character with its equipment, the map of every known level, and the shop
//! catalogue. They carry no behavior beyond construction helpers, invariant
//! checks, and pure evaluation of skill formulas.
pub mod character;
pub mod common;
pub mod error;
pub mod item;
pub mod map;
pub mod skill;
pub mod snapshot;

pub use character::{Character, Equipment};
pub use common::{Coordinates, Position};
pub use error::StateError;
pub use item::{Item, Slot, SlotSet};
pub use map::{LevelMap, MapObject, Monster, PlayerMapEntry, Portal};
pub use skill::{Effect, Skill, SkillTarget};
pub use snapshot::GameSnapshot;
