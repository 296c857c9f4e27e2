//! The full observable game state delivered at the start of a tick.

use super::{Character, Item, LevelMap, Position, StateError};

/// One tick's worth of game state.
///
/// Rebuilt from scratch every tick; nothing here outlives the decision.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GameSnapshot {
    /// Server tick index.
    pub tick: u64,
    pub score: f32,
    pub character: Character,
    pub current_level: i32,
    pub current_position: Option<Position>,
    /// Every level the server reported, nested as `map.levels` on the wire.
    #[cfg_attr(feature = "serde", serde(rename = "map", with = "map_wire"))]
    pub levels: Vec<LevelMap>,
    pub shop_items: Vec<Item>,
}

impl GameSnapshot {
    /// The map of the level the character stands on.
    pub fn current_level_map(&self) -> Result<&LevelMap, StateError> {
        self.levels
            .iter()
            .find(|map| map.level == self.current_level)
            .ok_or(StateError::LevelNotFound {
                level: self.current_level,
            })
    }
}

/// The server wraps the level list in a `map` object.
#[cfg(feature = "serde")]
mod map_wire {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::state::LevelMap;

    #[derive(Serialize)]
    struct MapRef<'a> {
        levels: &'a [LevelMap],
    }

    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct MapOwned {
        levels: Vec<LevelMap>,
    }

    pub fn serialize<S: Serializer>(levels: &[LevelMap], serializer: S) -> Result<S::Ok, S::Error> {
        MapRef { levels }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<LevelMap>, D::Error> {
        MapOwned::deserialize(deserializer).map(|map| map.levels)
    }
}
