//! Level map objects as reported by the server.

use super::{Character, Position};

/// A monster occupying a tile.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Monster {
    pub id: String,
    pub name: String,
}

impl Monster {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Portal leading to another level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Portal {
    pub destination_floor: i32,
}

/// Everything present on a single tile.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct MapObject {
    pub position: Position,
    pub monsters: Vec<Monster>,
    pub players: Vec<Character>,
    pub is_stairs: bool,
    pub is_spawn: bool,
    pub portal: Option<Portal>,
}

impl MapObject {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monsters.push(monster);
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: Character) -> Self {
        self.players.push(player);
        self
    }

    #[must_use]
    pub fn stairs(mut self) -> Self {
        self.is_stairs = true;
        self
    }

    #[must_use]
    pub fn spawn(mut self) -> Self {
        self.is_spawn = true;
        self
    }

    #[must_use]
    pub fn with_portal(mut self, destination_floor: i32) -> Self {
        self.portal = Some(Portal { destination_floor });
        self
    }

    /// First monster on the tile whose name is not `decoy`.
    pub fn first_hostile(&self, decoy: &str) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.name != decoy)
    }
}

/// Server-computed distance and visibility of a tile from the acting character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerMapEntry {
    pub position: Position,
    pub distance: u32,
    pub line_of_sight: bool,
}

impl PlayerMapEntry {
    pub const fn new(position: Position, distance: u32, line_of_sight: bool) -> Self {
        Self {
            position,
            distance,
            line_of_sight,
        }
    }
}

/// Objects and player-relative tile table for one level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LevelMap {
    pub level: i32,
    pub objects: Vec<MapObject>,
    pub player_map: Vec<PlayerMapEntry>,
}

impl LevelMap {
    pub fn new(level: i32) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_object(mut self, object: MapObject) -> Self {
        self.objects.push(object);
        self
    }

    #[must_use]
    pub fn with_entry(mut self, entry: PlayerMapEntry) -> Self {
        self.player_map.push(entry);
        self
    }
}
