//! Read-only queries over the level the character currently stands on.
//!
//! [`MapQuery`] borrows a [`GameSnapshot`] for the duration of one decision
//! and indexes its per-tile player map once, so repeated distance and
//! line-of-sight lookups are cheap. Server-reported distances are
//! authoritative; Manhattan distance from the character's position is only a
//! fallback for tiles the server did not report.

use std::collections::HashMap;

use crate::state::{Character, GameSnapshot, LevelMap, MapObject, PlayerMapEntry, Position};

/// Distance reported for tiles that cannot be measured at all.
pub const UNREACHABLE: u32 = u32::MAX;

/// Monster name that never counts as hostile.
pub const DEFAULT_DECOY: &str = "Chest";

/// Query facade over the current level of one snapshot.
#[derive(Debug)]
pub struct MapQuery<'a> {
    snapshot: &'a GameSnapshot,
    level: Option<&'a LevelMap>,
    entries: HashMap<Position, &'a PlayerMapEntry>,
    decoy: &'a str,
}

impl<'a> MapQuery<'a> {
    pub fn new(snapshot: &'a GameSnapshot) -> Self {
        let level = snapshot.current_level_map().ok();
        let entries = level
            .map(|map| {
                map.player_map
                    .iter()
                    .map(|entry| (entry.position, entry))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            snapshot,
            level,
            entries,
            decoy: DEFAULT_DECOY,
        }
    }

    /// Overrides the monster name ignored by [`MapQuery::nearest_hostile`].
    #[must_use]
    pub fn with_decoy(mut self, decoy: &'a str) -> Self {
        self.decoy = decoy;
        self
    }

    pub fn snapshot(&self) -> &'a GameSnapshot {
        self.snapshot
    }

    /// The current level's map, if the server reported one.
    pub fn level(&self) -> Option<&'a LevelMap> {
        self.level
    }

    pub fn decoy(&self) -> &'a str {
        self.decoy
    }

    fn objects(&self) -> core::slice::Iter<'a, MapObject> {
        self.level.map_or(&[][..], |map| map.objects.as_slice()).iter()
    }

    /// Closest tile holding at least one non-decoy monster.
    ///
    /// Ties keep the first tile in map order.
    pub fn nearest_hostile(&self) -> Option<&'a MapObject> {
        self.objects()
            .filter(|object| object.first_hostile(self.decoy).is_some())
            .min_by_key(|object| self.distance_to(object.position))
    }

    /// Portal with the highest positive destination floor, else the first
    /// stairs tile.
    pub fn stairs_or_nearest_portal_up(&self) -> Option<Position> {
        let mut best: Option<(i32, Position)> = None;
        for object in self.objects() {
            let Some(portal) = object.portal else {
                continue;
            };
            let floor = best.map_or(0, |(floor, _)| floor);
            if portal.destination_floor > floor {
                best = Some((portal.destination_floor, object.position));
            }
        }

        best.map(|(_, position)| position).or_else(|| {
            self.objects()
                .find(|object| object.is_stairs)
                .map(|object| object.position)
        })
    }

    /// First spawn tile on the level.
    pub fn spawn_point(&self) -> Option<Position> {
        self.objects()
            .find(|object| object.is_spawn)
            .map(|object| object.position)
    }

    /// Distance from the character to `position`.
    ///
    /// Uses the server's player map when it covers the tile, Manhattan
    /// distance from the current position otherwise, and [`UNREACHABLE`]
    /// when neither is available.
    pub fn distance_to(&self, position: Position) -> u32 {
        if let Some(entry) = self.entries.get(&position) {
            return entry.distance;
        }
        self.snapshot
            .current_position
            .map_or(UNREACHABLE, |current| current.distance(position))
    }

    /// True only when the server marks the tile as visible.
    pub fn has_line_of_sight(&self, position: Position) -> bool {
        self.entries
            .get(&position)
            .is_some_and(|entry| entry.line_of_sight)
    }

    /// Every other player on the level, with the tile they stand on.
    pub fn others_on_level(&self) -> Vec<(Position, &'a Character)> {
        let own_id = self.snapshot.character.id.as_str();
        self.objects()
            .flat_map(|object| {
                object
                    .players
                    .iter()
                    .filter(move |player| player.id != own_id)
                    .map(move |player| (object.position, player))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Monster, PlayerMapEntry};

    fn snapshot(level: LevelMap, at: Option<Position>) -> GameSnapshot {
        let mut snapshot = GameSnapshot {
            current_level: level.level,
            current_position: at,
            ..GameSnapshot::default()
        };
        snapshot.character.id = "me".into();
        snapshot.levels.push(level);
        snapshot
    }

    #[test]
    fn nearest_hostile_skips_decoys() {
        let level = LevelMap::new(1)
            .with_object(
                MapObject::at(Position::new(1, 0)).with_monster(Monster::new("c", DEFAULT_DECOY)),
            )
            .with_object(MapObject::at(Position::new(4, 0)).with_monster(Monster::new("g", "Goblin")));
        let snapshot = snapshot(level, Some(Position::ORIGIN));
        let query = MapQuery::new(&snapshot);

        let hostile = query.nearest_hostile().map(|object| object.position);
        assert_eq!(hostile, Some(Position::new(4, 0)));
    }

    #[test]
    fn nearest_hostile_prefers_server_distance() {
        let level = LevelMap::new(1)
            .with_object(MapObject::at(Position::new(1, 0)).with_monster(Monster::new("a", "Rat")))
            .with_object(MapObject::at(Position::new(3, 0)).with_monster(Monster::new("b", "Bat")))
            .with_entry(PlayerMapEntry::new(Position::new(1, 0), 9, true))
            .with_entry(PlayerMapEntry::new(Position::new(3, 0), 3, true));
        let snapshot = snapshot(level, Some(Position::ORIGIN));
        let query = MapQuery::new(&snapshot);

        assert_eq!(
            query.nearest_hostile().map(|object| object.position),
            Some(Position::new(3, 0))
        );
    }

    #[test]
    fn nearest_hostile_ties_keep_first() {
        let level = LevelMap::new(1)
            .with_object(MapObject::at(Position::new(0, 2)).with_monster(Monster::new("a", "Rat")))
            .with_object(MapObject::at(Position::new(2, 0)).with_monster(Monster::new("b", "Bat")));
        let snapshot = snapshot(level, Some(Position::ORIGIN));

        assert_eq!(
            MapQuery::new(&snapshot)
                .nearest_hostile()
                .map(|object| object.position),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn highest_portal_beats_stairs() {
        let level = LevelMap::new(2)
            .with_object(MapObject::at(Position::new(5, 5)).stairs())
            .with_object(MapObject::at(Position::new(1, 1)).with_portal(4))
            .with_object(MapObject::at(Position::new(2, 2)).with_portal(7))
            .with_object(MapObject::at(Position::new(3, 3)).with_portal(7));
        let snapshot = snapshot(level, None);

        assert_eq!(
            MapQuery::new(&snapshot).stairs_or_nearest_portal_up(),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn portals_down_fall_back_to_stairs() {
        let level = LevelMap::new(2)
            .with_object(MapObject::at(Position::new(1, 1)).with_portal(0))
            .with_object(MapObject::at(Position::new(5, 5)).stairs());
        let snapshot = snapshot(level, None);
        let query = MapQuery::new(&snapshot);

        assert_eq!(query.stairs_or_nearest_portal_up(), Some(Position::new(5, 5)));
        assert_eq!(query.spawn_point(), None);
    }

    #[test]
    fn distance_falls_back_to_manhattan_then_sentinel() {
        let level = LevelMap::new(1).with_entry(PlayerMapEntry::new(Position::new(3, 4), 12, false));
        let located = snapshot(level.clone(), Some(Position::ORIGIN));
        let query = MapQuery::new(&located);
        assert_eq!(query.distance_to(Position::new(3, 4)), 12);
        assert_eq!(query.distance_to(Position::new(1, 1)), 2);

        let lost = snapshot(level, None);
        assert_eq!(MapQuery::new(&lost).distance_to(Position::new(1, 1)), UNREACHABLE);
    }

    #[test]
    fn line_of_sight_requires_server_entry() {
        let level = LevelMap::new(1)
            .with_entry(PlayerMapEntry::new(Position::new(1, 0), 1, true))
            .with_entry(PlayerMapEntry::new(Position::new(2, 0), 2, false));
        let snapshot = snapshot(level, Some(Position::ORIGIN));
        let query = MapQuery::new(&snapshot);

        assert!(query.has_line_of_sight(Position::new(1, 0)));
        assert!(!query.has_line_of_sight(Position::new(2, 0)));
        assert!(!query.has_line_of_sight(Position::new(0, 1)));
    }

    #[test]
    fn others_exclude_self() {
        let level = LevelMap::new(1).with_object(
            MapObject::at(Position::new(2, 2))
                .with_player(Character::new("me"))
                .with_player(Character::new("friend")),
        );
        let snapshot = snapshot(level, None);

        let others: Vec<_> = MapQuery::new(&snapshot)
            .others_on_level()
            .into_iter()
            .map(|(position, player)| (position, player.id.clone()))
            .collect();
        assert_eq!(others, vec![(Position::new(2, 2), "friend".to_string())]);
    }

    #[test]
    fn missing_level_yields_nothing() {
        let mut snapshot = snapshot(LevelMap::new(1).with_object(MapObject::at(Position::ORIGIN).spawn()), None);
        snapshot.current_level = 3;
        let query = MapQuery::new(&snapshot);

        assert!(query.level().is_none());
        assert!(query.nearest_hostile().is_none());
        assert!(query.spawn_point().is_none());
    }
}
