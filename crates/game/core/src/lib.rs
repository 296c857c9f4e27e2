//! Pure data model and queries shared by the agent and its transport.
//!
//! `game-core` defines the attribute algebra, the snapshot state reported by
//! the server each tick, the commands the agent can send back, and read-only
//! map queries. Nothing here performs I/O; the runtime crate builds its
//! decisions on top of the types re-exported here.
pub mod attributes;
pub mod command;
pub mod error;
pub mod query;
pub mod state;

pub use attributes::{Attribute, AttributeVector};
pub use command::{Command, CommandBatch, SkillUse};
pub use error::{ErrorSeverity, GameError};
pub use query::{DEFAULT_DECOY, MapQuery, UNREACHABLE};
pub use state::{
    Character, Coordinates, Effect, Equipment, GameSnapshot, Item, LevelMap, MapObject, Monster,
    PlayerMapEntry, Portal, Position, Skill, SkillTarget, Slot, SlotSet, StateError,
};
