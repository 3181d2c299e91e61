//! Grid model for one tick.
//!
//! A read-only view of the snapshot the server sends each tick:
//! - Map with tiles (empty, walls, spawns) and diamonds
//! - Teams and their units
//! - Game constants and the published resolution order

mod map;
mod turn;
mod unit;

pub use map::{Diamond, DiamondId, GridMap, Position, TileType, UnknownTile};
pub use turn::{GameConfig, OrderLookup, Turn, TurnOrder};
pub use unit::{Team, TeamId, Unit, UnitEvents, UnitId};
