//! Derived read-only facts about a snapshot.
//!
//! Everything here is a pure query over a [`Turn`]: who stands next to whom,
//! who is nearest by path, who holds which diamond, who can be lassoed, and
//! what the published resolution order says about the coming ticks.

mod lasso;
mod order;

use crate::error::GridError;
use crate::game::{Diamond, Position, TileType, Turn, Unit};
use crate::pathfinder::{Walkability, shortest_path};

/// The closest enemy by path distance.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContact<'a> {
    /// The enemy unit.
    pub enemy: &'a Unit,
    /// Where the enemy stands.
    pub position: Position,
    /// Steps between the enemy and the querying tile.
    pub distance: u32,
    /// The querying unit's first step toward the enemy.
    pub next_step: Position,
}

/// Query interface over one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Tactics<'a> {
    turn: &'a Turn,
}

impl<'a> Tactics<'a> {
    /// Create queries over a snapshot.
    #[must_use]
    pub const fn new(turn: &'a Turn) -> Self {
        Self { turn }
    }

    /// The snapshot being queried.
    #[must_use]
    pub const fn turn(&self) -> &'a Turn {
        self.turn
    }

    /// Live enemies with their positions, in team then unit order.
    pub fn live_enemies(&self) -> impl Iterator<Item = (&'a Unit, Position)> + use<'a> {
        self.turn
            .live_enemies()
            .filter_map(|u| u.live_position().map(|p| (u, p)))
    }

    /// The live unit standing on a tile, if any.
    #[must_use]
    pub fn unit_at(&self, position: Position) -> Option<&'a Unit> {
        self.turn
            .all_units()
            .find(|u| u.live_position() == Some(position))
    }

    /// Whether a live unit stands on a tile.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.unit_at(position).is_some()
    }

    /// First enemy standing orthogonally next to `position`.
    ///
    /// Neighbours are scanned −x, +x, −y, +y. Both tiles must be empty
    /// ground: nobody fights from or onto a spawn tile.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `position` lies outside the map.
    pub fn adjacent_enemy(&self, position: Position) -> Result<Option<&'a Unit>, GridError> {
        let map = &self.turn.map;
        if map.tile(position)? != TileType::Empty {
            return Ok(None);
        }

        for neighbor in position.surroundings() {
            if !map.is_tile(neighbor, TileType::Empty) {
                continue;
            }
            if let Some((enemy, _)) = self.live_enemies().find(|&(_, p)| p == neighbor) {
                return Ok(Some(enemy));
            }
        }

        Ok(None)
    }

    /// The enemy with the shortest path to `from`.
    ///
    /// One search is rooted at each live enemy with `from` as the goal, in
    /// no-spawn mode. Ties go to the enemy listed first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if an enemy stands outside the map.
    pub fn nearest_enemy(&self, from: Position) -> Result<Option<EnemyContact<'a>>, GridError> {
        let map = &self.turn.map;
        let mut best: Option<EnemyContact<'a>> = None;

        for (enemy, position) in self.live_enemies() {
            let route = shortest_path(
                map,
                position,
                |p| p == from,
                |p| p == from || Walkability::NO_SPAWN.allows(map, p),
            )?;
            let Some(route) = route else {
                continue;
            };
            if best.is_none_or(|b| route.distance < b.distance) {
                best = Some(EnemyContact {
                    enemy,
                    position,
                    distance: route.distance,
                    next_step: route.step_before_goal(),
                });
            }
        }

        Ok(best)
    }

    /// The unit carrying a diamond, if any.
    ///
    /// A holder stands on the diamond's tile with its diamond flag set.
    #[must_use]
    pub fn diamond_holder(&self, diamond: &Diamond) -> Option<&'a Unit> {
        self.turn
            .all_units()
            .find(|u| u.has_diamond && u.live_position() == Some(diamond.position))
    }

    /// The diamond a unit carries.
    ///
    /// Looked up by the unit's diamond id, falling back to its tile.
    #[must_use]
    pub fn held_diamond(&self, unit: &Unit) -> Option<&'a Diamond> {
        if !unit.has_diamond {
            return None;
        }
        let map = &self.turn.map;
        unit.diamond_id
            .as_deref()
            .and_then(|id| map.diamond(id))
            .or_else(|| unit.live_position().and_then(|p| map.diamond_at(p)))
    }

    /// Orthogonal neighbours a unit could step onto, in −x, +x, −y, +y order.
    ///
    /// A neighbour qualifies when it is inside the map, not a wall, and not
    /// occupied by a live unit.
    #[must_use]
    pub fn free_neighbors(&self, position: Position) -> Vec<Position> {
        let map = &self.turn.map;
        position
            .surroundings()
            .into_iter()
            .filter(|&p| map.is_open(p) && !self.is_occupied(p))
            .collect()
    }
}
