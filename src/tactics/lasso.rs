//! Line-of-sight checks for vines.

use crate::error::GridError;
use crate::game::{Position, TileType, Unit};
use crate::tactics::Tactics;

/// Tiles strictly between two aligned positions, walking from `from` to `to`.
///
/// Returns nothing for positions that share neither a row nor a column.
fn tiles_between(from: Position, to: Position) -> Vec<Position> {
    if from == to || !from.is_aligned_with(to) {
        return Vec::new();
    }
    let dx = (to.x - from.x).signum();
    let dy = (to.y - from.y).signum();
    let mut tiles = Vec::new();
    let mut current = from.offset(dx, dy);
    while current != to {
        tiles.push(current);
        current = current.offset(dx, dy);
    }
    tiles
}

impl<'a> Tactics<'a> {
    /// Whether every tile strictly between two aligned positions is empty
    /// ground without a diamond.
    fn line_is_clear(&self, from: Position, to: Position) -> Result<bool, GridError> {
        let map = &self.turn.map;
        for tile in tiles_between(from, to) {
            if map.tile(tile)? != TileType::Empty || map.has_diamond_at(tile) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Enemies `unit` could vine this tick.
    ///
    /// A target shares a row or column with the unit, both stand on empty
    /// ground, and nothing but empty, diamond-free ground lies between them.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if a unit stands outside the map.
    pub fn can_lasso(&self, unit: &Unit) -> Result<Vec<&'a Unit>, GridError> {
        let Some(from) = unit.live_position() else {
            return Ok(Vec::new());
        };
        let map = &self.turn.map;
        if map.tile(from)? != TileType::Empty {
            return Ok(Vec::new());
        }

        let mut targets = Vec::new();
        for (enemy, position) in self.live_enemies() {
            if position == from || !from.is_aligned_with(position) {
                continue;
            }
            if map.tile(position)? != TileType::Empty {
                continue;
            }
            if self.line_is_clear(from, position)? {
                targets.push(enemy);
            }
        }
        Ok(targets)
    }

    /// Whether an enemy could immobilize `unit` next tick.
    ///
    /// True when an enemy off a spawn tile shares a row or column with the
    /// unit, closer than `range`, with only empty ground between them.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if a unit stands outside the map.
    pub fn in_lasso_danger(&self, unit: &Unit, range: u32) -> Result<bool, GridError> {
        let Some(from) = unit.live_position() else {
            return Ok(false);
        };
        let map = &self.turn.map;

        for (_, position) in self.live_enemies() {
            if position == from || !from.is_aligned_with(position) {
                continue;
            }
            if from.manhattan(position) >= range {
                continue;
            }
            if map.tile(position)? == TileType::Spawn {
                continue;
            }
            let mut clear = true;
            for tile in tiles_between(from, position) {
                if map.tile(tile)? != TileType::Empty {
                    clear = false;
                    break;
                }
            }
            if clear {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Diamond, GridMap, Team, Turn};

    fn line_turn(width: usize, us: Position, enemies: &[Position]) -> Turn {
        let map = GridMap::new(width, 3).unwrap();
        let mut turn = Turn::new(0, 100, "us", map);
        turn.teams
            .push(Team::new("us", "Us").with_unit(Unit::new("u1", "us").spawned_at(us)));
        let mut them = Team::new("them", "Them");
        for (i, &p) in enemies.iter().enumerate() {
            them = them.with_unit(Unit::new(format!("e{i}"), "them").spawned_at(p));
        }
        turn.teams.push(them);
        turn
    }

    #[test]
    fn test_tiles_between() {
        assert_eq!(
            tiles_between(Position::new(0, 0), Position::new(3, 0)),
            vec![Position::new(1, 0), Position::new(2, 0)]
        );
        assert_eq!(
            tiles_between(Position::new(0, 3), Position::new(0, 1)),
            vec![Position::new(0, 2)]
        );
        assert!(tiles_between(Position::new(0, 0), Position::new(1, 0)).is_empty());
        assert!(tiles_between(Position::new(0, 0), Position::new(1, 1)).is_empty());
    }

    #[test]
    fn test_can_lasso_clear_row() {
        let turn = line_turn(6, Position::new(0, 1), &[Position::new(5, 1)]);
        let tactics = Tactics::new(&turn);
        let targets = tactics.can_lasso(&turn.teams[0].units[0]).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, "e0");
    }

    #[test]
    fn test_can_lasso_blocked_by_wall_or_diamond() {
        let mut turn = line_turn(6, Position::new(0, 1), &[Position::new(5, 1)]);
        turn.map.set(Position::new(3, 1), TileType::Wall).unwrap();
        let tactics = Tactics::new(&turn);
        assert!(tactics.can_lasso(&turn.teams[0].units[0]).unwrap().is_empty());

        let mut turn = line_turn(6, Position::new(0, 1), &[Position::new(5, 1)]);
        turn.map
            .add_diamond(Diamond::new("d", Position::new(2, 1), 1))
            .unwrap();
        let tactics = Tactics::new(&turn);
        assert!(tactics.can_lasso(&turn.teams[0].units[0]).unwrap().is_empty());
    }

    #[test]
    fn test_can_lasso_target_on_spawn() {
        let mut turn = line_turn(6, Position::new(0, 1), &[Position::new(5, 1)]);
        turn.map.set(Position::new(5, 1), TileType::Spawn).unwrap();
        let tactics = Tactics::new(&turn);
        assert!(tactics.can_lasso(&turn.teams[0].units[0]).unwrap().is_empty());
    }

    #[test]
    fn test_can_lasso_ignores_unaligned() {
        let turn = line_turn(6, Position::new(0, 1), &[Position::new(4, 2)]);
        let tactics = Tactics::new(&turn);
        assert!(tactics.can_lasso(&turn.teams[0].units[0]).unwrap().is_empty());
    }

    #[test]
    fn test_lasso_danger_adjacent() {
        let turn = line_turn(6, Position::new(2, 1), &[Position::new(3, 1)]);
        let tactics = Tactics::new(&turn);
        assert!(tactics.in_lasso_danger(&turn.teams[0].units[0], 2).unwrap());
    }

    #[test]
    fn test_lasso_danger_out_of_range() {
        let turn = line_turn(6, Position::new(0, 1), &[Position::new(3, 1)]);
        let tactics = Tactics::new(&turn);
        assert!(!tactics.in_lasso_danger(&turn.teams[0].units[0], 2).unwrap());
        assert!(tactics.in_lasso_danger(&turn.teams[0].units[0], 4).unwrap());
    }

    #[test]
    fn test_lasso_danger_enemy_on_spawn() {
        let mut turn = line_turn(6, Position::new(2, 1), &[Position::new(3, 1)]);
        turn.map.set(Position::new(3, 1), TileType::Spawn).unwrap();
        let tactics = Tactics::new(&turn);
        assert!(!tactics.in_lasso_danger(&turn.teams[0].units[0], 2).unwrap());
    }
}
