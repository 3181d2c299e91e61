//! Uniform-cost shortest-path search over the grid.
//!
//! Dijkstra with unit step cost over the four orthogonal neighbours. The goal
//! is a predicate checked as each tile is finalized, so one search can look
//! for "the nearest tile of some kind" instead of a fixed coordinate.
//!
//! Ties between equally distant tiles are resolved by discovery order: the
//! open set is keyed on `(distance, insertion sequence)`, which makes every
//! search reproducible for identical inputs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::GridError;
use crate::game::{GridMap, Position, TileType};

/// Which tiles a search may step onto, on top of the map's own rules.
///
/// Out-of-bounds and wall tiles are always excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walkability {
    /// Refuse to route across spawn tiles.
    pub avoid_spawn: bool,
    /// Refuse to route across tiles holding a diamond.
    pub avoid_diamonds: bool,
}

impl Walkability {
    /// Every open tile is walkable.
    pub const ALL: Self = Self {
        avoid_spawn: false,
        avoid_diamonds: false,
    };

    /// Spawn tiles are off limits.
    pub const NO_SPAWN: Self = Self {
        avoid_spawn: true,
        avoid_diamonds: false,
    };

    /// Toggle spawn avoidance.
    #[must_use]
    pub const fn avoiding_spawn(mut self, avoid: bool) -> Self {
        self.avoid_spawn = avoid;
        self
    }

    /// Toggle diamond avoidance.
    #[must_use]
    pub const fn avoiding_diamonds(mut self, avoid: bool) -> Self {
        self.avoid_diamonds = avoid;
        self
    }

    /// Whether a search under this mode may enter `position`.
    #[must_use]
    pub fn allows(self, map: &GridMap, position: Position) -> bool {
        match map.get(position) {
            None | Some(TileType::Wall) => false,
            Some(TileType::Spawn) if self.avoid_spawn => false,
            Some(_) => !(self.avoid_diamonds && map.has_diamond_at(position)),
        }
    }
}

/// A shortest route, start to goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Number of steps.
    pub distance: u32,
    /// Tiles visited, starting with the start tile and ending with the goal.
    pub path: Vec<Position>,
}

impl Route {
    /// The tile the route starts on.
    #[must_use]
    pub fn start(&self) -> Position {
        self.path[0]
    }

    /// The tile the route ends on.
    #[must_use]
    pub fn goal(&self) -> Position {
        self.path[self.path.len() - 1]
    }

    /// The first tile after the start, or the start itself for empty routes.
    #[must_use]
    pub fn first_step(&self) -> Position {
        self.path.get(1).copied().unwrap_or_else(|| self.start())
    }

    /// The tile just before the goal, or the goal itself for empty routes.
    ///
    /// For a search rooted at a target and ending on a unit, this is the
    /// unit's next move toward the target.
    #[must_use]
    pub fn step_before_goal(&self) -> Position {
        self.path
            .len()
            .checked_sub(2)
            .map_or_else(|| self.goal(), |i| self.path[i])
    }
}

/// Find the shortest route from `start` to the first tile satisfying `is_goal`.
///
/// `is_walkable` is consulted for every tile except `start`; walls and
/// out-of-bounds tiles are rejected before it is called. Returns `Ok(None)`
/// when no goal tile is reachable.
///
/// # Errors
///
/// Returns [`GridError::OutOfBounds`] if `start` lies outside the map.
pub fn shortest_path<G, W>(
    map: &GridMap,
    start: Position,
    mut is_goal: G,
    is_walkable: W,
) -> Result<Option<Route>, GridError>
where
    G: FnMut(Position) -> bool,
    W: Fn(Position) -> bool,
{
    let start_idx = map.index_of(start)?;
    let size = map.len();

    let mut dist = vec![u32::MAX; size];
    let mut parent: Vec<Option<usize>> = vec![None; size];
    let mut finalized = vec![false; size];
    let mut open = BinaryHeap::new();
    let mut sequence = 0u64;

    dist[start_idx] = 0;
    open.push(Reverse((0u32, sequence, start_idx)));

    while let Some(Reverse((distance, _, idx))) = open.pop() {
        if finalized[idx] {
            continue;
        }
        finalized[idx] = true;

        let position = map.position_of(idx);
        if is_goal(position) {
            return Ok(Some(backtrace(map, &parent, idx, distance)));
        }

        for next in position.neighbors() {
            if !map.is_open(next) || !is_walkable(next) {
                continue;
            }
            let next_idx = map.index_of(next)?;
            let next_dist = distance + 1;
            if next_dist < dist[next_idx] {
                dist[next_idx] = next_dist;
                parent[next_idx] = Some(idx);
                sequence += 1;
                open.push(Reverse((next_dist, sequence, next_idx)));
            }
        }
    }

    Ok(None)
}

/// Shortest route from `start` to a fixed `target`.
///
/// The target itself is always enterable, whatever `walkability` says.
///
/// # Errors
///
/// Returns [`GridError::OutOfBounds`] if `start` lies outside the map.
pub fn route_to(
    map: &GridMap,
    start: Position,
    target: Position,
    walkability: Walkability,
) -> Result<Option<Route>, GridError> {
    shortest_path(
        map,
        start,
        |p| p == target,
        |p| p == target || walkability.allows(map, p),
    )
}

/// Shortest route from `start` to whichever of `targets` is nearest.
///
/// Equally near targets resolve in discovery order. Targets are always
/// enterable, whatever `walkability` says.
///
/// # Errors
///
/// Returns [`GridError::OutOfBounds`] if `start` lies outside the map.
pub fn nearest_of(
    map: &GridMap,
    start: Position,
    targets: &[Position],
    walkability: Walkability,
) -> Result<Option<Route>, GridError> {
    if targets.is_empty() {
        return Ok(None);
    }
    shortest_path(
        map,
        start,
        |p| targets.contains(&p),
        |p| targets.contains(&p) || walkability.allows(map, p),
    )
}

/// Rebuild the path by following parent links back from the goal.
fn backtrace(map: &GridMap, parent: &[Option<usize>], goal: usize, distance: u32) -> Route {
    let mut path = vec![map.position_of(goal)];
    let mut current = goal;
    while let Some(prev) = parent[current] {
        path.push(map.position_of(prev));
        current = prev;
    }
    path.reverse();
    Route { distance, path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Diamond;

    fn open_map(width: usize, height: usize) -> GridMap {
        GridMap::new(width, height).unwrap()
    }

    #[test]
    fn test_route_to_self() {
        let map = open_map(3, 3);
        let route = route_to(&map, Position::new(1, 1), Position::new(1, 1), Walkability::ALL)
            .unwrap()
            .unwrap();
        assert_eq!(route.distance, 0);
        assert_eq!(route.path, vec![Position::new(1, 1)]);
        assert_eq!(route.first_step(), Position::new(1, 1));
    }

    #[test]
    fn test_straight_line() {
        let map = open_map(5, 1);
        let route = route_to(&map, Position::new(0, 0), Position::new(4, 0), Walkability::ALL)
            .unwrap()
            .unwrap();
        assert_eq!(route.distance, 4);
        assert_eq!(route.path.len(), 5);
        assert_eq!(route.start(), Position::new(0, 0));
        assert_eq!(route.goal(), Position::new(4, 0));
        assert_eq!(route.first_step(), Position::new(1, 0));
        assert_eq!(route.step_before_goal(), Position::new(3, 0));
    }

    #[test]
    fn test_detour_around_wall() {
        let mut map = open_map(3, 3);
        map.set(Position::new(1, 0), TileType::Wall).unwrap();
        map.set(Position::new(1, 1), TileType::Wall).unwrap();
        let route = route_to(&map, Position::new(0, 0), Position::new(2, 0), Walkability::ALL)
            .unwrap()
            .unwrap();
        assert_eq!(route.distance, 6);
        assert!(route
            .path
            .iter()
            .all(|&p| map.tile(p).unwrap() != TileType::Wall));
    }

    #[test]
    fn test_unreachable() {
        let mut map = open_map(3, 1);
        map.set(Position::new(1, 0), TileType::Wall).unwrap();
        let route =
            route_to(&map, Position::new(0, 0), Position::new(2, 0), Walkability::ALL).unwrap();
        assert!(route.is_none());
    }

    #[test]
    fn test_start_out_of_bounds_is_an_error() {
        let map = open_map(3, 3);
        let result = route_to(&map, Position::new(-1, 0), Position::new(2, 0), Walkability::ALL);
        assert!(matches!(result, Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_no_spawn_mode_detours() {
        let mut map = open_map(3, 2);
        map.set(Position::new(1, 0), TileType::Spawn).unwrap();
        let direct = route_to(&map, Position::new(0, 0), Position::new(2, 0), Walkability::ALL)
            .unwrap()
            .unwrap();
        assert_eq!(direct.distance, 2);

        let detour =
            route_to(&map, Position::new(0, 0), Position::new(2, 0), Walkability::NO_SPAWN)
                .unwrap()
                .unwrap();
        assert_eq!(detour.distance, 4);
        assert!(!detour.path.contains(&Position::new(1, 0)));
    }

    #[test]
    fn test_avoid_diamonds() {
        let mut map = open_map(3, 2);
        map.add_diamond(Diamond::new("d", Position::new(1, 0), 1)).unwrap();
        let walk = Walkability::ALL.avoiding_diamonds(true);
        let route = route_to(&map, Position::new(0, 0), Position::new(2, 0), walk)
            .unwrap()
            .unwrap();
        assert_eq!(route.distance, 4);
    }

    #[test]
    fn test_goal_predicate_finds_nearest_kind() {
        let mut map = open_map(5, 5);
        map.set(Position::new(4, 4), TileType::Spawn).unwrap();
        map.set(Position::new(0, 3), TileType::Spawn).unwrap();
        let route = shortest_path(
            &map,
            Position::new(0, 0),
            |p| map.is_tile(p, TileType::Spawn),
            |p| Walkability::ALL.allows(&map, p),
        )
        .unwrap()
        .unwrap();
        assert_eq!(route.goal(), Position::new(0, 3));
        assert_eq!(route.distance, 3);
    }

    #[test]
    fn test_nearest_of_ties_are_deterministic() {
        let map = open_map(5, 5);
        let targets = [Position::new(2, 4), Position::new(4, 2)];
        let first = nearest_of(&map, Position::new(2, 2), &targets, Walkability::ALL)
            .unwrap()
            .unwrap();
        for _ in 0..10 {
            let again = nearest_of(&map, Position::new(2, 2), &targets, Walkability::ALL)
                .unwrap()
                .unwrap();
            assert_eq!(again, first);
        }
        // +x is discovered before +y.
        assert_eq!(first.goal(), Position::new(4, 2));
    }

    #[test]
    fn test_nearest_of_empty_targets() {
        let map = open_map(2, 2);
        assert!(nearest_of(&map, Position::new(0, 0), &[], Walkability::ALL)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_goal_on_spawn_is_enterable_in_no_spawn_mode() {
        let mut map = open_map(3, 1);
        map.set(Position::new(2, 0), TileType::Spawn).unwrap();
        let route =
            route_to(&map, Position::new(0, 0), Position::new(2, 0), Walkability::NO_SPAWN)
                .unwrap()
                .unwrap();
        assert_eq!(route.distance, 2);
    }
}
