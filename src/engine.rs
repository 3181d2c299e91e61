//! Per-unit decision engine.
//!
//! Each owned unit is evaluated once per snapshot against a fixed-priority
//! rule chain; the first rule that matches decides the unit's action:
//!
//! 1. Final tick while holding a diamond: drop it.
//! 2. Not spawned yet: spawn near the closest unclaimed diamond.
//! 3. Summoning: wait.
//! 4. Holding a diamond: drop when threatened, summon when safe, else flee.
//! 5. Enemy adjacent: attack.
//! 6. Enemy diamond holder in line of sight that resolves after us: vine.
//! 7. Otherwise: walk toward the nearest diamond, then the nearest enemy.
//!
//! Units are processed in team order. Diamonds and tiles claimed by earlier
//! units are skipped by later ones.

mod action;
mod config;
mod pass;

pub use action::{Action, ActionKind};
pub use config::TacticsConfig;

use std::cmp::Reverse;
use std::panic::{self, AssertUnwindSafe};

use tracing::{Dispatch, debug, error, warn};

use crate::error::{DecisionError, DecisionResult};
use crate::game::{Position, TileType, Turn, Unit};
use crate::pathfinder::{Walkability, nearest_of, shortest_path};
use crate::tactics::{EnemyContact, Tactics};

use pass::PassState;

/// The decision engine.
///
/// Holds only configuration: every call to [`Engine::compute_actions`] is a
/// pure function of the snapshot and the config.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// Thresholds and the random seed.
    config: TacticsConfig,
    /// Logger the passes report to, if injected.
    logger: Option<Dispatch>,
}

impl Engine {
    /// Create an engine with the given thresholds.
    #[must_use]
    pub fn new(config: TacticsConfig) -> Self {
        Self {
            config,
            logger: None,
        }
    }

    /// Route this engine's log events to `logger` instead of the global
    /// subscriber.
    #[must_use]
    pub fn with_logger(mut self, logger: Dispatch) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The engine's thresholds.
    #[must_use]
    pub const fn config(&self) -> &TacticsConfig {
        &self.config
    }

    /// Decide one action per owned unit.
    ///
    /// Never fails: a unit whose evaluation faults is left out of the result
    /// and the remaining units are still decided. Units removed from play get
    /// no action.
    #[must_use]
    pub fn compute_actions(&self, turn: &Turn) -> Vec<Action> {
        match &self.logger {
            Some(logger) => tracing::dispatcher::with_default(logger, || self.run_pass(turn)),
            None => self.run_pass(turn),
        }
    }

    fn run_pass(&self, turn: &Turn) -> Vec<Action> {
        let span = tracing::debug_span!("pass", tick = turn.tick, team = %turn.team_id);
        let _guard = span.enter();

        let Some(team) = turn.own_team() else {
            warn!(team = %turn.team_id, "own team missing from snapshot");
            return Vec::new();
        };

        let tactics = Tactics::new(turn);
        let mut pass = PassState::new(&self.config, turn.tick);
        let mut actions = Vec::with_capacity(team.units.len());

        for unit in &team.units {
            if unit.has_spawned && unit.position.is_none() {
                debug!(unit = %unit.id, "removed from play");
                continue;
            }

            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| self.decide(&tactics, &mut pass, unit)));
            match outcome {
                Ok(Ok(action)) => {
                    debug!(%action, "decided");
                    actions.push(action);
                }
                Ok(Err(e)) => warn!(unit = %unit.id, error = %e, "no action this tick"),
                Err(_) => error!(unit = %unit.id, "decision panicked; no action this tick"),
            }
        }

        actions
    }

    /// Run the rule chain for one unit.
    fn decide(
        &self,
        tactics: &Tactics<'_>,
        pass: &mut PassState,
        unit: &Unit,
    ) -> DecisionResult<Action> {
        let turn = tactics.turn();

        if turn.is_final_tick() && unit.has_diamond {
            let position = live_position(unit)?;
            return Ok(Self::drop_or_idle(tactics, pass, unit, position));
        }

        if !unit.has_spawned {
            return self.spawn(tactics, pass, unit);
        }

        let position = live_position(unit)?;

        if unit.is_summoning {
            return Ok(Action::idle(unit.id.clone()));
        }

        if unit.has_diamond {
            return self.protect(tactics, pass, unit, position);
        }

        if let Some(enemy) = tactics.adjacent_enemy(position)? {
            if let Some(target) = enemy.live_position() {
                return Ok(Action::new(unit.id.clone(), ActionKind::Attack(target)));
            }
        }

        if let Some(target) = Self::lasso_target(tactics, unit)? {
            return Ok(Action::new(unit.id.clone(), ActionKind::Vine(target)));
        }

        self.advance(tactics, pass, unit, position)
    }

    /// Drop the held diamond next to `position`, or wait if boxed in.
    fn drop_or_idle(
        tactics: &Tactics<'_>,
        pass: &mut PassState,
        unit: &Unit,
        position: Position,
    ) -> Action {
        match pass.drop_tile(tactics, position) {
            Some(tile) => {
                pass.reserve(tile);
                Action::new(unit.id.clone(), ActionKind::Drop(tile))
            }
            None => Action::idle(unit.id.clone()),
        }
    }

    /// Spawn on the free spawn tile closest to an available diamond.
    fn spawn(
        &self,
        tactics: &Tactics<'_>,
        pass: &mut PassState,
        unit: &Unit,
    ) -> DecisionResult<Action> {
        let map = &tactics.turn().map;
        let spawns: Vec<Position> = map.spawn_tiles().collect();
        let free: Vec<Position> = spawns
            .iter()
            .copied()
            .filter(|&p| pass.is_free(tactics, p))
            .collect();
        // Free tiles are preferred; a full board still spawns somewhere.
        let usable = if free.is_empty() { spawns } else { free };

        let mut best_distance = u32::MAX;
        let mut candidates = Vec::new();

        for diamond in pass.available_diamonds(tactics, &unit.team_id) {
            let route = shortest_path(
                map,
                diamond.position,
                |p| usable.contains(&p),
                |p| Walkability::ALL.allows(map, p),
            )?;
            let Some(route) = route else {
                continue;
            };
            if route.distance < best_distance {
                best_distance = route.distance;
                candidates.clear();
            }
            if route.distance == best_distance {
                candidates.push((route.goal(), diamond));
            }
        }

        if let Some((tile, diamond)) = pass.pick(&candidates, self.config.randomize_ties) {
            debug!(unit = %unit.id, diamond = %diamond.id, distance = best_distance, "spawning toward diamond");
            pass.claim(diamond);
            pass.reserve(tile);
            return Ok(Action::new(unit.id.clone(), ActionKind::Spawn(tile)));
        }

        match pass.pick(&usable, self.config.randomize_ties) {
            Some(tile) => {
                pass.reserve(tile);
                Ok(Action::new(unit.id.clone(), ActionKind::Spawn(tile)))
            }
            None => {
                warn!(unit = %unit.id, "map has no spawn tile");
                Ok(Action::idle(unit.id.clone()))
            }
        }
    }

    /// Keep a held diamond safe: drop it, summon it, or run.
    fn protect(
        &self,
        tactics: &Tactics<'_>,
        pass: &mut PassState,
        unit: &Unit,
        position: Position,
    ) -> DecisionResult<Action> {
        let turn = tactics.turn();
        let diamond = tactics
            .held_diamond(unit)
            .ok_or_else(|| DecisionError::MissingDiamond {
                unit: unit.id.clone(),
            })?;
        let contact = tactics.nearest_enemy(position)?;

        let threatened = contact.is_some_and(|c| c.distance <= self.config.flee_distance);
        if threatened || tactics.in_lasso_danger(unit, self.config.lasso_danger_range)? {
            debug!(unit = %unit.id, "threatened while holding a diamond");
            return Ok(Self::drop_or_idle(tactics, pass, unit, position));
        }

        let level = diamond.summon_level;
        let safe_distance = level.saturating_add(self.config.summon_safety_margin);
        let needed_ticks = level.saturating_add(self.config.summon_tick_margin);
        let out_of_reach = contact.is_none_or(|c| c.distance > safe_distance);
        if level < turn.config.max_summon_level
            && out_of_reach
            && turn.remaining_ticks() >= needed_ticks
        {
            return Ok(Action::new(unit.id.clone(), ActionKind::Summon));
        }

        let Some(contact) = contact else {
            return Ok(Action::idle(unit.id.clone()));
        };
        let step = Self::flee_step(tactics, pass, position, &contact);
        Ok(match step {
            Some(tile) => {
                pass.reserve(tile);
                Action::new(unit.id.clone(), ActionKind::Move(tile))
            }
            None => Action::idle(unit.id.clone()),
        })
    }

    /// One step away from the threat.
    ///
    /// Tries directly away along the axis of larger displacement, then the
    /// two sideways tiles (the one farther from the threat first), and only
    /// then the tile toward the threat.
    fn flee_step(
        tactics: &Tactics<'_>,
        pass: &PassState,
        from: Position,
        threat: &EnemyContact<'_>,
    ) -> Option<Position> {
        let walk = Walkability::ALL.avoiding_diamonds(true);
        let dx = from.x - threat.position.x;
        let dy = from.y - threat.position.y;
        if dx == 0 && dy == 0 {
            return None;
        }

        let mut candidates = if dx.abs() >= dy.abs() {
            [
                from.offset(dx.signum(), 0),
                from.offset(0, -1),
                from.offset(0, 1),
                from.offset(-dx.signum(), 0),
            ]
        } else {
            [
                from.offset(0, dy.signum()),
                from.offset(-1, 0),
                from.offset(1, 0),
                from.offset(0, -dy.signum()),
            ]
        };
        candidates[1..3].sort_by_key(|p| Reverse(p.manhattan(threat.position)));

        candidates
            .into_iter()
            .find(|&p| pass.can_step(tactics, p, walk))
    }

    /// A diamond holder we can vine before its team acts next tick.
    fn lasso_target(tactics: &Tactics<'_>, unit: &Unit) -> DecisionResult<Option<Position>> {
        if unit.has_diamond {
            return Ok(None);
        }
        let target = tactics
            .can_lasso(unit)?
            .into_iter()
            .find(|t| t.has_diamond && tactics.resolves_before_next_tick(&t.team_id));
        Ok(target.and_then(Unit::live_position))
    }

    /// Walk toward the nearest available diamond, else the nearest enemy.
    fn advance(
        &self,
        tactics: &Tactics<'_>,
        pass: &mut PassState,
        unit: &Unit,
        position: Position,
    ) -> DecisionResult<Action> {
        let map = &tactics.turn().map;
        let walk = Walkability::ALL.avoiding_spawn(!map.is_tile(position, TileType::Spawn));

        let diamonds = pass.available_diamonds(tactics, &unit.team_id);
        let targets: Vec<Position> = diamonds.iter().map(|d| d.position).collect();
        let mut step = None;

        if let Some(route) = nearest_of(map, position, &targets, walk)? {
            if let Some(diamond) = diamonds.iter().find(|d| d.position == route.goal()) {
                debug!(unit = %unit.id, diamond = %diamond.id, distance = route.distance, "heading for diamond");
                pass.claim(diamond);
            }
            step = Some(route.first_step());
        } else if let Some(contact) = tactics.nearest_enemy(position)? {
            debug!(unit = %unit.id, enemy = %contact.enemy.id, distance = contact.distance, "heading for enemy");
            step = Some(contact.next_step);
        }

        let step = step
            .filter(|&p| p != position && pass.can_step(tactics, p, Walkability::ALL))
            .or_else(|| pass.fallback_step(tactics, position, Walkability::ALL));

        Ok(match step {
            Some(tile) => {
                pass.reserve(tile);
                Action::new(unit.id.clone(), ActionKind::Move(tile))
            }
            None => Action::idle(unit.id.clone()),
        })
    }
}

/// Position of a unit that is supposed to be on the battlefield.
fn live_position(unit: &Unit) -> DecisionResult<Position> {
    unit.position.ok_or_else(|| DecisionError::MissingPosition {
        unit: unit.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Diamond, GridMap, Team, TurnOrder};

    fn arena(width: usize, height: usize) -> Turn {
        let map = GridMap::new(width, height).unwrap();
        let mut turn = Turn::new(5, 100, "us", map);
        turn.teams.push(Team::new("us", "Us"));
        turn.teams.push(Team::new("them", "Them"));
        turn
    }

    fn ours(turn: &mut Turn, unit: Unit) {
        turn.teams[0].units.push(unit);
    }

    fn theirs(turn: &mut Turn, unit: Unit) {
        turn.teams[1].units.push(unit);
    }

    fn decide(turn: &Turn) -> Vec<Action> {
        Engine::default().compute_actions(turn)
    }

    #[test]
    fn test_summoning_unit_waits() {
        let mut turn = arena(5, 5);
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(2, 2)).summoning());
        assert_eq!(decide(&turn), vec![Action::idle("u1")]);
    }

    #[test]
    fn test_removed_unit_gets_no_action() {
        let mut turn = arena(5, 5);
        let mut unit = Unit::new("u1", "us").spawned_at(Position::new(2, 2));
        unit.position = None;
        ours(&mut turn, unit);
        assert!(decide(&turn).is_empty());
    }

    #[test]
    fn test_holder_summons_when_safe() {
        let mut turn = arena(9, 9);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(0, 0), 1))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(0, 0)).holding("d1"));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(8, 8)));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Summon)]
        );
    }

    fn holder_with_enemy(level: u32, enemy: Position) -> Turn {
        let mut turn = arena(9, 9);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(4, 4), level))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(4, 4)).holding("d1"));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(enemy));
        turn
    }

    #[test]
    fn test_summon_needs_enemy_beyond_safe_distance() {
        // Level 1 with the default margin: safe beyond 3 steps.
        let turn = holder_with_enemy(1, Position::new(7, 4));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(3, 4)))]
        );

        let turn = holder_with_enemy(1, Position::new(8, 4));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Summon)]
        );
    }

    #[test]
    fn test_summon_needs_enough_ticks_left() {
        let mut turn = arena(5, 5);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(2, 2), 2))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(2, 2)).holding("d1"));

        turn.tick = 98;
        assert_eq!(decide(&turn), vec![Action::idle("u1")]);

        turn.tick = 97;
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Summon)]
        );
    }

    #[test]
    fn test_lasso_danger_alone_triggers_drop() {
        let turn = holder_with_enemy(1, Position::new(4, 1));
        let config = TacticsConfig {
            flee_distance: 0,
            lasso_danger_range: 4,
            ..TacticsConfig::default()
        };
        assert_eq!(
            Engine::new(config).compute_actions(&turn),
            vec![Action::new("u1", ActionKind::Drop(Position::new(3, 4)))]
        );

        let config = TacticsConfig {
            lasso_danger_range: 3,
            ..config
        };
        assert_eq!(
            Engine::new(config).compute_actions(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(4, 5)))]
        );
    }

    #[test]
    fn test_flee_sidesteps_map_edge() {
        let mut turn = arena(9, 9);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(0, 4), 1))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(0, 4)).holding("d1"));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(3, 4)));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(0, 3)))]
        );
    }

    #[test]
    fn test_flee_sidesteps_wall() {
        let mut turn = holder_with_enemy(1, Position::new(7, 4));
        turn.map.set(Position::new(3, 4), TileType::Wall).unwrap();
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(4, 3)))]
        );
    }

    #[test]
    fn test_flee_sidesteps_reserved_tile() {
        let mut turn = holder_with_enemy(1, Position::new(7, 4));
        turn.map.set(Position::new(3, 4), TileType::Spawn).unwrap();
        turn.teams[0].units.insert(0, Unit::new("u0", "us"));
        assert_eq!(
            decide(&turn),
            vec![
                Action::new("u0", ActionKind::Spawn(Position::new(3, 4))),
                Action::new("u1", ActionKind::Move(Position::new(4, 3))),
            ]
        );
    }

    #[test]
    fn test_flee_prefers_side_farther_from_enemy() {
        let mut turn = holder_with_enemy(2, Position::new(7, 3));
        turn.map.set(Position::new(3, 4), TileType::Wall).unwrap();
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(4, 5)))]
        );
    }

    #[test]
    fn test_cornered_holder_never_steps_toward_enemy() {
        let mut turn = arena(9, 9);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(0, 0), 1))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(0, 0)).holding("d1"));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(3, 0)));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(0, 1)))]
        );
    }

    #[test]
    fn test_holder_drops_when_enemy_close() {
        let mut turn = arena(5, 5);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(2, 2), 1))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(2, 2)).holding("d1"));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(4, 2)));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Drop(Position::new(1, 2)))]
        );
    }

    #[test]
    fn test_holder_flees_at_max_level() {
        let mut turn = arena(9, 1);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(3, 0), 5))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(3, 0)).holding("d1"));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(8, 0)));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(2, 0)))]
        );
    }

    #[test]
    fn test_holder_without_diamond_on_map_is_dropped() {
        let mut turn = arena(5, 5);
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(2, 2)).holding("ghost"));
        ours(&mut turn, Unit::new("u2", "us").spawned_at(Position::new(0, 0)).summoning());
        assert_eq!(decide(&turn), vec![Action::idle("u2")]);
    }

    #[test]
    fn test_out_of_bounds_unit_does_not_abort_pass() {
        let mut turn = arena(3, 3);
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(7, 7)));
        ours(&mut turn, Unit::new("u2", "us").spawned_at(Position::new(1, 1)).summoning());
        assert_eq!(decide(&turn), vec![Action::idle("u2")]);
    }

    #[test]
    fn test_two_units_do_not_chase_the_same_diamond() {
        let mut turn = arena(7, 1);
        turn.map
            .add_diamond(Diamond::new("near", Position::new(3, 0), 1))
            .unwrap();
        turn.map
            .add_diamond(Diamond::new("far", Position::new(6, 0), 1))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(1, 0)));
        ours(&mut turn, Unit::new("u2", "us").spawned_at(Position::new(0, 0)));
        let actions = decide(&turn);
        assert_eq!(actions[0], Action::new("u1", ActionKind::Move(Position::new(2, 0))));
        // u2 is blocked by u1 in the corridor and cannot reserve (1, 0) either.
        assert_eq!(actions[1], Action::idle("u2"));
    }

    #[test]
    fn test_spawn_claims_diamonds() {
        let mut turn = arena(5, 1);
        turn.map.set(Position::new(0, 0), TileType::Spawn).unwrap();
        turn.map.set(Position::new(4, 0), TileType::Spawn).unwrap();
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(1, 0), 1))
            .unwrap();
        turn.map
            .add_diamond(Diamond::new("d2", Position::new(3, 0), 1))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us"));
        ours(&mut turn, Unit::new("u2", "us"));
        assert_eq!(
            decide(&turn),
            vec![
                Action::new("u1", ActionKind::Spawn(Position::new(0, 0))),
                Action::new("u2", ActionKind::Spawn(Position::new(4, 0))),
            ]
        );
    }

    #[test]
    fn test_spawn_fallback_without_diamonds() {
        let mut turn = arena(3, 3);
        turn.map.set(Position::new(2, 1), TileType::Spawn).unwrap();
        ours(&mut turn, Unit::new("u1", "us"));
        ours(&mut turn, Unit::new("u2", "us"));
        assert_eq!(
            decide(&turn),
            vec![
                Action::new("u1", ActionKind::Spawn(Position::new(2, 1))),
                Action::new("u2", ActionKind::Spawn(Position::new(2, 1))),
            ]
        );
    }

    #[test]
    fn test_spawn_on_occupied_tile_when_none_free() {
        let mut turn = arena(3, 3);
        turn.map.set(Position::new(0, 0), TileType::Spawn).unwrap();
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(2, 2), 1))
            .unwrap();
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(0, 0)));
        ours(&mut turn, Unit::new("u1", "us"));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Spawn(Position::new(0, 0)))]
        );
    }

    #[test]
    fn test_vine_requires_acting_first() {
        let mut turn = arena(6, 1);
        turn.map
            .add_diamond(Diamond::new("d1", Position::new(5, 0), 1))
            .unwrap();
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(0, 0)));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(5, 0)).holding("d1"));
        turn.turn_order = TurnOrder::new().with(6, vec!["them".to_string(), "us".to_string()]);

        let actions = decide(&turn);
        assert!(matches!(actions[0].kind, ActionKind::Move(_)));

        turn.turn_order = TurnOrder::new().with(6, vec!["us".to_string(), "them".to_string()]);
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Vine(Position::new(5, 0)))]
        );
    }

    #[test]
    fn test_chase_enemy_when_no_diamonds() {
        let mut turn = arena(5, 1);
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(0, 0)));
        theirs(&mut turn, Unit::new("e1", "them").spawned_at(Position::new(4, 0)));
        assert_eq!(
            decide(&turn),
            vec![Action::new("u1", ActionKind::Move(Position::new(1, 0)))]
        );
    }

    #[test]
    fn test_boxed_in_unit_waits() {
        let mut turn = arena(3, 3);
        for p in [
            Position::new(0, 1),
            Position::new(2, 1),
            Position::new(1, 0),
            Position::new(1, 2),
        ] {
            turn.map.set(p, TileType::Wall).unwrap();
        }
        ours(&mut turn, Unit::new("u1", "us").spawned_at(Position::new(1, 1)));
        assert_eq!(decide(&turn), vec![Action::idle("u1")]);
    }

    #[test]
    fn test_missing_team_yields_nothing() {
        let map = GridMap::new(2, 2).unwrap();
        let turn = Turn::new(0, 10, "nobody", map);
        assert!(decide(&turn).is_empty());
    }
}
