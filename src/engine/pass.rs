//! State shared by the units of one decision pass.
//!
//! Claims made by earlier units are visible to later ones: a claimed diamond
//! is no longer a target, and a reserved tile is no longer a destination.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::engine::TacticsConfig;
use crate::game::{Diamond, DiamondId, Position, TileType};
use crate::pathfinder::Walkability;
use crate::tactics::Tactics;

/// Claims and the random source for one pass.
#[derive(Debug)]
pub(crate) struct PassState {
    /// Diamonds targeted by earlier units.
    claimed: HashSet<DiamondId>,
    /// Tiles earlier units move, spawn, or drop onto.
    reserved: HashSet<Position>,
    /// Deterministic random source, reseeded every pass.
    rng: ChaCha8Rng,
    /// Whether fallback moves shuffle their neighbour order.
    shuffle_fallback: bool,
}

impl PassState {
    /// Start a pass for `tick`.
    pub(crate) fn new(config: &TacticsConfig, tick: u32) -> Self {
        Self {
            claimed: HashSet::new(),
            reserved: HashSet::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed ^ u64::from(tick)),
            shuffle_fallback: config.shuffle_fallback_moves,
        }
    }

    /// Mark a diamond as targeted.
    pub(crate) fn claim(&mut self, diamond: &Diamond) {
        self.claimed.insert(diamond.id.clone());
    }

    /// Whether an earlier unit targeted this diamond.
    pub(crate) fn is_claimed(&self, diamond: &Diamond) -> bool {
        self.claimed.contains(&diamond.id)
    }

    /// Mark a tile as the destination of an earlier unit.
    pub(crate) fn reserve(&mut self, position: Position) {
        self.reserved.insert(position);
    }

    /// Whether nobody stands on or is headed for a tile.
    pub(crate) fn is_free(&self, tactics: &Tactics<'_>, position: Position) -> bool {
        !self.reserved.contains(&position) && !tactics.is_occupied(position)
    }

    /// Diamonds a unit of `team` may still go after.
    ///
    /// Excludes diamonds claimed this pass and diamonds carried by the team.
    pub(crate) fn available_diamonds<'a>(
        &self,
        tactics: &Tactics<'a>,
        team: &str,
    ) -> Vec<&'a Diamond> {
        tactics
            .turn()
            .map
            .diamonds()
            .iter()
            .filter(|d| !self.is_claimed(d))
            .filter(|d| tactics.diamond_holder(d).is_none_or(|h| h.team_id != team))
            .collect()
    }

    /// Pick one of several equally good options.
    ///
    /// Takes the first unless `randomize` is set.
    pub(crate) fn pick<T: Copy>(&mut self, options: &[T], randomize: bool) -> Option<T> {
        if randomize {
            options.choose(&mut self.rng).copied()
        } else {
            options.first().copied()
        }
    }

    /// Whether a unit may step onto `position` under `walkability`.
    pub(crate) fn can_step(
        &self,
        tactics: &Tactics<'_>,
        position: Position,
        walkability: Walkability,
    ) -> bool {
        walkability.allows(&tactics.turn().map, position) && self.is_free(tactics, position)
    }

    /// Any free neighbour of `from` allowed by `walkability`.
    ///
    /// Neighbours are tried −x, +x, −y, +y unless shuffling is enabled.
    pub(crate) fn fallback_step(
        &mut self,
        tactics: &Tactics<'_>,
        from: Position,
        walkability: Walkability,
    ) -> Option<Position> {
        let mut candidates = tactics.free_neighbors(from);
        if self.shuffle_fallback {
            candidates.shuffle(&mut self.rng);
        }
        let map = &tactics.turn().map;
        candidates
            .into_iter()
            .find(|&p| !self.reserved.contains(&p) && walkability.allows(map, p))
    }

    /// Free empty neighbour to drop a diamond on, in −x, +x, −y, +y order.
    ///
    /// The tile must be empty ground with no unit and no other diamond.
    pub(crate) fn drop_tile(&self, tactics: &Tactics<'_>, from: Position) -> Option<Position> {
        let map = &tactics.turn().map;
        from.surroundings().into_iter().find(|&p| {
            map.is_tile(p, TileType::Empty) && !map.has_diamond_at(p) && self.is_free(tactics, p)
        })
    }
}
