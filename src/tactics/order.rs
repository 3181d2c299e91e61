//! Questions about the published resolution order.
//!
//! Ticks past the last published key are unknown: the server has not
//! generated them yet, and nothing here guesses what they will be.

use crate::game::OrderLookup;
use crate::tactics::Tactics;

impl Tactics<'_> {
    /// Whether our team resolves first at `tick`, or `None` if unpublished.
    #[must_use]
    pub fn acts_first_at(&self, tick: u32) -> Option<bool> {
        self.turn
            .turn_order
            .lookup(tick)
            .published()
            .map(|order| order.first() == Some(&self.turn.team_id))
    }

    /// Whether our team resolves first this tick, or `None` if unpublished.
    #[must_use]
    pub fn acts_first(&self) -> Option<bool> {
        self.acts_first_at(self.turn.tick)
    }

    /// Whether our team resolves before `team` at `tick`.
    ///
    /// `None` when the order for `tick` is not published. A published order
    /// that omits either team answers `Some(false)`.
    #[must_use]
    pub fn resolves_before_at(&self, team: &str, tick: u32) -> Option<bool> {
        match self.turn.turn_order.lookup(tick) {
            OrderLookup::NotYetGenerated => None,
            OrderLookup::Published(order) => {
                let ours = order.iter().position(|t| *t == self.turn.team_id);
                let theirs = order.iter().position(|t| t == team);
                Some(matches!((ours, theirs), (Some(a), Some(b)) if a < b))
            }
        }
    }

    /// Whether our team resolves before `team` next tick.
    ///
    /// False when there is no next tick or its order is not published.
    #[must_use]
    pub fn resolves_before_next_tick(&self, team: &str) -> bool {
        let next = self.turn.tick.saturating_add(1);
        if next >= self.turn.total_ticks {
            return false;
        }
        self.resolves_before_at(team, next).unwrap_or(false)
    }

    /// Ticks until the server publishes the next batch of orders.
    ///
    /// Counted up to the last published key; zero when nothing is published
    /// or the horizon has been reached.
    #[must_use]
    pub fn ticks_until_next_order(&self) -> u32 {
        self.turn
            .turn_order
            .horizon()
            .map_or(0, |last| last.saturating_sub(self.turn.tick))
    }

    /// Consecutive published ticks, from this one on, where we resolve first.
    #[must_use]
    pub fn consecutive_first_ticks(&self) -> u32 {
        let mut count = 0;
        for (_, order) in self.turn.turn_order.from_tick(self.turn.tick) {
            if order.first() != Some(&self.turn.team_id) {
                break;
            }
            count += 1;
        }
        count
    }

    /// Orders published per generation: one per ordered pair of teams.
    #[must_use]
    pub fn orders_per_generation(&self) -> usize {
        self.turn.teams.len().pow(2)
    }
}
