//! The per-tick snapshot handed to the engine.

use std::collections::BTreeMap;

use crate::game::{GridMap, Team, TeamId, Unit};

/// Turn-invariant game constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Points awarded per diamond.
    pub points_per_diamond: u32,
    /// Highest level a diamond can be summoned to.
    pub max_summon_level: u32,
    /// Summon level of freshly placed diamonds.
    pub initial_summon_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_diamond: 1,
            max_summon_level: 5,
            initial_summon_level: 1,
        }
    }
}

/// Result of looking up the resolution order for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderLookup<'a> {
    /// The server published the order for this tick.
    Published(&'a [TeamId]),
    /// The tick lies beyond the published horizon.
    NotYetGenerated,
}

impl<'a> OrderLookup<'a> {
    /// The published order, if any.
    #[must_use]
    pub const fn published(self) -> Option<&'a [TeamId]> {
        match self {
            OrderLookup::Published(order) => Some(order),
            OrderLookup::NotYetGenerated => None,
        }
    }
}

/// Published team resolution order for upcoming ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnOrder {
    /// Ordered team ids keyed by tick.
    orders: BTreeMap<u32, Vec<TeamId>>,
}

impl TurnOrder {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the order for a tick.
    pub fn insert(&mut self, tick: u32, order: Vec<TeamId>) {
        self.orders.insert(tick, order);
    }

    /// Add an order, returning the table for chaining.
    #[must_use]
    pub fn with(mut self, tick: u32, order: Vec<TeamId>) -> Self {
        self.insert(tick, order);
        self
    }

    /// Look up the order for a tick.
    #[must_use]
    pub fn lookup(&self, tick: u32) -> OrderLookup<'_> {
        self.orders
            .get(&tick)
            .map_or(OrderLookup::NotYetGenerated, |order| {
                OrderLookup::Published(order)
            })
    }

    /// The last tick with a published order.
    #[must_use]
    pub fn horizon(&self) -> Option<u32> {
        self.orders.keys().next_back().copied()
    }

    /// Published orders from `tick` onward, in ascending tick order.
    pub fn from_tick(&self, tick: u32) -> impl Iterator<Item = (u32, &[TeamId])> {
        self.orders
            .range(tick..)
            .map(|(&t, order)| (t, order.as_slice()))
    }

    /// Number of published ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// One immutable game snapshot.
#[derive(Debug, Clone)]
pub struct Turn {
    /// Current tick (0-indexed).
    pub tick: u32,
    /// Number of ticks in the game.
    pub total_ticks: u32,
    /// The team this engine plays for.
    pub team_id: TeamId,
    /// All teams, ours included.
    pub teams: Vec<Team>,
    /// The map for this tick.
    pub map: GridMap,
    /// Game constants.
    pub config: GameConfig,
    /// Published resolution order for upcoming ticks.
    pub turn_order: TurnOrder,
}

impl Turn {
    /// Create a snapshot with no teams and an empty order table.
    #[must_use]
    pub fn new(tick: u32, total_ticks: u32, team_id: impl Into<TeamId>, map: GridMap) -> Self {
        Self {
            tick,
            total_ticks,
            team_id: team_id.into(),
            teams: Vec::new(),
            map,
            config: GameConfig::default(),
            turn_order: TurnOrder::new(),
        }
    }

    /// Get a team by id.
    #[must_use]
    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Our own team.
    #[must_use]
    pub fn own_team(&self) -> Option<&Team> {
        self.team(&self.team_id)
    }

    /// Every unit of every team, in team then unit order.
    pub fn all_units(&self) -> impl Iterator<Item = &Unit> {
        self.teams.iter().flat_map(|t| t.units.iter())
    }

    /// Every unit not on our team.
    pub fn enemy_units(&self) -> impl Iterator<Item = &Unit> {
        self.teams
            .iter()
            .filter(|t| t.id != self.team_id)
            .flat_map(|t| t.units.iter())
    }

    /// Live enemy units.
    pub fn live_enemies(&self) -> impl Iterator<Item = &Unit> {
        self.enemy_units().filter(|u| u.live_position().is_some())
    }

    /// Whether this is the last tick of the game.
    #[must_use]
    pub fn is_final_tick(&self) -> bool {
        self.tick.saturating_add(1) >= self.total_ticks
    }

    /// Ticks left in the game, the current one included.
    #[must_use]
    pub const fn remaining_ticks(&self) -> u32 {
        self.total_ticks.saturating_sub(self.tick)
    }
}
