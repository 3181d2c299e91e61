//! Units and teams.

use crate::game::{DiamondId, Position};

/// Identifier of a unit.
pub type UnitId = String;

/// Identifier of a team.
pub type TeamId = String;

/// What happened to a unit during the previous tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitEvents {
    /// Unit that vined this one, if any.
    pub was_vined_by: Option<UnitId>,
    /// Position before the previous tick resolved.
    pub position_before: Option<Position>,
    /// Unit that attacked this one, if any.
    pub was_attacked_by: Option<UnitId>,
}

/// State for a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Unique identifier for this unit.
    pub id: UnitId,
    /// Team the unit belongs to.
    pub team_id: TeamId,
    /// Position on the map; absent until spawned and after removal from play.
    pub position: Option<Position>,
    /// Whether the unit is carrying a diamond.
    pub has_diamond: bool,
    /// Whether the unit has entered the battlefield.
    pub has_spawned: bool,
    /// Whether the unit is channelling a summon.
    pub is_summoning: bool,
    /// Id of the carried diamond.
    pub diamond_id: Option<DiamondId>,
    /// Events from the previous tick.
    pub last_state: UnitEvents,
}

impl Unit {
    /// Create a unit that has not spawned yet.
    #[must_use]
    pub fn new(id: impl Into<UnitId>, team_id: impl Into<TeamId>) -> Self {
        Self {
            id: id.into(),
            team_id: team_id.into(),
            position: None,
            has_diamond: false,
            has_spawned: false,
            is_summoning: false,
            diamond_id: None,
            last_state: UnitEvents::default(),
        }
    }

    /// Place the unit on the battlefield.
    #[must_use]
    pub fn spawned_at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self.has_spawned = true;
        self
    }

    /// Give the unit a diamond.
    #[must_use]
    pub fn holding(mut self, diamond_id: impl Into<DiamondId>) -> Self {
        self.has_diamond = true;
        self.diamond_id = Some(diamond_id.into());
        self
    }

    /// Put the unit into the summoning state.
    #[must_use]
    pub fn summoning(mut self) -> Self {
        self.is_summoning = true;
        self
    }

    /// Position of the unit if it is currently on the battlefield.
    #[must_use]
    pub fn live_position(&self) -> Option<Position> {
        if self.has_spawned { self.position } else { None }
    }
}

/// A team and its units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Unique identifier for this team.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Current score.
    pub score: i64,
    /// Units in server order.
    pub units: Vec<Unit>,
    /// Errors for commands the server rejected last tick.
    pub errors: Vec<String>,
}

impl Team {
    /// Create a team without units.
    #[must_use]
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
            units: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Add a unit, returning the team for chaining.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Units currently on the battlefield.
    pub fn live_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.live_position().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_creation() {
        let unit = Unit::new("u1", "t1");
        assert_eq!(unit.id, "u1");
        assert_eq!(unit.team_id, "t1");
        assert!(!unit.has_spawned);
        assert!(unit.live_position().is_none());
    }

    #[test]
    fn test_unit_spawn_and_hold() {
        let unit = Unit::new("u1", "t1")
            .spawned_at(Position::new(1, 2))
            .holding("d1");
        assert_eq!(unit.live_position(), Some(Position::new(1, 2)));
        assert!(unit.has_diamond);
        assert_eq!(unit.diamond_id.as_deref(), Some("d1"));
    }

    #[test]
    fn test_removed_unit_is_not_live() {
        let mut unit = Unit::new("u1", "t1").spawned_at(Position::new(0, 0));
        unit.position = None;
        assert!(unit.live_position().is_none());
    }

    #[test]
    fn test_team_live_units() {
        let team = Team::new("t1", "Alpha")
            .with_unit(Unit::new("a", "t1").spawned_at(Position::new(0, 0)))
            .with_unit(Unit::new("b", "t1"));
        let live: Vec<_> = team.live_units().map(|u| u.id.as_str()).collect();
        assert_eq!(live, vec!["a"]);
    }
}
