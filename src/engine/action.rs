//! Actions emitted by the engine.

use std::fmt;

use crate::game::{Position, UnitId};

/// What a unit does this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Step onto an adjacent tile.
    Move(Position),
    /// Enter the battlefield on a spawn tile.
    Spawn(Position),
    /// Channel to raise the held diamond's level.
    Summon,
    /// Put the held diamond down on an adjacent tile.
    Drop(Position),
    /// Immobilize the enemy on the target tile.
    Vine(Position),
    /// Hit the enemy on an adjacent tile.
    Attack(Position),
    /// Do nothing.
    Idle,
}

impl ActionKind {
    /// Target tile, for kinds that have one.
    #[must_use]
    pub const fn target(self) -> Option<Position> {
        match self {
            ActionKind::Move(p)
            | ActionKind::Spawn(p)
            | ActionKind::Drop(p)
            | ActionKind::Vine(p)
            | ActionKind::Attack(p) => Some(p),
            ActionKind::Summon | ActionKind::Idle => None,
        }
    }

    /// Name used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Move(_) => "MOVE",
            ActionKind::Spawn(_) => "SPAWN",
            ActionKind::Summon => "SUMMON",
            ActionKind::Drop(_) => "DROP",
            ActionKind::Vine(_) => "VINE",
            ActionKind::Attack(_) => "ATTACK",
            ActionKind::Idle => "NONE",
        }
    }
}

/// One unit's action for the tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The acting unit.
    pub unit_id: UnitId,
    /// What it does.
    pub kind: ActionKind,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub fn new(unit_id: impl Into<UnitId>, kind: ActionKind) -> Self {
        Self {
            unit_id: unit_id.into(),
            kind,
        }
    }

    /// An action that does nothing.
    #[must_use]
    pub fn idle(unit_id: impl Into<UnitId>) -> Self {
        Self::new(unit_id, ActionKind::Idle)
    }

    /// Target tile, for kinds that have one.
    #[must_use]
    pub const fn target(&self) -> Option<Position> {
        self.kind.target()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.target() {
            Some(target) => write!(f, "{} {} {target}", self.unit_id, self.kind.name()),
            None => write!(f, "{} {}", self.unit_id, self.kind.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(
            ActionKind::Attack(Position::new(1, 2)).target(),
            Some(Position::new(1, 2))
        );
        assert_eq!(ActionKind::Summon.target(), None);
        assert_eq!(ActionKind::Idle.target(), None);
    }

    #[test]
    fn test_display() {
        let action = Action::new("u1", ActionKind::Vine(Position::new(3, 0)));
        assert_eq!(action.to_string(), "u1 VINE (3, 0)");
        assert_eq!(Action::idle("u2").to_string(), "u2 NONE");
    }
}
