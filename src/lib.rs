// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Tactician: a deterministic per-turn tactical engine for grid
//! diamond-hunting bots.
//!
//! Every tick the server sends a snapshot of the board. The engine answers
//! with one action per owned unit, chosen by a fixed-priority rule chain on
//! top of a Dijkstra pathfinder and a handful of tactical queries.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session / CLI (protocol, I/O)     │
//! ├─────────────────────────────────────┤
//! │         Decision Engine             │
//! ├─────────────────────────────────────┤
//! │   Tactical Queries │ Pathfinder     │
//! ├─────────────────────────────────────┤
//! │           Grid Model                │
//! └─────────────────────────────────────┘
//! ```

pub mod engine;
pub mod error;
pub mod game;
pub mod pathfinder;
pub mod protocol;
pub mod session;
pub mod tactics;

pub use engine::{Action, ActionKind, Engine, TacticsConfig};
pub use error::{DecisionError, DecisionResult, GridError};

// Re-export key game types at crate root for convenience
pub use game::{Diamond, GridMap, Position, Team, TileType, Turn, Unit};

/// Decide every owned unit's action for `turn` with default thresholds.
///
/// Shorthand for `Engine::default().compute_actions(turn)`.
#[must_use]
pub fn compute_actions(turn: &Turn) -> Vec<Action> {
    Engine::default().compute_actions(turn)
}
