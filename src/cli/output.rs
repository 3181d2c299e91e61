//! Output formatting utilities for CLI.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;
use tactician::protocol::CommandAction;
use tactician::{Action, Turn};

/// Every action name, in display order.
const ACTION_NAMES: [&str; 7] = ["MOVE", "SPAWN", "SUMMON", "DROP", "VINE", "ATTACK", "NONE"];

/// JSON-serializable decision pass.
#[derive(Debug, Serialize)]
pub(super) struct JsonDecision {
    /// Snapshot tick.
    pub(super) tick: u32,
    /// Team the actions are for.
    pub(super) team_id: String,
    /// Decided actions.
    pub(super) actions: Vec<CommandAction>,
}

impl JsonDecision {
    /// Create from a snapshot and its actions.
    pub(super) fn new(turn: &Turn, actions: &[Action]) -> Self {
        Self {
            tick: turn.tick,
            team_id: turn.team_id.clone(),
            actions: actions.iter().map(CommandAction::from).collect(),
        }
    }
}

/// Format one decision pass as human-readable text.
pub(super) fn format_decision_text(turn: &Turn, actions: &[Action]) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Tick {}/{} (team {}): {} action(s)",
        turn.tick,
        turn.total_ticks,
        turn.team_id,
        actions.len()
    );
    for action in actions {
        let _ = writeln!(output, "  {action}");
    }
    output
}

/// Action counts across many snapshots.
#[derive(Debug, Clone, Default, Serialize)]
pub(super) struct BatchStats {
    /// Snapshots decided.
    pub(super) snapshots: u64,
    /// Snapshots that failed to load.
    pub(super) failures: u64,
    /// Total units acted for.
    pub(super) actions: u64,
    /// Count per action name.
    pub(super) by_kind: BTreeMap<&'static str, u64>,
}

impl BatchStats {
    /// Record one decided snapshot.
    pub(super) fn add_actions(&mut self, actions: &[Action]) {
        self.snapshots += 1;
        self.actions += actions.len() as u64;
        for action in actions {
            *self.by_kind.entry(action.kind.name()).or_insert(0) += 1;
        }
    }

    /// Record a snapshot that could not be loaded.
    pub(super) fn add_failure(&mut self) {
        self.failures += 1;
    }

    /// Merge statistics from another thread.
    pub(super) fn merge(&mut self, other: &Self) {
        self.snapshots += other.snapshots;
        self.failures += other.failures;
        self.actions += other.actions;
        for (kind, count) in &other.by_kind {
            *self.by_kind.entry(*kind).or_insert(0) += count;
        }
    }
}

/// Format batch statistics as human-readable text.
#[allow(clippy::cast_precision_loss)]
pub(super) fn format_batch_text(stats: &BatchStats) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Batch Results ({} snapshots, {} failed)",
        stats.snapshots, stats.failures
    );
    let _ = writeln!(output, "  Actions: {}", stats.actions);
    for name in ACTION_NAMES {
        let count = stats.by_kind.get(name).copied().unwrap_or(0);
        let share = if stats.actions == 0 {
            0.0
        } else {
            count as f64 * 100.0 / stats.actions as f64
        };
        let _ = writeln!(output, "  {name:<7} {count:>8} ({share:5.1}%)");
    }
    output
}
