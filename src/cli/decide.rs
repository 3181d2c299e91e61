//! Decide command implementation.

use super::output::{JsonDecision, format_decision_text};
use super::{CliError, OutputFormat};
use std::path::Path;
use tactician::protocol::read_snapshot;
use tactician::{Engine, TacticsConfig};

/// Execute the decide command: one decision pass over a stored snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded.
pub(crate) fn execute(
    snapshot: &Path,
    config: TacticsConfig,
    format: OutputFormat,
) -> Result<(), CliError> {
    let turn = read_snapshot(snapshot)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", snapshot.display())))?;
    let actions = Engine::new(config).compute_actions(&turn);

    match format {
        OutputFormat::Text => print!("{}", format_decision_text(&turn, &actions)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonDecision::new(&turn, &actions))?;
            println!("{json}");
        }
    }
    Ok(())
}
