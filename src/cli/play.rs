//! Play command implementation.

use super::CliError;
use tactician::protocol::Registration;
use tactician::session::Session;
use tactician::{Engine, TacticsConfig};

/// Execute the play command: a session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the transport fails.
pub(crate) fn execute(
    config: TacticsConfig,
    token: Option<String>,
    team_name: String,
) -> Result<(), CliError> {
    let registration = match token {
        Some(token) => Registration::Token(token),
        None => Registration::TeamName(team_name),
    };

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let summary = Session::new(Engine::new(config), stdin, stdout, registration).run()?;

    tracing::info!(
        ticks = summary.ticks_played,
        actions = summary.actions_sent,
        "game over"
    );
    Ok(())
}
