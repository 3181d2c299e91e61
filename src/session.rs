//! Line-oriented game session.
//!
//! The session registers, then answers every snapshot line from the server
//! with one command line. Transport setup (websocket, pipe, file) is left to
//! the caller; the session only needs a reader and a writer.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::engine::Engine;
use crate::protocol::{BotMessage, ProtocolError, Registration, parse_tick};

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Snapshots answered with a command.
    pub ticks_played: u32,
    /// Lines that could not be parsed.
    pub skipped_messages: u32,
    /// Actions sent across all ticks.
    pub actions_sent: usize,
}

/// A bot session over a reader/writer pair.
#[derive(Debug)]
pub struct Session<R, W> {
    engine: Engine,
    input: R,
    output: W,
    registration: Registration,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session.
    #[must_use]
    pub fn new(engine: Engine, input: R, output: W, registration: Registration) -> Self {
        Self {
            engine,
            input,
            output,
            registration,
        }
    }

    /// Register, then play until the input ends.
    ///
    /// Malformed snapshots, including lines that are not UTF-8, are logged
    /// and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the transport fails.
    pub fn run(mut self) -> Result<SessionSummary, ProtocolError> {
        self.send(&BotMessage::register(&self.registration))?;

        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                warn!("skipping snapshot that is not valid UTF-8");
                summary.skipped_messages += 1;
                continue;
            };
            let message = line.trim();
            if message.is_empty() {
                continue;
            }

            let turn = match parse_tick(message) {
                Ok(turn) => turn,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable snapshot");
                    summary.skipped_messages += 1;
                    continue;
                }
            };

            info!(tick = turn.tick, total = turn.total_ticks, "playing tick");
            if let Some(team) = turn.own_team() {
                for error in &team.errors {
                    warn!(tick = turn.tick, %error, "server rejected a command");
                }
            }

            let actions = self.engine.compute_actions(&turn);
            summary.actions_sent += actions.len();
            summary.ticks_played += 1;
            self.send(&BotMessage::command(turn.tick, &actions))?;
        }

        info!(
            ticks = summary.ticks_played,
            skipped = summary.skipped_messages,
            "session ended"
        );
        Ok(summary)
    }

    fn send(&mut self, message: &BotMessage) -> Result<(), ProtocolError> {
        let json = message.to_json()?;
        writeln!(self.output, "{json}")?;
        self.output.flush()?;
        Ok(())
    }
}
