//! JSON messages exchanged with the game server.
//!
//! Incoming snapshots are parsed into wire structs mirroring the server's
//! field names, then validated into a [`Turn`]. Outgoing messages are the
//! registration handshake and one command batch per tick.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::Action;
use crate::error::GridError;
use crate::game::{
    Diamond, GameConfig, GridMap, Position, Team, TileType, Turn, TurnOrder, Unit, UnitEvents,
    UnknownTile,
};

/// Error type for protocol operations.
#[derive(Debug)]
pub enum ProtocolError {
    /// Reading or writing the transport failed.
    Io(std::io::Error),
    /// A message is not valid JSON or does not match the expected shape.
    Json(serde_json::Error),
    /// A tile name is not recognised.
    Tile(UnknownTile),
    /// The map or a diamond violates grid bounds.
    Grid(GridError),
    /// A turn-order key is not a tick number.
    OrderKey(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "malformed message: {e}"),
            Self::Tile(e) => write!(f, "invalid map: {e}"),
            Self::Grid(e) => write!(f, "invalid map: {e}"),
            Self::OrderKey(key) => write!(f, "turn-order key '{key}' is not a tick number"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Tile(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::OrderKey(_) => None,
        }
    }
}

impl From<std::io::Error> for ProtocolError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<UnknownTile> for ProtocolError {
    fn from(e: UnknownTile) -> Self {
        Self::Tile(e)
    }
}

impl From<GridError> for ProtocolError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Snapshot sent by the server every tick.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickMessage {
    /// Current tick.
    pub tick: u32,
    /// Number of ticks in the game.
    pub total_tick: u32,
    /// Our team.
    pub team_id: String,
    /// All teams.
    pub teams: Vec<TeamMessage>,
    /// The map.
    pub map: MapMessage,
    /// Game constants.
    pub game_config: GameConfigMessage,
    /// Resolution order keyed by tick number.
    #[serde(default)]
    pub team_play_orderings: BTreeMap<String, Vec<String>>,
}

/// A team as sent by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMessage {
    /// Team id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current score.
    pub score: i64,
    /// Units in server order.
    pub units: Vec<UnitMessage>,
    /// Rejected commands from the previous tick.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A unit as sent by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitMessage {
    /// Unit id.
    pub id: String,
    /// Owning team.
    pub team_id: String,
    /// Carrying a diamond.
    pub has_diamond: bool,
    /// On the battlefield.
    pub has_spawned: bool,
    /// Channelling a summon.
    pub is_summoning: bool,
    /// Previous tick's events.
    #[serde(default)]
    pub last_state: UnitStateMessage,
    /// Carried diamond.
    #[serde(default)]
    pub diamond_id: Option<String>,
    /// Position, absent while off the battlefield.
    #[serde(default)]
    pub position: Option<Position>,
}

/// Previous tick's events for a unit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitStateMessage {
    /// Unit that vined this one.
    #[serde(default)]
    pub was_vined_by: Option<String>,
    /// Position before the tick resolved.
    #[serde(default)]
    pub position_before: Option<Position>,
    /// Unit that attacked this one.
    #[serde(default)]
    pub was_attacked_by: Option<String>,
}

/// The map as sent by the server: tile names addressed `tiles[x][y]`.
#[derive(Debug, Clone, Deserialize)]
pub struct MapMessage {
    /// Tile names, one column per x.
    pub tiles: Vec<Vec<String>>,
    /// Diamonds on the board.
    pub diamonds: Vec<DiamondMessage>,
}

/// A diamond as sent by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondMessage {
    /// Diamond id.
    pub id: String,
    /// Position.
    pub position: Position,
    /// Summon level.
    pub summon_level: u32,
    /// Point value.
    pub points: u32,
    /// Holding unit.
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// Game constants as sent by the server.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfigMessage {
    /// Points per diamond.
    pub points_per_diamond: u32,
    /// Highest summon level.
    pub maximum_diamond_summon_level: u32,
    /// Level of new diamonds.
    pub initial_diamond_summon_level: u32,
}

impl From<UnitMessage> for Unit {
    fn from(msg: UnitMessage) -> Self {
        Self {
            id: msg.id,
            team_id: msg.team_id,
            position: msg.position,
            has_diamond: msg.has_diamond,
            has_spawned: msg.has_spawned,
            is_summoning: msg.is_summoning,
            diamond_id: msg.diamond_id,
            last_state: UnitEvents {
                was_vined_by: msg.last_state.was_vined_by,
                position_before: msg.last_state.position_before,
                was_attacked_by: msg.last_state.was_attacked_by,
            },
        }
    }
}

impl From<TeamMessage> for Team {
    fn from(msg: TeamMessage) -> Self {
        Self {
            id: msg.id,
            name: msg.name,
            score: msg.score,
            units: msg.units.into_iter().map(Unit::from).collect(),
            errors: msg.errors,
        }
    }
}

impl From<GameConfigMessage> for GameConfig {
    fn from(msg: GameConfigMessage) -> Self {
        Self {
            points_per_diamond: msg.points_per_diamond,
            max_summon_level: msg.maximum_diamond_summon_level,
            initial_summon_level: msg.initial_diamond_summon_level,
        }
    }
}

impl TryFrom<MapMessage> for GridMap {
    type Error = ProtocolError;

    fn try_from(msg: MapMessage) -> Result<Self, Self::Error> {
        let columns = msg
            .tiles
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|name| name.parse::<TileType>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut map = GridMap::from_columns(&columns)?;
        for d in msg.diamonds {
            map.add_diamond(Diamond {
                id: d.id,
                position: d.position,
                summon_level: d.summon_level,
                points: d.points,
                owner_id: d.owner_id,
            })?;
        }
        Ok(map)
    }
}

impl TryFrom<TickMessage> for Turn {
    type Error = ProtocolError;

    fn try_from(msg: TickMessage) -> Result<Self, Self::Error> {
        let mut turn_order = TurnOrder::new();
        for (key, order) in msg.team_play_orderings {
            let tick = key
                .trim()
                .parse::<u32>()
                .map_err(|_| ProtocolError::OrderKey(key.clone()))?;
            turn_order.insert(tick, order);
        }

        Ok(Turn {
            tick: msg.tick,
            total_ticks: msg.total_tick,
            team_id: msg.team_id,
            teams: msg.teams.into_iter().map(Team::from).collect(),
            map: GridMap::try_from(msg.map)?,
            config: msg.game_config.into(),
            turn_order,
        })
    }
}

/// Parse and validate one snapshot.
///
/// # Errors
///
/// Returns an error for malformed JSON or an invalid map.
pub fn parse_tick(json: &str) -> Result<Turn, ProtocolError> {
    let msg: TickMessage = serde_json::from_str(json)?;
    Turn::try_from(msg)
}

/// Read and validate a snapshot stored in a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid
/// snapshot.
pub fn read_snapshot(path: &Path) -> Result<Turn, ProtocolError> {
    let json = std::fs::read_to_string(path)?;
    parse_tick(&json)
}

/// One action in a command batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandAction {
    /// Action name: MOVE, SPAWN, SUMMON, DROP, VINE, ATTACK or NONE.
    pub action: &'static str,
    /// Acting unit.
    pub unit_id: String,
    /// Target tile, when the action has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Position>,
    /// Entity type; always `UNIT`.
    #[serde(rename = "type")]
    pub entity: &'static str,
}

impl From<&Action> for CommandAction {
    fn from(action: &Action) -> Self {
        Self {
            action: action.kind.name(),
            unit_id: action.unit_id.clone(),
            target: action.target(),
            entity: "UNIT",
        }
    }
}

/// How the bot identifies itself when registering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// Registration token handed out by the server operator.
    Token(String),
    /// Team name for local games.
    TeamName(String),
}

/// Messages the bot sends to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BotMessage {
    /// Registration handshake.
    Register {
        /// Registration token.
        #[serde(skip_serializing_if = "Option::is_none")]
        token: Option<String>,
        /// Team name.
        #[serde(rename = "teamName", skip_serializing_if = "Option::is_none")]
        team_name: Option<String>,
    },
    /// Actions for one tick.
    Command {
        /// Tick the actions are for.
        tick: u32,
        /// One entry per decided unit.
        actions: Vec<CommandAction>,
    },
}

impl BotMessage {
    /// Build the registration message.
    #[must_use]
    pub fn register(registration: &Registration) -> Self {
        match registration {
            Registration::Token(token) => Self::Register {
                token: Some(token.clone()),
                team_name: None,
            },
            Registration::TeamName(name) => Self::Register {
                token: None,
                team_name: Some(name.clone()),
            },
        }
    }

    /// Build the command batch for a tick.
    #[must_use]
    pub fn command(tick: u32, actions: &[Action]) -> Self {
        Self::Command {
            tick,
            actions: actions.iter().map(CommandAction::from).collect(),
        }
    }

    /// Serialize to a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
