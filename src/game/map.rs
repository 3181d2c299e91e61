//! Grid positions, tiles, and the per-turn map view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::game::UnitId;

/// Identifier of a diamond.
pub type DiamondId = String;

/// A position on the map.
///
/// Coordinates are signed so that neighbours of edge tiles can be expressed
/// and then rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by the given offsets.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours in search order: −x, −y, +x, +y.
    #[must_use]
    #[inline]
    pub const fn neighbors(self) -> [Position; 4] {
        [
            self.offset(-1, 0),
            self.offset(0, -1),
            self.offset(1, 0),
            self.offset(0, 1),
        ]
    }

    /// The four orthogonal neighbours in scan order: −x, +x, −y, +y.
    ///
    /// Used wherever a unit looks around itself (attacks, drop tiles).
    #[must_use]
    #[inline]
    pub const fn surroundings(self) -> [Position; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether both positions share a row or a column.
    #[must_use]
    pub const fn is_aligned_with(self, other: Position) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Type of terrain on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Open ground. Units fight and lasso only from here.
    Empty,
    /// Never traversable, never holds a diamond or a unit.
    Wall,
    /// Tile where units enter the battlefield.
    Spawn,
}

impl TileType {
    /// Check if units can ever stand on this tile.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, TileType::Wall)
    }

    /// Name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TileType::Empty => "EMPTY",
            TileType::Wall => "WALL",
            TileType::Spawn => "SPAWN",
        }
    }
}

/// Error returned when a tile name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTile(pub String);

impl fmt::Display for UnknownTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile '{}' is not a valid tile", self.0)
    }
}

impl std::error::Error for UnknownTile {}

impl FromStr for TileType {
    type Err = UnknownTile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPTY" => Ok(TileType::Empty),
            "WALL" => Ok(TileType::Wall),
            "SPAWN" => Ok(TileType::Spawn),
            other => Err(UnknownTile(other.to_string())),
        }
    }
}

/// A diamond on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diamond {
    /// Unique identifier.
    pub id: DiamondId,
    /// Where the diamond lies (or where its holder stands).
    pub position: Position,
    /// Current summon level. Higher levels are worth more and take longer.
    pub summon_level: u32,
    /// Point value.
    pub points: u32,
    /// Unit currently holding the diamond, if any.
    pub owner_id: Option<UnitId>,
}

impl Diamond {
    /// Create an unowned diamond.
    #[must_use]
    pub fn new(id: impl Into<DiamondId>, position: Position, summon_level: u32) -> Self {
        Self {
            id: id.into(),
            position,
            summon_level,
            points: 0,
            owner_id: None,
        }
    }
}

/// The map for one turn: tile types plus the diamonds on the board.
#[derive(Debug, Clone)]
pub struct GridMap {
    /// Width of the map in tiles.
    width: i32,
    /// Height of the map in tiles.
    height: i32,
    /// Tiles stored in row-major order.
    tiles: Vec<TileType>,
    /// Diamonds currently on the board.
    diamonds: Vec<Diamond>,
}

impl GridMap {
    /// Create a new map filled with empty tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero or too large.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let w = i32::try_from(width).map_err(|_| invalid)?;
        let h = i32::try_from(height).map_err(|_| invalid)?;

        Ok(Self {
            width: w,
            height: h,
            tiles: vec![TileType::Empty; width * height],
            diamonds: Vec::new(),
        })
    }

    /// Build a map from tile columns, addressed `columns[x][y]`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, the first column is empty,
    /// or the columns differ in length.
    pub fn from_columns(columns: &[Vec<TileType>]) -> Result<Self, GridError> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        let mut map = Self::new(width, height)?;

        for (x, column) in columns.iter().enumerate() {
            if column.len() != height {
                return Err(GridError::RaggedColumns { column: x });
            }
            for (y, &tile) in column.iter().enumerate() {
                map.tiles[y * width + x] = tile;
            }
        }

        Ok(map)
    }

    /// Get the width of the map.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Get the height of the map.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Total number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// A map always has at least one tile.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check if a position is within the map bounds.
    #[must_use]
    pub const fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    /// Convert a position to an index into the tile array.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for positions outside the map.
    #[allow(clippy::cast_sign_loss)]
    pub fn index_of(&self, position: Position) -> Result<usize, GridError> {
        if self.in_bounds(position) {
            Ok(position.y as usize * self.width as usize + position.x as usize)
        } else {
            Err(GridError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Convert a tile index back to its position.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn position_of(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    /// Get the tile type at a position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for positions outside the map.
    pub fn tile(&self, position: Position) -> Result<TileType, GridError> {
        self.index_of(position).map(|idx| self.tiles[idx])
    }

    /// Get the tile type at a position, or `None` outside the map.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<TileType> {
        self.index_of(position).ok().map(|idx| self.tiles[idx])
    }

    /// Check whether a position is inside the map and not a wall.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.get(position).is_some_and(TileType::is_passable)
    }

    /// Check whether a position is inside the map and of the given type.
    #[must_use]
    pub fn is_tile(&self, position: Position, tile_type: TileType) -> bool {
        self.get(position) == Some(tile_type)
    }

    /// Set the tile at a position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for positions outside the map.
    pub fn set(&mut self, position: Position, tile: TileType) -> Result<(), GridError> {
        let idx = self.index_of(position)?;
        self.tiles[idx] = tile;
        Ok(())
    }

    /// Place a diamond on the board.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the diamond lies outside the map.
    pub fn add_diamond(&mut self, diamond: Diamond) -> Result<(), GridError> {
        self.index_of(diamond.position)?;
        self.diamonds.push(diamond);
        Ok(())
    }

    /// All diamonds on the board.
    #[must_use]
    pub fn diamonds(&self) -> &[Diamond] {
        &self.diamonds
    }

    /// Find a diamond by id.
    #[must_use]
    pub fn diamond(&self, id: &str) -> Option<&Diamond> {
        self.diamonds.iter().find(|d| d.id == id)
    }

    /// The diamond lying at a position, if any.
    #[must_use]
    pub fn diamond_at(&self, position: Position) -> Option<&Diamond> {
        self.diamonds.iter().find(|d| d.position == position)
    }

    /// Check whether a diamond lies at a position.
    #[must_use]
    pub fn has_diamond_at(&self, position: Position) -> bool {
        self.diamond_at(position).is_some()
    }

    /// Iterate over all positions and tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, TileType)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, &tile)| (self.position_of(idx), tile))
    }

    /// All spawn tiles in row-major order.
    pub fn spawn_tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|&(_, tile)| tile == TileType::Spawn)
            .map(|(pos, _)| pos)
    }
}
