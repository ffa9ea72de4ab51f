//! Tile-space coordinates shared by the world collaborator and save records.

use core::fmt;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 2]", into = "[i32; 2]"))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[i32; 2]> for Position {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for [i32; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}

/// Axis-aligned area in tile coordinates.
///
/// Every entity occupies a 1×1 rect at its position; the world answers
/// walkability and collision queries in terms of rects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Position,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(origin: Position, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// A single tile at `position`.
    pub const fn tile(position: Position) -> Self {
        Self::new(position, 1, 1)
    }

    pub const fn left(&self) -> i32 {
        self.origin.x
    }

    pub const fn top(&self) -> i32 {
        self.origin.y
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.origin.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.height
    }

    pub const fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub const fn translate(self, direction: Direction) -> Self {
        Self::new(self.origin.step(direction), self.width, self.height)
    }

    /// Tile containing the centre of the rect.
    pub const fn center(&self) -> Position {
        Position::new(
            self.origin.x + self.width / 2,
            self.origin.y + self.height / 2,
        )
    }
}

/// Four-way movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}
