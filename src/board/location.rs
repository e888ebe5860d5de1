use std::error::Error;
use std::fmt;

/// Errors raised by board construction and coordinate math.
///
/// These signal setup-time misuse (bad coordinates, colliding placements) and
/// never occur on a play-time path: once a `BoardLocation` exists it is in
/// bounds for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The requested coordinates fall outside the 8x8 grid.
    OutOfBounds { row: i8, col: i8 },
    /// Tried to place a piece on a square that already holds one.
    LocationOccupied(BoardLocation),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "location ({row},{col}) is off the board")
            }
            BoardError::LocationOccupied(at) => {
                write!(f, "location ({},{}) is already occupied", at.row(), at.col())
            }
        }
    }
}

impl Error for BoardError {}

/// A validated square coordinate.
///
/// Row 0 is the top rank (Black's home row), row 7 the bottom (White's home
/// row); columns run left to right. Values can only be created through
/// [`BoardLocation::new`] or [`BoardLocation::offset`], so holding one is
/// proof the coordinate is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLocation {
    row: i8,
    col: i8,
}

/// Fixed visual shade of a square, derived from its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

impl BoardLocation {
    pub const fn new(row: i8, col: i8) -> Result<Self, BoardError> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(Self { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Moves this location by a row and column delta, failing if the result
    /// would leave the board.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Result<Self, BoardError> {
        Self::new(self.row + d_row, self.col + d_col)
    }

    pub const fn shade(self) -> SquareShade {
        if (self.row + self.col) % 2 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| Self { row, col }))
    }
}
