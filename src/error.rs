//! Errors raised while building or parsing puzzle boards.
//!
//! A malformed board is rejected up front: every public constructor of
//! [`Board`](crate::engine::Board) validates its input, so the search code
//! never sees a grid with a missing blank or a duplicated tile.

/// Errors that can occur when a board is constructed from raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// The input did not contain exactly `BOARD_SIZE` rows.
    #[error("Invalid number of rows. Expected {expected}, found {found}")]
    InvalidRowCount {
        /// Always `BOARD_SIZE`.
        expected: usize,
        /// Rows actually supplied.
        found: usize,
    },

    /// A row did not contain exactly `BOARD_SIZE` cells.
    #[error("Row {row} has {found} cells (expected {expected})")]
    InvalidRowLength {
        /// 0-based row index.
        row: usize,
        /// Always `BOARD_SIZE`.
        expected: usize,
        /// Cells actually supplied.
        found: usize,
    },

    /// A single-line board did not contain exactly `CELL_COUNT` cells.
    #[error("Expected {expected} cells, found {found}")]
    InvalidCellCount {
        /// Always `CELL_COUNT`.
        expected: usize,
        /// Cells actually supplied.
        found: usize,
    },

    /// A character that is neither a tile digit nor a blank marker.
    #[error("Unrecognized character '{character}' in row {row}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// 0-based row index.
        row: usize,
    },

    /// A tile value outside `0..=8`.
    #[error("Tile value {value} at ({row}, {col}) is out of range 0..=8")]
    TileOutOfRange {
        /// The offending value.
        value: u8,
        /// 0-based row index.
        row: usize,
        /// 0-based column index.
        col: usize,
    },

    /// The board must contain exactly one blank (`0`).
    #[error("Expected exactly one blank tile, found {0}")]
    BlankCount(usize),

    /// A non-blank tile appears more than once.
    #[error("Tile {0} appears more than once")]
    DuplicateTile(u8),

    /// A puzzle file must hold one board (3 lines) or a board and a goal (6 lines).
    #[error("Expected 3 or 6 board lines in puzzle input, found {0}")]
    InvalidLineCount(usize),
}

impl PuzzleError {
    /// Returns `true` if the error concerns the shape of the input rather than tile values.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRowCount { .. }
                | Self::InvalidRowLength { .. }
                | Self::InvalidCellCount { .. }
                | Self::InvalidLineCount(_)
        )
    }
}
