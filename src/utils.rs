use crate::engine::{Board, BLANK, BOARD_SIZE, CELL_COUNT};
use crate::error::PuzzleError;
use std::str::FromStr;

/// Parses the cells of one line of text.
///
/// Digits `0`-`8` are tiles, `.` and `_` are the blank. Whitespace and commas
/// between cells are ignored.
fn parse_cells(line: &str, row: usize) -> Result<Vec<u8>, PuzzleError> {
    let mut cells = Vec::with_capacity(BOARD_SIZE);
    for character in line.chars() {
        match character {
            '.' | '_' => cells.push(BLANK),
            '0'..='8' => cells.push(character as u8 - b'0'),
            c if c.is_whitespace() || c == ',' => {}
            _ => return Err(PuzzleError::UnrecognizedCharacter { character, row }),
        }
    }
    Ok(cells)
}

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from row 0. There must be exactly
/// `BOARD_SIZE` rows of exactly `BOARD_SIZE` cells each.
///
/// Valid characters for cells are:
/// - `'1'`..`'8'`: the tile with that number
/// - `'0'`, `'.'`, `'_'`: the blank
///
/// Spaces and commas between cells are ignored, so `"1 2 3"`, `"1,2,3"` and
/// `"123"` are the same row.
///
/// # Arguments
/// * `s`: A slice of string slices representing the rows of the board.
///
/// # Returns
/// * `Ok(Board)` if parsing and validation succeed.
/// * `Err(PuzzleError)` if:
///     - The number of rows is not `BOARD_SIZE`.
///     - A row does not hold exactly `BOARD_SIZE` cells.
///     - A character is not a cell, a space or a comma.
///     - The tiles are not a permutation of `0..=8` (see [`Board::from_grid`]).
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["1 2 3", "4 . 5", "7 8 6"]).unwrap();
/// assert_eq!(board.tile(1, 2), 5);
/// assert_eq!(board.blank_position(), (1, 1));
///
/// assert!(board_from_str_array(&["1 2 3", "4 x 5", "7 8 6"]).is_err());
/// assert!(board_from_str_array(&["1 2 3", "4 0 5"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, PuzzleError> {
    if s.len() != BOARD_SIZE {
        return Err(PuzzleError::InvalidRowCount {
            expected: BOARD_SIZE,
            found: s.len(),
        });
    }

    let rows = s
        .iter()
        .enumerate()
        .map(|(r, line)| parse_cells(line, r))
        .collect::<Result<Vec<_>, _>>()?;

    Board::from_rows(&rows)
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parses a board written on one line as nine cells in row-major order,
    /// e.g. `"123405786"` or `"1,2,3,4,_,5,7,8,6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = parse_cells(s, 0)?;
        if cells.len() != CELL_COUNT {
            return Err(PuzzleError::InvalidCellCount {
                expected: CELL_COUNT,
                found: cells.len(),
            });
        }
        let rows: Vec<&[u8]> = cells.chunks(BOARD_SIZE).collect();
        Board::from_rows(&rows)
    }
}

/// Parses the contents of a puzzle file.
///
/// Blank lines and lines starting with `#` are skipped. The remaining lines
/// must be either three rows (the initial board, solved towards the default
/// goal) or six rows (the initial board followed by the goal board).
///
/// # Returns
/// A tuple of the initial board and the goal board, if one was given.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::parse_puzzle;
///
/// let text = "# start\n2 8 3\n1 6 4\n7 0 5\n\n# goal\n1 2 3\n8 0 4\n7 6 5\n";
/// let (initial, goal) = parse_puzzle(text).unwrap();
/// assert_eq!(initial.blank_position(), (2, 1));
/// assert_eq!(goal.unwrap().blank_position(), (1, 1));
/// ```
pub fn parse_puzzle(content: &str) -> Result<(Board, Option<Board>), PuzzleError> {
    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .collect();

    match lines.len() {
        3 => Ok((board_from_str_array(&lines)?, None)),
        6 => {
            let initial = board_from_str_array(&lines[..BOARD_SIZE])?;
            let goal = board_from_str_array(&lines[BOARD_SIZE..])?;
            Ok((initial, Some(goal)))
        }
        n => Err(PuzzleError::InvalidLineCount(n)),
    }
}
