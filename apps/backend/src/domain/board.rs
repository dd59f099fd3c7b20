//! Core board types: marks, the 3x3 grid, win and draw detection.

use std::fmt;

use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Stored form of an empty board.
pub const EMPTY_BOARD: &str = "_________";

/// Player mark on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Decode a stored one-character mark column.
    pub fn from_stored(raw: &str) -> Result<Mark, DomainError> {
        match raw {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            _ => Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Stored mark is not X or O: {raw:?}"),
            )),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// Cell indices of the eight winning lines: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 board. Cells are addressed by 1-based position 1..=9, reading
/// left-to-right, top-to-bottom, matching the wire format.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Board([Option<Mark>; BOARD_CELLS]);

impl Board {
    pub fn empty() -> Self {
        Board([None; BOARD_CELLS])
    }

    /// Decode the stored nine-character string ('X', 'O', '_' per cell).
    pub fn from_stored(raw: &str) -> Result<Self, DomainError> {
        let mut cells = [None; BOARD_CELLS];
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Stored board has {} cells instead of 9", chars.len()),
            ));
        }
        for (i, c) in chars.iter().enumerate() {
            cells[i] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '_' => None,
                other => {
                    return Err(DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("Stored board has invalid cell {other:?}"),
                    ))
                }
            };
        }
        Ok(Board(cells))
    }

    /// Encode to the stored nine-character string.
    pub fn to_stored(self) -> String {
        self.0
            .iter()
            .map(|cell| cell.map_or('_', Mark::as_char))
            .collect()
    }

    /// Mark at the given 1-based position, or `None` if empty or out of range.
    pub fn cell(&self, pos: u8) -> Option<Mark> {
        if !(1..=BOARD_CELLS as u8).contains(&pos) {
            return None;
        }
        self.0[(pos - 1) as usize]
    }

    /// Place a mark at the given 1-based position.
    pub fn place(&mut self, pos: u8, mark: Mark) -> Result<(), DomainError> {
        if !(1..=BOARD_CELLS as u8).contains(&pos) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPosition,
                format!("Position {pos} is outside 1..=9"),
            ));
        }
        let idx = (pos - 1) as usize;
        if self.0[idx].is_some() {
            return Err(DomainError::validation(
                ValidationKind::PositionOccupied,
                format!("Position {pos} is already occupied"),
            ));
        }
        self.0[idx] = Some(mark);
        Ok(())
    }

    /// True if the given mark holds a complete row, column, or diagonal.
    pub fn is_won_by(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.0[i] == Some(mark)))
    }

    /// True if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
