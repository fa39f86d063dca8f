//! Disc counting over a board snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::color::Color;
use crate::errors::domain::DomainError;

/// One board square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl TryFrom<u8> for Cell {
    type Error = DomainError;

    /// Wire codes: 0 = empty, 1 = black, 2 = white.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            2 => Ok(Cell::White),
            other => Err(DomainError::malformed_grid(format!("unknown cell code {other}"))),
        }
    }
}

/// Row-major board snapshot owned by the board engine.
pub type BoardGrid = Vec<Vec<Cell>>;

/// A square a player may currently play, as reported by the board engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

/// Decode an integer-coded grid.
pub fn grid_from_codes(rows: &[Vec<u8>]) -> Result<BoardGrid, DomainError> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&code| Cell::try_from(code))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub black_score: u32,
    pub white_score: u32,
}

impl ScorePair {
    pub fn for_color(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_score,
            Color::White => self.white_score,
        }
    }
}

/// Count Black and White discs. Empty squares count for neither side.
///
/// Rows must all have the same length; a ragged grid is rejected as
/// `MalformedGrid` rather than scored.
pub fn compute_score(grid: &[Vec<Cell>]) -> Result<ScorePair, DomainError> {
    let width = grid.first().map_or(0, Vec::len);
    let mut score = ScorePair::default();

    for (y, row) in grid.iter().enumerate() {
        if row.len() != width {
            return Err(DomainError::malformed_grid(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
        for cell in row {
            match cell {
                Cell::Black => score.black_score += 1,
                Cell::White => score.white_score += 1,
                Cell::Empty => {}
            }
        }
    }

    Ok(score)
}
