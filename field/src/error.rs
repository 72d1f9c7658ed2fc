use thiserror::Error;

use crate::field::Coord;

/// Returned when a field cannot be built from the requested dimensions and mines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("a field needs at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("a {rows}x{cols} field is too large")]
    TooLarge { rows: usize, cols: usize },
    #[error("can't place {mines} mines in {cells} cells, at least one cell must be safe")]
    TooManyMines { mines: usize, cells: usize },
    #[error("mine at {point:?} is outside the field")]
    MineOutOfBounds { point: Coord },
    #[error("mine at {point:?} was placed twice")]
    DuplicateMine { point: Coord },
}
