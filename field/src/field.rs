use itertools::iproduct;
use rand::rngs::StdRng;

use crate::config::FieldConfig;

const OPENED: u8 = 1;
const FLAGGED: u8 = 1 << 1;
const MINE: u8 = 1 << 2;

#[derive(Clone, Copy, Default)]
pub(crate) struct CellData {
    /* bit-packed representation:
       x   x   x   x   x   x   x   x
       -------------       |   |   -
       mine count          |   |   opened?
                           |   |
                           |   flagged by player?
                           |
                           mine?
    */
    data: u8,
}

impl CellData {
    pub(crate) fn is_opened(self) -> bool {
        self.data & OPENED != 0
    }

    pub(crate) fn has_flag(self) -> bool {
        self.data & FLAGGED != 0
    }

    pub(crate) fn has_mine(self) -> bool {
        self.data & MINE != 0
    }

    pub(crate) fn count(self) -> u8 {
        self.data >> 4
    }

    /// Opening a cell always takes its flag away.
    pub(crate) fn open(&mut self) {
        self.data = (self.data | OPENED) & !FLAGGED;
    }

    pub(crate) fn set_flag(&mut self, flag: bool) {
        if flag {
            self.data |= FLAGGED;
        } else {
            self.data &= !FLAGGED;
        }
    }

    pub(crate) fn place_mine(&mut self) {
        self.data |= MINE;
    }

    pub(crate) fn set_count(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.data = (self.data & 0x0f) | count << 4;
    }

    fn to_cell(self) -> Cell {
        Cell {
            has_mine: self.has_mine(),
            has_flag: self.has_flag(),
            is_opened: self.is_opened(),
            adjacent_mine_count: self.count(),
        }
    }
}

/// Read-only view of one position on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub has_mine: bool,
    pub has_flag: bool,
    pub is_opened: bool,
    /// Number of mines among the in-bounds neighbours. Not meaningful for a mine.
    pub adjacent_mine_count: u8,
}

/// `(row, col)`. Signed so callers can hand over positions that fall off the grid.
pub type Coord = (isize, isize);

/// The eight positions around `point`, without any bounds checking.
pub fn adjacents((row, col): Coord) -> impl Iterator<Item=Coord> {
    [
        (row-1, col-1), (row-1, col), (row-1, col+1),
        (row, col-1), (row, col+1),
        (row+1, col-1), (row+1, col), (row+1, col+1),
    ].into_iter()
}

#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) cells: Vec<CellData>,
    pub(crate) config: FieldConfig,
    pub(crate) rng: StdRng,
}

impl std::fmt::Debug for CellData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.to_cell(), f)
    }
}

impl Field {
    /// Row-major index of `point`, or `None` if it lies outside the grid.
    pub(crate) fn index(&self, (row, col): Coord) -> Option<usize> {
        let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        (row < self.config.rows && col < self.config.cols).then(|| row*self.config.cols + col)
    }

    pub(crate) fn point(&self, index: usize) -> Coord {
        ((index / self.config.cols) as isize, (index % self.config.cols) as isize)
    }

    pub fn contains(&self, point: Coord) -> bool {
        self.index(point).is_some()
    }

    pub fn get(&self, point: Coord) -> Option<Cell> {
        self.index(point).map(|i| self.cells[i].to_cell())
    }

    /// In-bounds neighbours of `point`. Nothing wraps around the edges.
    pub fn neighbours_of(&self, point: Coord) -> impl Iterator<Item=Coord> + '_ {
        adjacents(point).filter(|&p| self.contains(p))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item=(Coord, Cell)> + '_ {
        iproduct!(0..self.config.rows as isize, 0..self.config.cols as isize)
            .zip(self.cells.iter().map(|c| c.to_cell()))
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn mine_count(&self) -> usize {
        self.config.mines
    }

    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_flag()).count()
    }

    pub fn closed_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_opened()).count()
    }

    /// Won once the only closed cells left are the mines, whatever the flags say.
    pub fn check_win(&self) -> bool {
        self.closed_count() == self.config.mines
    }
}
