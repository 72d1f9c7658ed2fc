use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use tracing::debug;

use crate::config::FieldConfig;
use crate::error::InvalidConfiguration;
use crate::field::*;

impl Field {
    /// Build a field with randomly placed mines.
    pub fn new(config: FieldConfig) -> Result<Self, InvalidConfiguration> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Same as [`Field::new`], but every layout (including later calls to [`Field::create`])
    /// is reproducible from `seed`.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Result<Self, InvalidConfiguration> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, rng: StdRng) -> Result<Self, InvalidConfiguration> {
        config.validate()?;
        let mut field = Self { cells: Vec::new(), config, rng };
        field.create();
        Ok(field)
    }

    /// Build a field with mines exactly at `mines`. Calling [`Field::create`] afterwards places
    /// the same number of mines at random.
    pub fn with_mines(rows: usize, cols: usize, mines: &[Coord]) -> Result<Self, InvalidConfiguration> {
        let config = FieldConfig::new(rows, cols, mines.len());
        config.validate()?;
        let mut field = Self {
            cells: vec![CellData::default(); rows*cols],
            config,
            rng: StdRng::from_os_rng(),
        };
        for &point in mines {
            let index = field.index(point).ok_or(InvalidConfiguration::MineOutOfBounds { point })?;
            if field.cells[index].has_mine() {
                return Err(InvalidConfiguration::DuplicateMine { point });
            }
            field.cells[index].place_mine();
        }
        field.count_mines();
        Ok(field)
    }

    /// Throw away every cell and lay out a fresh field with the same dimensions and mine count.
    pub fn create(&mut self) {
        let len = self.config.rows * self.config.cols;
        self.cells.clear();
        self.cells.resize(len, CellData::default());
        self.populate();
        self.count_mines();
        debug!(rows = self.config.rows, cols = self.config.cols, mines = self.config.mines, "created field");
    }

    fn populate(&mut self) {
        for index in sample(&mut self.rng, self.cells.len(), self.config.mines) {
            self.cells[index].place_mine();
        }
    }

    fn count_mines(&mut self) {
        for index in 0..self.cells.len() {
            let point = self.point(index);
            let count = self.neighbours_of(point).filter(|&p| self.get(p).is_some_and(|c| c.has_mine)).count();
            self.cells[index].set_count(count as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Level;
    use itertools::iproduct;

    fn brute_force_count(field: &Field, (row, col): Coord) -> u8 {
        iproduct!(-1..=1, -1..=1)
            .filter(|&d| d != (0, 0))
            .filter(|&(dr, dc)| field.get((row+dr, col+dc)).is_some_and(|c| c.has_mine))
            .count() as u8
    }

    #[test]
    fn exact_mine_count() {
        for seed in 0..50 {
            for level in [Level::Beginner, Level::Intermediate, Level::Expert] {
                let field = Field::with_seed(level.config(), seed).unwrap();
                assert_eq!(field.cells().filter(|(_, c)| c.has_mine).count(), level.config().mines);
            }
        }
    }

    #[test]
    fn nearly_full_field() {
        let field = Field::with_seed(FieldConfig::new(4, 5, 19), 7).unwrap();
        assert_eq!(field.cells().filter(|(_, c)| c.has_mine).count(), 19);
        let empty = Field::with_seed(FieldConfig::new(4, 5, 0), 7).unwrap();
        assert!(empty.cells().all(|(_, c)| !c.has_mine && c.adjacent_mine_count == 0));
    }

    #[test]
    fn neighbour_counts() {
        for seed in 0..20 {
            let field = Field::with_seed(FieldConfig::new(7, 11, 30), seed).unwrap();
            for (point, cell) in field.cells() {
                assert_eq!(cell.adjacent_mine_count, brute_force_count(&field, point), "at {point:?}");
            }
        }
    }

    #[test]
    fn fixed_layout_counts() {
        let field = Field::with_mines(3, 3, &[(0, 0), (2, 2)]).unwrap();
        let counts: Vec<u8> = field.cells().map(|(_, c)| c.adjacent_mine_count).collect();
        assert_eq!(counts, vec![
            0, 1, 0,
            1, 2, 1,
            0, 1, 0,
        ]);
        assert_eq!(field.mine_count(), 2);
    }

    #[test]
    fn fresh_field_is_closed() {
        let field = Field::with_seed(Level::Expert.config(), 3).unwrap();
        assert!(field.cells().all(|(_, c)| !c.is_opened && !c.has_flag));
        assert_eq!(field.closed_count(), 16 * 30);
    }

    #[test]
    fn create_resets_everything() {
        let mut field = Field::with_seed(FieldConfig::new(5, 5, 0), 1).unwrap();
        field.flag((4, 4));
        field.open((0, 0));
        assert!(field.check_win());
        field.create();
        assert!(field.cells().all(|(_, c)| !c.is_opened && !c.has_flag));
        assert!(!field.check_win());
    }

    #[test]
    fn create_keeps_mine_count() {
        let mut field = Field::with_mines(4, 4, &[(0, 0), (1, 1), (3, 2)]).unwrap();
        for _ in 0..10 {
            field.create();
            assert_eq!(field.cells().filter(|(_, c)| c.has_mine).count(), 3);
        }
    }

    #[test]
    fn seeds_are_reproducible() {
        let mines = |field: &Field| field.cells().filter(|(_, c)| c.has_mine).map(|(p, _)| p).collect::<Vec<_>>();
        let a = Field::with_seed(Level::Intermediate.config(), 42).unwrap();
        let b = Field::with_seed(Level::Intermediate.config(), 42).unwrap();
        assert_eq!(mines(&a), mines(&b));
    }

    #[test]
    fn invalid_configurations() {
        assert_eq!(
            Field::new(FieldConfig::new(2, 2, 4)).unwrap_err(),
            InvalidConfiguration::TooManyMines { mines: 4, cells: 4 },
        );
        assert_eq!(
            Field::new(FieldConfig::new(0, 2, 0)).unwrap_err(),
            InvalidConfiguration::EmptyGrid { rows: 0, cols: 2 },
        );
        assert_eq!(
            Field::with_mines(2, 2, &[(0, 0), (2, 0)]).unwrap_err(),
            InvalidConfiguration::MineOutOfBounds { point: (2, 0) },
        );
        assert_eq!(
            Field::with_mines(2, 2, &[(0, 0), (0, 0)]).unwrap_err(),
            InvalidConfiguration::DuplicateMine { point: (0, 0) },
        );
        assert_eq!(
            Field::with_mines(1, 2, &[(0, 0), (0, 1)]).unwrap_err(),
            InvalidConfiguration::TooManyMines { mines: 2, cells: 2 },
        );
    }
}
