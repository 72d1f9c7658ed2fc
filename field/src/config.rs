use crate::error::InvalidConfiguration;

/// Dimensions and mine count of a field. Fixed for the lifetime of a [`Field`](crate::Field).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl FieldConfig {
    pub fn new(rows: usize, cols: usize, mines: usize) -> Self {
        Self { rows, cols, mines }
    }

    /// Total number of cells, or an error if the grid is empty or doesn't fit in memory.
    pub fn cells(&self) -> Result<usize, InvalidConfiguration> {
        let Self { rows, cols, .. } = *self;
        if rows == 0 || cols == 0 {
            return Err(InvalidConfiguration::EmptyGrid { rows, cols });
        }
        // coordinates are signed, so every index has to fit in an isize
        rows.checked_mul(cols)
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or(InvalidConfiguration::TooLarge { rows, cols })
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        let cells = self.cells()?;
        if self.mines >= cells {
            return Err(InvalidConfiguration::TooManyMines { mines: self.mines, cells });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Level {
    #[cfg_attr(feature = "clap", value(alias = "easy"))]
    Beginner,
    #[cfg_attr(feature = "clap", value(alias = "medium"))]
    Intermediate,
    #[cfg_attr(feature = "clap", value(alias = "hard"))]
    Expert,
}
use Level::*;

impl Level {
    pub fn config(self) -> FieldConfig {
        match self {
            Beginner => FieldConfig::new(9, 9, 10),
            Intermediate => FieldConfig::new(16, 16, 40),
            Expert => FieldConfig::new(16, 30, 99),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Beginner.config()
    }
}
