mod config;
mod error;
mod field;
mod generator;
mod reveal;

pub use config::{FieldConfig, Level};
pub use error::InvalidConfiguration;
pub use field::{Cell, Coord, Field, adjacents};
