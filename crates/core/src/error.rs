use thiserror::Error;

use crate::types::Pos;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position {pos:?} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Pos, rows: usize, cols: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid {rows}x{cols} leaves no interior inside a border margin of {margin}")]
    InteriorTooSmall { rows: usize, cols: usize, margin: usize },

    #[error("room sizes must satisfy 2 <= min ({min}) <= max ({max})")]
    RoomSizeRange { min: usize, max: usize },

    #[error("{field} must be a finite value in [0, 1], got {value}")]
    UnitInterval { field: &'static str, value: f64 },

    #[error("{field} must be finite and non-negative, got {value}")]
    NegativeDistance { field: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaveError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
