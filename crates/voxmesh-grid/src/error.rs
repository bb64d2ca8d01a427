use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimension {axis} must be positive, got {value}")]
    NonPositiveDimension { axis: char, value: i64 },

    #[error("grid dimension {axis} is {value}, cell coordinates are limited to i32")]
    AxisTooLarge { axis: char, value: usize },

    #[error("grid of {sx}x{sy}x{sz} cells overflows the address space")]
    VolumeOverflow { sx: usize, sy: usize, sz: usize },

    #[error("expected {expected} blocks for the grid, got {actual}")]
    BlockCountMismatch { expected: usize, actual: usize },
}
