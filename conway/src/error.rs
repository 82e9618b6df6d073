use thiserror::Error;

/// Errors raised while building a board or validating its configuration.
///
/// Cell access and stepping have no error paths; out-of-range coordinates are
/// caller bugs and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The board needs at least one row and one column.
    #[error("grid dimensions must be non-zero (got {rows}x{columns})")]
    ZeroDimension { rows: usize, columns: usize },
    /// A zero tick period would spin the clock.
    #[error("tick period must be greater than zero")]
    InvalidTickPeriod,
}
