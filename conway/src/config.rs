// config.rs - Board size and clock period supplied by the host

use std::time::Duration;

use crate::LifeError;

pub const DEFAULT_ROWS: usize = 40;                                  // Used when the host has no viewport yet
pub const DEFAULT_COLUMNS: usize = 75;                               // Matches the cells-per-row of the host layout
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100); // One generation every 100 ms

/// Construction-time settings for a board. Nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: usize,
    pub columns: usize,
    /// How often the host clock calls `SimulationController::tick`.
    pub tick_period: Duration,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}

impl LifeConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LifeError::ZeroDimension {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.tick_period.is_zero() {
            return Err(LifeError::InvalidTickPeriod);
        }
        Ok(())
    }
}
