// controller.rs - Run/pause state machine gating the generation clock

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::{GenerationEngine, GridState, LifeConfig, LifeError, StepReport};

/// Whether clock ticks advance the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// The controller shared between the host's clock task and its UI thread.
/// One lock covers the board and the run state.
pub type SharedController = Arc<Mutex<SimulationController>>;

/// Locks the shared controller.
///
/// A panic while the lock was held leaves the board consistent (every
/// operation writes whole cells), so a poisoned lock is taken over.
pub fn lock(shared: &SharedController) -> MutexGuard<'_, SimulationController> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the board and decides when it advances.
#[derive(Debug)]
pub struct SimulationController {
    grid: GridState,
    engine: GenerationEngine,
    state: RunState,
    generation: u64,
}

impl SimulationController {
    pub fn new(config: &LifeConfig) -> Result<Self, LifeError> {
        config.validate()?;
        Ok(Self::with_grid(GridState::new(config.rows, config.columns)?))
    }

    /// Wraps an existing board; starts stopped at generation 0.
    pub fn with_grid(grid: GridState) -> Self {
        Self {
            grid,
            engine: GenerationEngine::new(),
            state: RunState::Stopped,
            generation: 0,
        }
    }

    pub fn into_shared(self) -> SharedController {
        Arc::new(Mutex::new(self))
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Generations computed since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Flips between stopped and running, once per call.
    pub fn toggle_run(&mut self) -> RunState {
        self.state = self.state.toggled();
        debug!("simulation {:?} at generation {}", self.state, self.generation);
        self.state
    }

    /// Kills every cell. The run state is left alone.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        debug!("board reset while {:?}", self.state);
    }

    /// Called by the host clock. Advances one generation when running.
    pub fn tick(&mut self) -> Option<StepReport> {
        if !self.state.is_running() {
            return None;
        }
        let report = self.engine.step(&mut self.grid);
        self.generation += 1;
        Some(report)
    }

    /// Sets one cell directly, outside the generation rule.
    pub fn edit_cell(&mut self, row: usize, column: usize, alive: bool) {
        self.grid.set(row, column, alive);
    }

    /// Flips one cell and returns its new liveness.
    pub fn toggle_cell(&mut self, row: usize, column: usize) -> bool {
        let alive = !self.grid.get(row, column);
        self.edit_cell(row, column, alive);
        alive
    }
}
