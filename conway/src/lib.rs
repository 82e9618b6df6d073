// lib.rs - Conway's Game of Life on a toroidal board
//
// The board state, the wraparound neighbourhood, the B3/S23 generation step
// and the run/pause/reset controller. Rendering, input and the clock live in
// the host crate and call in through `SimulationController`.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod topology;

pub use config::LifeConfig;
pub use controller::{RunState, SharedController, SimulationController, lock};
pub use engine::{GenerationEngine, StepReport, next_state};
pub use error::LifeError;
pub use grid::GridState;
pub use topology::{neighbors, wrap};
