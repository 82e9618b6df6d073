// engine.rs - One B3/S23 generation over the torus, committed as a diff

use log::trace;

use crate::GridState;
use crate::topology::neighbors;

/// Cells that flipped during one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub births: usize,
    pub deaths: usize,
}

impl StepReport {
    pub fn changed(&self) -> usize {
        self.births + self.deaths
    }
}

/// Conway's rule: survive on 2 or 3 neighbours, be born on exactly 3.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes generation N+1 from a frozen copy of generation N.
///
/// The snapshot buffer is kept between steps so stepping does not allocate
/// once the board size is known.
#[derive(Debug, Default)]
pub struct GenerationEngine {
    snapshot: Vec<bool>,
}

impl GenerationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances `grid` by one generation in place.
    ///
    /// Every neighbour count reads the snapshot, never `grid`, so writes made
    /// earlier in the pass cannot leak into later counts. Only cells whose
    /// liveness changes are written back.
    pub fn step(&mut self, grid: &mut GridState) -> StepReport {
        let (rows, columns) = (grid.rows(), grid.columns());

        self.snapshot.clear();
        self.snapshot.extend_from_slice(grid.cells());

        let mut report = StepReport::default();
        for row in 0..rows {
            for column in 0..columns {
                let current = self.snapshot[row * columns + column];
                let count = live_neighbors(&self.snapshot, row, column, rows, columns);
                let next = next_state(current, count);

                if next != current {
                    grid.set(row, column, next);
                    if next {
                        report.births += 1;
                    } else {
                        report.deaths += 1;
                    }
                }
            }
        }

        trace!("generation step: {} births, {} deaths", report.births, report.deaths);
        report
    }
}

fn live_neighbors(snapshot: &[bool], row: usize, column: usize, rows: usize, columns: usize) -> u8 {
    neighbors(row, column, rows, columns)
        .iter()
        .filter(|&&(nr, nc)| snapshot[nr * columns + nc])
        .count() as u8
}
