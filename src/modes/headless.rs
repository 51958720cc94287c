//! Headless mode
//!
//! Runs the automaton without a terminal for a fixed number of generations,
//! stopping early once a step finds the board empty. Useful for checking a
//! pattern file or scripting runs.

use crate::game::{Grid, LifeConfig, LifeEngine};

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessReport {
    /// Generations that had at least one living cell going in
    pub generations: u64,
    /// The board died out before the generation limit
    pub extinct: bool,
    /// Last step produced no change (fixed point)
    pub settled: bool,
    pub grid: Grid,
}

pub struct HeadlessRun {
    engine: LifeEngine,
    grid: Grid,
}

impl HeadlessRun {
    pub fn new(config: &LifeConfig, grid: Grid) -> Self {
        Self {
            engine: LifeEngine::new(config.rule),
            grid,
        }
    }

    /// Step up to `limit` generations
    pub fn run(mut self, limit: u64) -> HeadlessReport {
        let mut generations = 0;
        let mut extinct = false;
        let mut settled = false;

        while generations < limit {
            let result = self.engine.step(&mut self.grid);
            if !result.activity {
                extinct = true;
                break;
            }
            generations += 1;
            settled = !result.changed;
        }

        tracing::info!(generations, extinct, settled, population = self.grid.population(), "headless run finished");

        HeadlessReport {
            generations,
            extinct,
            settled,
            grid: self.grid,
        }
    }
}
