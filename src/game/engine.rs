use super::grid::{Cell, Grid};
use super::rule::Rule;

/// Result of advancing the grid one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// At least one cell was alive before the step. The controller stops
    /// simulating when this turns false. A still life keeps it true forever.
    pub activity: bool,
    /// At least one cell differs from the previous generation
    pub changed: bool,
    /// Live cells after the step
    pub population: usize,
}

/// Applies a birth/survival rule to a toroidal grid
#[derive(Debug, Clone, Default)]
pub struct LifeEngine {
    rule: Rule,
}

impl LifeEngine {
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Advance `grid` one generation in place
    ///
    /// Neighbor counts are taken from a snapshot of the current generation,
    /// so cells written earlier in the pass never influence later ones.
    pub fn step(&self, grid: &mut Grid) -> StepResult {
        let snapshot = grid.clone();
        let mut activity = false;
        let mut changed = false;
        let mut population = 0;

        for row in 0..snapshot.height() {
            for col in 0..snapshot.width() {
                let was_alive = snapshot.is_alive(row, col);
                let neighbors = snapshot.neighbor_count(row, col);
                let alive = self.rule.next_state(was_alive, neighbors);

                activity |= was_alive;
                changed |= alive != was_alive;
                if alive {
                    population += 1;
                }

                grid.set(row, col, Cell::from(alive));
            }
        }

        tracing::trace!(activity, changed, population, "generation computed");

        StepResult {
            activity,
            changed,
            population,
        }
    }
}
