use rand::Rng;
use thiserror::Error;

use super::action::Direction;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Errors raised while creating a grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("could not allocate a {height}x{width} grid")]
    Allocation { height: usize, width: usize },
}

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in a direction, wrapping around a `height` x `width` torus
    pub fn wrapped_step(&self, direction: Direction, height: usize, width: usize) -> Self {
        let (dy, dx) = direction.delta();
        Self {
            row: wrap(self.row, dy, height),
            col: wrap(self.col, dx, width),
        }
    }
}

/// `(index + size + delta) % size` for a delta in `-1..=1`
fn wrap(index: usize, delta: i32, size: usize) -> usize {
    match delta {
        d if d < 0 => (index + size - 1) % size,
        0 => index % size,
        _ => (index + 1) % size,
    }
}

/// Toroidal grid of cells stored row-major in one contiguous buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }

        let len = height
            .checked_mul(width)
            .ok_or(GridError::Allocation { height, width })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::Allocation { height, width })?;
        cells.resize(len, Cell::Dead);

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_alive()
    }

    /// Flip a single cell and return its new state
    pub fn toggle(&mut self, pos: Position) -> Cell {
        let idx = self.index(pos.row, pos.col);
        self.cells[idx] = self.cells[idx].toggled();
        self.cells[idx]
    }

    /// Kill every cell in place
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Count live cells among the 8 neighbors, wrapping around all edges
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dy == 0 && dx == 0 {
                    continue;
                }
                let r = wrap(row, dy, self.height);
                let c = wrap(col, dx, self.width);
                if self.is_alive(r, c) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    /// Rows in top-to-bottom order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Copy the overlapping region of `other` into this grid
    pub fn overwrite_with(&mut self, other: &Grid) {
        let rows = self.height.min(other.height);
        let cols = self.width.min(other.width);

        for row in 0..rows {
            for col in 0..cols {
                self.set(row, col, other.get(row, col));
            }
        }
    }

    /// Fill the grid at random, each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        // NaN passes through clamp and would panic in gen_bool
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in &mut self.cells {
            *cell = Cell::from(rng.gen_bool(density));
        }
    }
}
