//! Pattern file loading
//!
//! A pattern file is plain text, one grid row per line. The character `1`
//! marks a live cell and anything else a dead one. Short lines and missing
//! rows are dead, characters past the grid width are ignored, and a read
//! error partway through keeps whatever was read so far. The only hard
//! failure is a file that cannot be opened.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::game::{Cell, Grid, GridError};

/// Errors surfaced while loading a pattern
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("file cannot be opened: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target grid could not be created
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Source of initial grid configurations
pub trait PatternLoader {
    /// Open `path` and parse it into a `height` x `width` grid
    fn open_and_parse(&self, path: &Path, height: usize, width: usize) -> Result<Grid, LoadError>;
}

/// Loads patterns from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl FileLoader {
    pub fn new() -> Self {
        Self
    }
}

impl PatternLoader for FileLoader {
    fn open_and_parse(&self, path: &Path, height: usize, width: usize) -> Result<Grid, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let grid = parse_pattern(BufReader::new(file), height, width)?;
        tracing::debug!(
            path = %path.display(),
            population = grid.population(),
            "pattern parsed"
        );
        Ok(grid)
    }
}

/// Parse pattern text into a `height` x `width` grid
///
/// Reads at most `height` lines. Stops early without error on EOF or a read
/// failure.
pub fn parse_pattern<R: BufRead>(mut reader: R, height: usize, width: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::new(height, width)?;
    let mut line = Vec::with_capacity(width + 2);

    for row in 0..height {
        line.clear();
        let read = reader.read_until(b'\n', &mut line);

        // Bytes read before a failure still count
        let cells = line
            .iter()
            .take_while(|&&b| b != b'\n')
            .take(width)
            .enumerate();
        for (col, &byte) in cells {
            grid.set(row, col, Cell::from(byte == b'1'));
        }

        match read {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(row, error = %err, "pattern read stopped early");
                break;
            }
        }
    }

    Ok(grid)
}
