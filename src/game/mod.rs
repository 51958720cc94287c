//! Core automaton logic for the toroidal Game of Life
//!
//! This module contains the grid and the generation step without any I/O or
//! rendering dependencies, so it can drive both the terminal session and
//! headless runs.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod rule;

// Re-export commonly used types
pub use action::Direction;
pub use config::LifeConfig;
pub use engine::{LifeEngine, StepResult};
pub use grid::{Cell, Grid, GridError, Position};
pub use rule::{Rule, RuleParseError};
