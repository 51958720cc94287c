//! Toroidal Life - Conway's Game of Life in the terminal
//!
//! This library provides:
//! - Core automaton logic on a wraparound grid (game module)
//! - Pattern file loading (loader module)
//! - The interaction state machine and session loop (modes module)
//! - Terminal rendering and key input (render and input modules)

pub mod game;
pub mod input;
pub mod loader;
pub mod metrics;
pub mod modes;
pub mod render;
