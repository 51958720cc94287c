//! Terminal rendering and input
//!
//! The controller only sees the [`RenderAdapter`] trait: draw a [`Scene`] and
//! poll for one key with a bounded wait. [`TerminalAdapter`] implements it on
//! crossterm + ratatui; tests drive the session with scripted adapters.

pub mod renderer;
pub mod terminal;

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::input::Key;
use crate::modes::Scene;

pub use renderer::{Renderer, board_lines};
pub use terminal::TerminalAdapter;

/// Capability the session loop needs from a display backend
#[async_trait(?Send)]
pub trait RenderAdapter {
    /// Draw one frame
    fn draw(&mut self, scene: &Scene<'_>) -> Result<()>;

    /// Wait up to `timeout` for the next key, `None` if nothing arrived
    async fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;
}
