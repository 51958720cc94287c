use anyhow::{Context, Result};
use async_trait::async_trait;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, timeout_at};

use super::{RenderAdapter, Renderer};
use crate::input::{InputHandler, Key};
use crate::modes::Scene;

/// Crossterm-backed terminal drawing through ratatui
pub struct TerminalAdapter {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    events: EventStream,
    input_handler: InputHandler,
    renderer: Renderer,
}

impl TerminalAdapter {
    /// Switch the terminal to raw mode on the alternate screen
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self {
            terminal,
            events: EventStream::new(),
            input_handler: InputHandler::new(),
            renderer: Renderer::new(),
        })
    }

    /// Put the terminal back the way it was found
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl RenderAdapter for TerminalAdapter {
    fn draw(&mut self, scene: &Scene<'_>) -> Result<()> {
        self.terminal
            .draw(|frame| self.renderer.render(frame, scene))
            .context("Failed to draw frame")?;
        Ok(())
    }

    async fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        let deadline = Instant::now() + timeout;

        loop {
            let event = match timeout_at(deadline, self.events.next()).await {
                Err(_) | Ok(None) => return Ok(None),
                Ok(Some(event)) => event.context("Failed to read terminal event")?,
            };

            // Only process key press events, not release or repeat
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(key) = self.input_handler.handle_key_event(key) {
                    return Ok(Some(key));
                }
            }
        }
    }
}
