use anyhow::Result;

use super::controller::Controller;
use super::session::run_session;
use crate::loader::FileLoader;
use crate::render::TerminalAdapter;

/// Full-screen terminal session: menu, simulation, editor and loader
pub struct InteractiveMode {
    controller: Controller,
    loader: FileLoader,
}

impl InteractiveMode {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            loader: FileLoader::new(),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        let mut adapter = TerminalAdapter::enter()?;

        // Run session loop, restoring the terminal even if it failed
        let result = run_session(&mut self.controller, &mut adapter, &self.loader).await;

        adapter.restore()?;

        result
    }
}
