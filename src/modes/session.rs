use anyhow::Result;
use std::time::Instant;

use super::controller::{Controller, Transition};
use crate::loader::PatternLoader;
use crate::render::RenderAdapter;

/// Run the render, poll, dispatch, tick loop until the session ends
///
/// Each iteration draws the current scene, waits for at most one key (never
/// longer than the controller's poll timeout), hands it to the controller and
/// then lets the simulation advance if a generation is due.
pub async fn run_session<A>(
    controller: &mut Controller,
    adapter: &mut A,
    loader: &dyn PatternLoader,
) -> Result<()>
where
    A: RenderAdapter + ?Sized,
{
    tracing::info!(
        width = controller.grid().width(),
        height = controller.grid().height(),
        population = controller.grid().population(),
        "session started"
    );

    loop {
        adapter.draw(&controller.scene())?;

        let timeout = controller.poll_timeout(Instant::now());
        if let Some(key) = adapter.poll_key(timeout).await? {
            if controller.handle_key(key, Instant::now(), loader) == Transition::Exit {
                break;
            }
        }

        if let Some(result) = controller.tick(Instant::now()) {
            tracing::debug!(
                generation = controller.metrics().generation,
                population = result.population,
                "generation advanced"
            );
        }
    }

    tracing::info!(runs = controller.metrics().runs, "session ended");
    Ok(())
}
