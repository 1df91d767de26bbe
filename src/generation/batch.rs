use futures::future::join_all;

use crate::{
    error::{EmojiError, Result},
    generation::traits::EmojiGenerator,
    models::{CallerIdentity, GenerationRequest, GenerationResult},
};

/// Runs requests in consecutive fixed-size windows.
///
/// Every request in a window is dispatched concurrently and the whole window
/// is joined before the next one starts, so at most `window_size` calls are
/// ever in flight. Results come back in request order.
#[derive(Debug, Clone, Copy)]
pub struct BatchCoordinator {
    window_size: usize,
}

impl BatchCoordinator {
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(EmojiError::Config(
                "batch window size must be at least 1".into(),
            ));
        }
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub async fn run_batch<G>(
        &self,
        generator: &G,
        requests: Vec<GenerationRequest>,
        caller: &CallerIdentity,
    ) -> Vec<GenerationResult>
    where
        G: EmojiGenerator + ?Sized,
    {
        let total = requests.len();
        let windows = total.div_ceil(self.window_size);
        log::info!(
            "Running batch of {} requests in {} window(s) of up to {}",
            total,
            windows,
            self.window_size
        );

        let mut results = Vec::with_capacity(total);
        let mut pending = requests.into_iter().peekable();
        let mut window_index = 0;

        while pending.peek().is_some() {
            let window: Vec<GenerationRequest> = pending.by_ref().take(self.window_size).collect();
            window_index += 1;
            log::debug!(
                "Dispatching window {}/{} ({} requests)",
                window_index,
                windows,
                window.len()
            );

            let outcomes = join_all(
                window
                    .into_iter()
                    .map(|request| generator.generate(request, caller)),
            )
            .await;

            results.extend(outcomes);
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        if failed > 0 {
            log::warn!("Batch finished with {}/{} failures", failed, total);
        }

        results
    }
}
