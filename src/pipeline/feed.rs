use {
    std::{
        sync::{Arc, mpsc, mpsc::{Receiver, Sender}},
        thread,
    },
    tokio::runtime::Runtime,
};

use crate::{
    config::DF,
    data::{KlineSource, candles_from_klines, latest_close},
    domain::{ChartDataset, Selection},
    error::MarketError,
    pipeline::{PipelineState, Snapshot},
};

/// One full fetch cycle: fetch -> transform -> rate derivation.
pub async fn run_cycle(
    source: &dyn KlineSource,
    selection: Selection,
) -> Result<Snapshot, MarketError> {
    let records = source
        .fetch_klines(selection.symbol, selection.interval)
        .await?;
    let candles = candles_from_klines(&records)?;
    let rate = latest_close(&candles);
    Ok(Snapshot {
        dataset: ChartDataset {
            label: format!("{} Chart", selection.symbol.ticker()),
            candles,
        },
        rate,
    })
}

type RunResult = (u64, Result<Snapshot, MarketError>);

/// Owns the `PipelineState` and drives one fetch cycle per selection
/// change. Runs are tagged with a generation; a result whose generation is
/// no longer current is discarded, so a slow superseded request can never
/// overwrite a newer selection's data.
pub struct MarketFeed {
    source: Arc<dyn KlineSource>,
    state: PipelineState,
    generation: u64,
    tx: Sender<RunResult>,
    rx: Receiver<RunResult>,
}

impl MarketFeed {
    pub fn new(source: Arc<dyn KlineSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            state: PipelineState::Idle,
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Start a new run for `selection`, superseding any run in flight.
    pub fn request(&mut self, selection: Selection) {
        let generation = self.begin_run();
        if DF.log_fetch {
            log::info!("Fetch #{} start: {}", generation, selection);
        }

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let outcome = rt.block_on(async move { run_cycle(source.as_ref(), selection).await });
            // Receiver may be gone on shutdown; nothing to do about it.
            let _ = tx.send((generation, outcome));
        });
    }

    /// Drain finished runs. Call once per frame from the UI thread; all
    /// state writes happen here, serialized on the caller's thread.
    pub fn poll(&mut self) {
        while let Ok((generation, outcome)) = self.rx.try_recv() {
            self.apply(generation, outcome);
        }
    }

    fn begin_run(&mut self) -> u64 {
        self.generation += 1;
        self.state.begin_loading();
        self.generation
    }

    fn apply(&mut self, generation: u64, outcome: Result<Snapshot, MarketError>) {
        if generation != self.generation {
            if DF.log_stale_discards {
                log::info!(
                    "Discarding stale fetch #{} (current #{})",
                    generation,
                    self.generation
                );
            }
            return;
        }
        if let Err(error) = &outcome {
            log::warn!("Fetch #{} failed: {}", generation, error);
        } else if DF.log_fetch {
            log::info!("Fetch #{} ready", generation);
        }
        self.state.resolve(outcome);
    }
}
