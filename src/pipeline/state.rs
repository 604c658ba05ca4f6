use std::mem;

use crate::{domain::ChartDataset, error::MarketError};

/// Output of one successful fetch cycle. Replaced as a unit, so the
/// renderer never observes a dataset/rate mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub dataset: ChartDataset,
    pub rate: f64,
}

/// The one shared mutable resource between the feed and the renderer.
///
/// Stale retention is explicit: `Loading` and `Failed` carry the previous
/// good snapshot so the chart keeps showing the last data instead of going
/// blank. Illegal flag combinations (error set while mid-load, etc.) are
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PipelineState {
    #[default]
    Idle,
    Loading {
        prior: Option<Snapshot>,
    },
    Ready(Snapshot),
    Failed {
        error: MarketError,
        prior: Option<Snapshot>,
    },
}

impl PipelineState {
    /// Current-or-stale snapshot, whatever is displayable right now.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            PipelineState::Idle => None,
            PipelineState::Loading { prior } => prior.as_ref(),
            PipelineState::Ready(snapshot) => Some(snapshot),
            PipelineState::Failed { prior, .. } => prior.as_ref(),
        }
    }

    /// Display rate; 0.0 is the "unknown" sentinel before any success.
    pub fn current_rate(&self) -> f64 {
        self.snapshot().map(|s| s.rate).unwrap_or(0.0)
    }

    pub fn error(&self) -> Option<&MarketError> {
        match self {
            PipelineState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PipelineState::Loading { .. })
    }

    /// Enter `Loading`, carrying whatever snapshot was displayable along.
    pub fn begin_loading(&mut self) {
        let prior = match mem::take(self) {
            PipelineState::Idle => None,
            PipelineState::Loading { prior } => prior,
            PipelineState::Ready(snapshot) => Some(snapshot),
            PipelineState::Failed { prior, .. } => prior,
        };
        *self = PipelineState::Loading { prior };
    }

    /// Settle the in-flight run.
    pub fn resolve(&mut self, outcome: Result<Snapshot, MarketError>) {
        let prior = match mem::take(self) {
            PipelineState::Ready(snapshot) => Some(snapshot),
            PipelineState::Loading { prior } | PipelineState::Failed { prior, .. } => prior,
            PipelineState::Idle => None,
        };
        *self = match outcome {
            Ok(snapshot) => PipelineState::Ready(snapshot),
            Err(error) => PipelineState::Failed { error, prior },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Candle, ChartDataset};

    fn snapshot(rate: f64) -> Snapshot {
        Snapshot {
            dataset: ChartDataset {
                label: "ETHUSDT Chart".to_string(),
                candles: vec![Candle::new(0, rate, rate, rate, rate)],
            },
            rate,
        }
    }

    #[test]
    fn idle_has_sentinel_rate() {
        let state = PipelineState::default();
        assert_eq!(state.current_rate(), 0.0);
        assert!(state.snapshot().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_replaces_loading() {
        let mut state = PipelineState::Idle;
        state.begin_loading();
        assert!(state.is_loading());
        state.resolve(Ok(snapshot(2005.0)));
        assert_eq!(state.current_rate(), 2005.0);
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_retains_stale_snapshot() {
        let mut state = PipelineState::Ready(snapshot(2005.0));
        state.begin_loading();
        // Still displayable while the next run is in flight.
        assert_eq!(state.current_rate(), 2005.0);
        state.resolve(Err(MarketError::Api(500)));
        assert!(state.error().is_some());
        assert_eq!(state.current_rate(), 2005.0);
        assert_eq!(state.snapshot().unwrap().rate, 2005.0);
    }

    #[test]
    fn failure_before_any_success_keeps_sentinel() {
        let mut state = PipelineState::Idle;
        state.begin_loading();
        state.resolve(Err(MarketError::MalformedData("empty".to_string())));
        assert_eq!(state.current_rate(), 0.0);
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn stale_snapshot_survives_repeated_failures() {
        let mut state = PipelineState::Ready(snapshot(7.0));
        state.begin_loading();
        state.resolve(Err(MarketError::Network("down".to_string())));
        state.begin_loading();
        state.resolve(Err(MarketError::Api(502)));
        assert_eq!(state.current_rate(), 7.0);
    }
}
