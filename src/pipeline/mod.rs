mod feed;
mod state;

pub use {
    feed::{MarketFeed, run_cycle},
    state::{PipelineState, Snapshot},
};
