// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
mod error;
pub mod pipeline;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use domain::{Interval, Selection, Symbol};
pub use error::MarketError;
pub use pipeline::{MarketFeed, PipelineState, Snapshot};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trading pair shown at startup
    #[arg(long, value_enum, default_value = "ethusdt")]
    pub symbol: Symbol,

    /// Candle timeframe shown at startup
    #[arg(long, value_enum, default_value = "1m")]
    pub interval: Interval,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
