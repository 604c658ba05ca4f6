//! Configuration module for the kline dashboard.

mod binance;
mod debug;

// Can't be private because we don't re-export it
pub mod plot;

pub use binance::BINANCE;
pub use debug::DF;
