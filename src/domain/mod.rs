mod candle;
mod selection;

pub use candle::{Candle, CandleDirection, ChartDataset, classify};
pub use selection::{Interval, Selection, Symbol};
