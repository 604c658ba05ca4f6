mod source;
mod transform;

pub use {
    source::{BinanceRest, KlineSource, RawKline},
    transform::{candles_from_klines, latest_close},
};
