/// Render tone of a single candle. Flat candles (`close == open`) count as
/// `Down`, so the boundary is strictly `close > open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleDirection {
    Up,
    Down,
}

/// Pure classification used for coloring. Takes explicit values so it stays
/// trivially testable.
pub fn classify(open: f64, close: f64) -> CandleDirection {
    if close > open {
        CandleDirection::Up
    } else {
        CandleDirection::Down
    }
}

/// One normalized OHLC point. `low <= open,close <= high` is expected of the
/// exchange but never enforced here by rejecting data.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub open_time_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(open_time_ms: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Candle {
            open_time_ms,
            open,
            high,
            low,
            close,
        }
    }

    pub fn direction(&self) -> CandleDirection {
        classify(self.open, self.close)
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        if self.open <= self.close {
            (self.open, self.close)
        } else {
            (self.close, self.open)
        }
    }
}

/// What the renderer consumes. Fully replaced on every successful fetch
/// cycle, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub candles: Vec<Candle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_close_classifies_up() {
        assert_eq!(classify(100.0, 105.0), CandleDirection::Up);
    }

    #[test]
    fn falling_close_classifies_down() {
        assert_eq!(classify(100.0, 95.0), CandleDirection::Down);
    }

    #[test]
    fn flat_candle_classifies_down() {
        // Ties resolve to the negative tone, not a third category.
        assert_eq!(classify(100.0, 100.0), CandleDirection::Down);
    }

    #[test]
    fn body_range_orders_open_close() {
        let bullish = Candle::new(0, 10.0, 12.0, 9.0, 11.0);
        assert_eq!(bullish.body_range(), (10.0, 11.0));
        let bearish = Candle::new(0, 11.0, 12.0, 9.0, 10.0);
        assert_eq!(bearish.body_range(), (10.0, 11.0));
    }
}
