use {
    clap::ValueEnum,
    std::fmt,
    strum_macros::EnumIter,
};

use crate::utils::TimeUtils;

/// Closed set of tradeable pairs. The exchange accepts the upper-case
/// ticker form only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, ValueEnum)]
pub enum Symbol {
    #[default]
    #[value(name = "ethusdt")]
    EthUsdt,
    #[value(name = "bnbusdt")]
    BnbUsdt,
    #[value(name = "dotusdt")]
    DotUsdt,
}

impl Symbol {
    /// Canonical exchange ticker, already upper-cased for the REST call.
    pub fn ticker(&self) -> &'static str {
        match self {
            Symbol::EthUsdt => "ETHUSDT",
            Symbol::BnbUsdt => "BNBUSDT",
            Symbol::DotUsdt => "DOTUSDT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Symbol::EthUsdt => "ETH/USDT",
            Symbol::BnbUsdt => "BNB/USDT",
            Symbol::DotUsdt => "DOT/USDT",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Closed set of candle timeframes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, ValueEnum)]
pub enum Interval {
    #[default]
    #[value(name = "1m")]
    M1,
    #[value(name = "3m")]
    M3,
    #[value(name = "5m")]
    M5,
}

impl Interval {
    /// Binance-style shorthand used in the kline query string.
    pub fn bn_name(&self) -> &'static str {
        match self {
            Interval::M1 => "1m",
            Interval::M3 => "3m",
            Interval::M5 => "5m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interval::M1 => "1 Minute",
            Interval::M3 => "3 Minutes",
            Interval::M5 => "5 Minutes",
        }
    }

    pub fn interval_ms(&self) -> i64 {
        match self {
            Interval::M1 => TimeUtils::MS_IN_MIN,
            Interval::M3 => TimeUtils::MS_IN_3_MIN,
            Interval::M5 => TimeUtils::MS_IN_5_MIN,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bn_name())
    }
}

/// The user's chosen (pair, timeframe). Lives for the session; any change
/// triggers a fresh pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub symbol: Symbol,
    pub interval: Interval,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.symbol.ticker(), self.interval.bn_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_selection_is_eth_one_minute() {
        let sel = Selection::default();
        assert_eq!(sel.symbol, Symbol::EthUsdt);
        assert_eq!(sel.interval, Interval::M1);
    }

    #[test]
    fn tickers_are_upper_case() {
        for symbol in Symbol::iter() {
            let ticker = symbol.ticker();
            assert_eq!(ticker, ticker.to_uppercase());
        }
    }

    #[test]
    fn interval_shorthand_matches_duration() {
        assert_eq!(Interval::M1.interval_ms(), 60_000);
        assert_eq!(Interval::M3.interval_ms(), 180_000);
        assert_eq!(Interval::M5.interval_ms(), 300_000);
    }
}
