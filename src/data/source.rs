use {anyhow::Result, async_trait::async_trait, reqwest::Client};

use crate::{
    config::BINANCE,
    domain::{Interval, Symbol},
    error::MarketError,
};

/// One raw kline record exactly as the exchange returns it: a positional
/// JSON array, `[openTimeMs, openStr, highStr, lowStr, closeStr, ...]`.
/// Untrusted input; numeric fields arrive as text.
pub type RawKline = Vec<serde_json::Value>;

/// Abstract interface for fetching raw kline windows.
#[async_trait]
pub trait KlineSource: Send + Sync {
    /// Fetch the most recent fixed-size kline window for a pair+timeframe.
    async fn fetch_klines(
        &self,
        symbol: Symbol,
        interval: Interval,
    ) -> Result<Vec<RawKline>, MarketError>;
}

pub struct BinanceRest {
    client: Client,
}

impl BinanceRest {
    pub fn new() -> Result<Self> {
        // Transport defaults only: no extra timeout, no retries.
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    fn klines_url(symbol: Symbol, interval: Interval) -> String {
        format!(
            "{}{}?symbol={}&interval={}&limit={}",
            BINANCE.rest_base_url,
            BINANCE.klines_path,
            symbol.ticker(),
            interval.bn_name(),
            BINANCE.limits.klines_limit,
        )
    }
}

#[async_trait]
impl KlineSource for BinanceRest {
    async fn fetch_klines(
        &self,
        symbol: Symbol,
        interval: Interval,
    ) -> Result<Vec<RawKline>, MarketError> {
        let url = Self::klines_url(symbol, interval);

        // No retries, no caching: one GET per run, the UI decides when to
        // try again.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::Api(status.as_u16()));
        }

        response
            .json::<Vec<RawKline>>()
            .await
            .map_err(|e| MarketError::MalformedData(format!("undecodable kline body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn klines_url_carries_ticker_shorthand_and_limit() {
        let url = BinanceRest::klines_url(Symbol::DotUsdt, Interval::M5);
        assert_eq!(
            url,
            "https://api.binance.com/api/v3/klines?symbol=DOTUSDT&interval=5m&limit=100"
        );
    }
}
