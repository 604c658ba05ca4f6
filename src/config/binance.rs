/// REST constraints: endpoint and window size.
pub struct RestLimits {
    pub klines_limit: u32,
}

pub struct BinanceConfig {
    pub rest_base_url: &'static str,
    pub klines_path: &'static str,
    pub limits: RestLimits,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    rest_base_url: "https://api.binance.com",
    klines_path: "/api/v3/klines",
    limits: RestLimits { klines_limit: 100 },
};
