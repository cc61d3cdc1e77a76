/// Equivalent Binance REST clusters, in rotation order.
/// The fetch layer walks this list on failure; one full lap per request.
pub const BINANCE_CLUSTERS: [&str; 4] = [
    "https://api.binance.com",
    "https://api1.binance.com",
    "https://api2.binance.com",
    "https://api3.binance.com",
];

/// REST constraints: kline batch sizes per call type.
pub struct RestLimits {
    pub klines_limit: u32,
    pub trend_klines_limit: u32,
}

pub struct ClientDefaults {
    /// Hard per-attempt deadline. A late response is discarded.
    pub attempt_timeout_ms: u64,
    /// Pause after a non-rate-limit failure before trying the next cluster.
    pub rotation_backoff_ms: u64,
}

pub struct BinanceConfig {
    pub limits: RestLimits,
    pub client: ClientDefaults,
    /// Watch-mode refresh cadence.
    pub refresh_interval_sec: u64,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    limits: RestLimits {
        klines_limit: 300,
        trend_klines_limit: 40,
    },
    client: ClientDefaults {
        attempt_timeout_ms: 7000,
        rotation_backoff_ms: 500,
    },
    refresh_interval_sec: 20,
};
