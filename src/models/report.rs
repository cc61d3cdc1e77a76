use {
    crate::{
        config::Price,
        domain::{MarketSymbol, Timeframe},
        models::{Bias, CandleSeries, MarketStructure},
    },
    serde::{Deserialize, Serialize},
};

/// 24-hour ticker statistics, parsed out of the provider's string fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ticker24h {
    pub last_price: Price,
    pub change_24h_pct: f64,
}

/// One timeframe's trend classification: last close against its EMA.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeframeTrend {
    pub timeframe: Timeframe,
    pub bias: Bias,
    pub last_price: Price,
}

/// The full analysis bundle handed to the presentation layer: the series the
/// analysis ran on, its EMA, detected structure, and the cross-timeframe
/// trend summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: MarketSymbol,
    pub timeframe: Timeframe,
    pub ticker: Ticker24h,
    pub series: CandleSeries,
    pub ema: Vec<f64>,
    pub structure: MarketStructure,
    pub timeframe_trends: Vec<TimeframeTrend>,
}
