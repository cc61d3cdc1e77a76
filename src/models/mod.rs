mod ohlcv;
mod report;
mod structure;

pub use ohlcv::CandleSeries;
pub use report::{MarketSnapshot, Ticker24h, TimeframeTrend};
pub use structure::{Bias, MarketStructure, TrendDirection, TrendLine, Zone, ZoneKind};
