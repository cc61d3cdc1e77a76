//! Configuration module for the analysis engine.

// Can all be private now because we have a public re-export.
mod analysis;
mod binance;
mod debug;
mod types;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig, StructureSettings, TrendSettings};
pub use binance::{BINANCE, BINANCE_CLUSTERS, BinanceConfig};
pub use debug::DF;
pub use types::{
    BaseVol, ClosePrice, HighPrice, LowPrice, OpenPrice, Price, PriceLike, QuoteVol,
};
