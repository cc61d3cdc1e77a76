// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate (for the binary)
pub use data::{BinanceProvider, MarketDataProvider};
pub use domain::{MarketSymbol, Timeframe};
pub use engine::ScoutEngine;
pub use models::MarketSnapshot;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Symbol to analyze, e.g. BTC, ETH, EURUSD, XAUUSD
    #[arg(long, default_value = "BTC")]
    pub symbol: MarketSymbol,

    /// Chart timeframe for the primary series, e.g. 15m, 1H, 4H, 1D
    #[arg(long, default_value = "4H")]
    pub timeframe: Timeframe,

    /// Override the number of candles in the primary series
    #[arg(long)]
    pub limit: Option<u32>,

    /// Keep running and rebuild the snapshot on an interval
    #[arg(long, default_value_t = false)]
    pub watch: bool,
}
