use anyhow::Result;
use async_trait::async_trait;

use crate::config::BINANCE_CLUSTERS;
use crate::data::{ClusterClient, EndpointPool};
use crate::domain::{MarketSymbol, Timeframe};
use crate::models::{CandleSeries, Ticker24h};

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the most recent candles for a symbol on one timeframe.
    async fn fetch_candles(
        &self,
        symbol: MarketSymbol,
        timeframe: Timeframe,
        limit: u32,
    ) -> Result<CandleSeries>;

    /// Fetch the rolling 24hr ticker statistics for a symbol.
    async fn fetch_ticker(&self, symbol: MarketSymbol) -> Result<Ticker24h>;
}

/// Live provider backed by the public spot REST clusters.
pub struct BinanceProvider {
    client: ClusterClient,
}

impl BinanceProvider {
    pub fn new() -> Result<Self> {
        let pool = EndpointPool::new(&BINANCE_CLUSTERS)?;
        Ok(Self {
            client: ClusterClient::new(pool),
        })
    }
}

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    async fn fetch_candles(
        &self,
        symbol: MarketSymbol,
        timeframe: Timeframe,
        limit: u32,
    ) -> Result<CandleSeries> {
        self.client.fetch_klines(symbol, timeframe, limit).await
    }

    async fn fetch_ticker(&self, symbol: MarketSymbol) -> Result<Ticker24h> {
        self.client.fetch_ticker(symbol).await
    }
}
