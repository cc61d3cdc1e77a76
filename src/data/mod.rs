mod client;
mod endpoint_pool;
mod kline;
mod provider;

pub use {
    client::ClusterClient,
    endpoint_pool::EndpointPool,
    provider::{BinanceProvider, MarketDataProvider},
};

pub(crate) use kline::{TickerStats, convert_klines};
