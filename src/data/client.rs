use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::BINANCE,
    data::{EndpointPool, TickerStats, convert_klines},
    domain::{Candle, MarketSymbol, Timeframe},
    models::{CandleSeries, Ticker24h},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Why a single attempt against one endpoint did not produce a result.
/// Throttle responses rotate without the courtesy backoff.
enum FetchFailure {
    Throttled(StatusCode),
    Failed(anyhow::Error),
}

/// REST client that survives a failing cluster host.
///
/// Every request gets one attempt per endpoint in the pool. A throttled
/// attempt (429, or 418 once the IP is banned) rotates to the next endpoint
/// immediately; any other failure rotates after a short pause so a flapping
/// host is not hammered. Only when the whole pool has had its turn does the
/// caller see an error, carrying whatever went wrong on the final attempt.
pub struct ClusterClient {
    http: reqwest::Client,
    pool: EndpointPool,
}

impl ClusterClient {
    pub fn new(pool: EndpointPool) -> Self {
        Self {
            http: reqwest::Client::new(),
            pool,
        }
    }

    /// Most recent candles for a symbol and timeframe, newest last.
    pub async fn fetch_klines(
        &self,
        symbol: MarketSymbol,
        timeframe: Timeframe,
        limit: u32,
    ) -> Result<CandleSeries> {
        let provider_symbol = symbol.provider_symbol();
        let limit_param = limit.to_string();
        let query = [
            ("symbol", provider_symbol.as_str()),
            ("interval", timeframe.provider_interval()),
            ("limit", limit_param.as_str()),
        ];

        let rows: Vec<Vec<Value>> = self
            .get_json("/api/v3/klines", &query)
            .await
            .with_context(|| format!("loading klines for {} {}", symbol, timeframe))?;

        let records = convert_klines(rows).map_err(|e| {
            anyhow::Error::new(e).context(format!("{} {} kline rows failed to decode", symbol, timeframe))
        })?;

        if records.is_empty() {
            bail!("empty kline payload for {} {}", symbol, timeframe);
        }

        let candles: Vec<Candle> = records.into_iter().map(Into::into).collect();
        Ok(CandleSeries::from_candles(symbol, timeframe, candles))
    }

    /// Rolling 24hr ticker statistics for a symbol.
    pub async fn fetch_ticker(&self, symbol: MarketSymbol) -> Result<Ticker24h> {
        let provider_symbol = symbol.provider_symbol();
        let query = [("symbol", provider_symbol.as_str())];

        let stats: TickerStats = self
            .get_json("/api/v3/ticker/24hr", &query)
            .await
            .with_context(|| format!("loading 24hr ticker for {}", symbol))?;

        Ticker24h::try_from(stats)
            .map_err(|e| anyhow::Error::new(e).context(format!("{} ticker failed to decode", symbol)))
    }

    /// GETs `path` against the pool until an endpoint returns a decodable
    /// body, rotating on every failure. Each attempt runs under a hard
    /// deadline that covers connect, body and decode.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let attempts = self.pool.size();
        let attempt_budget = Duration::from_millis(BINANCE.client.attempt_timeout_ms);
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 1..=attempts {
            let base = self.pool.current().to_string();
            let url = format!("{}{}", base, path);

            #[cfg(debug_assertions)]
            if DF.log_fetch_attempts {
                log::info!("📡 GET {} (attempt {}/{})", url, attempt, attempts);
            }

            match tokio::time::timeout(attempt_budget, self.attempt::<T>(&url, query)).await {
                Ok(Ok(decoded)) => return Ok(decoded),
                Ok(Err(FetchFailure::Throttled(status))) => {
                    log::warn!(
                        "⚠️ {} throttled us ({}), attempt {}/{}. Rotating endpoint.",
                        base,
                        status,
                        attempt,
                        attempts
                    );
                    self.pool.advance();
                    last_error = Some(anyhow!("{} throttled the request ({})", base, status));
                }
                Ok(Err(FetchFailure::Failed(err))) => {
                    log::warn!(
                        "⚠️ attempt {}/{} via {} failed: {:#}. Rotating endpoint.",
                        attempt,
                        attempts,
                        base,
                        err
                    );
                    self.pool.advance();
                    last_error = Some(err);
                    tokio::time::sleep(Duration::from_millis(BINANCE.client.rotation_backoff_ms))
                        .await;
                }
                Err(_) => {
                    log::warn!(
                        "⚠️ attempt {}/{} via {} timed out after {}ms. Rotating endpoint.",
                        attempt,
                        attempts,
                        base,
                        BINANCE.client.attempt_timeout_ms
                    );
                    self.pool.advance();
                    last_error = Some(anyhow!(
                        "request to {} timed out after {}ms",
                        base,
                        BINANCE.client.attempt_timeout_ms
                    ));
                    tokio::time::sleep(Duration::from_millis(BINANCE.client.rotation_backoff_ms))
                        .await;
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow!("could not reach any market data endpoint")))
    }

    async fn attempt<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchFailure> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchFailure::Failed(e.into()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::IM_A_TEAPOT {
            return Err(FetchFailure::Throttled(status));
        }
        if !status.is_success() {
            return Err(FetchFailure::Failed(anyhow!("endpoint answered {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchFailure::Failed(anyhow::Error::new(e).context("decoding response body")))
    }
}
