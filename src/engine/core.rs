use anyhow::Result;

use crate::analysis::{StructureFinder, classify_trend, compute_ema};

use crate::config::{ANALYSIS, BINANCE, Price};

use crate::data::MarketDataProvider;

use crate::domain::{MarketSymbol, Timeframe};
use crate::models::{MarketSnapshot, TimeframeTrend};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Orchestrates one full market read: candles and ticker come in over the
/// provider, the analysis passes run on top, and everything lands in a
/// single `MarketSnapshot`.
pub struct ScoutEngine {
    provider: Box<dyn MarketDataProvider>,
}

impl ScoutEngine {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Builds the full snapshot for one symbol and timeframe, with `limit`
    /// candles in the primary series.
    ///
    /// The primary series and the ticker must both arrive or the snapshot
    /// fails; the higher-timeframe trend scan runs alongside them and is
    /// allowed to come back partial.
    pub async fn snapshot(
        &self,
        symbol: MarketSymbol,
        timeframe: Timeframe,
        limit: u32,
    ) -> Result<MarketSnapshot> {
        let (primary, timeframe_trends) = tokio::join!(
            async {
                tokio::try_join!(
                    self.provider.fetch_candles(symbol, timeframe, limit),
                    self.provider.fetch_ticker(symbol),
                )
            },
            self.timeframe_trends(symbol),
        );
        let (series, ticker) = primary?;

        let ema = compute_ema(&series, ANALYSIS.ema_period)?;
        let structure = StructureFinder::analyze(&series);

        #[cfg(debug_assertions)]
        if DF.log_engine {
            log::info!(
                "🧭 {} {}: {} candles, {} zones, {} trendlines",
                symbol,
                timeframe,
                series.klines(),
                structure.zones.len(),
                structure.trend_lines.len()
            );
        }

        Ok(MarketSnapshot {
            symbol,
            timeframe,
            ticker,
            series,
            ema,
            structure,
            timeframe_trends,
        })
    }

    /// Reads the trend bias across the standard set of higher timeframes.
    /// A timeframe whose data cannot be fetched is logged and left out
    /// rather than sinking the whole scan.
    pub async fn timeframe_trends(&self, symbol: MarketSymbol) -> Vec<TimeframeTrend> {
        let [first, second, third, fourth] = ANALYSIS.trend.timeframes;

        let (a, b, c, d) = tokio::join!(
            self.trend_for(symbol, first),
            self.trend_for(symbol, second),
            self.trend_for(symbol, third),
            self.trend_for(symbol, fourth),
        );

        [a, b, c, d].into_iter().flatten().collect()
    }

    async fn trend_for(&self, symbol: MarketSymbol, timeframe: Timeframe) -> Option<TimeframeTrend> {
        let series = match self
            .provider
            .fetch_candles(symbol, timeframe, BINANCE.limits.trend_klines_limit)
            .await
        {
            Ok(series) => series,
            Err(err) => {
                log::warn!("⚠️ skipping {} trend for {}: {:#}", timeframe, symbol, err);
                return None;
            }
        };

        let bias = classify_trend(&series, ANALYSIS.ema_period)?;
        let last_price = series.last_close().map(Price::from)?;

        Some(TimeframeTrend {
            timeframe,
            bias,
            last_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PriceLike, QuoteVol};
    use crate::domain::Candle;
    use crate::models::{CandleSeries, Ticker24h, ZoneKind};
    use anyhow::bail;
    use async_trait::async_trait;

    struct StubProvider {
        fail_ticker: bool,
        fail_timeframes: Vec<Timeframe>,
    }

    impl StubProvider {
        fn healthy() -> Self {
            Self {
                fail_ticker: false,
                fail_timeframes: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        async fn fetch_candles(
            &self,
            symbol: MarketSymbol,
            timeframe: Timeframe,
            limit: u32,
        ) -> Result<CandleSeries> {
            if self.fail_timeframes.contains(&timeframe) {
                bail!("stubbed outage for {}", timeframe);
            }

            // Steadily rising closes so every trend reads bullish
            let candles = (0..limit)
                .map(|i| {
                    let close = 100.0 + i as f64;
                    Candle::new(
                        i as i64 * 60_000,
                        close.into(),
                        (close + 0.5).into(),
                        (close - 0.5).into(),
                        close.into(),
                        1.0.into(),
                        QuoteVol::new(100.0),
                    )
                })
                .collect();
            Ok(CandleSeries::from_candles(symbol, timeframe, candles))
        }

        async fn fetch_ticker(&self, _symbol: MarketSymbol) -> Result<Ticker24h> {
            if self.fail_ticker {
                bail!("stubbed ticker outage");
            }
            Ok(Ticker24h {
                last_price: Price::new(399.0),
                change_24h_pct: 1.5,
            })
        }
    }

    #[tokio::test]
    async fn test_snapshot_assembles_all_parts() {
        let engine = ScoutEngine::new(Box::new(StubProvider::healthy()));
        let snapshot = engine
            .snapshot(MarketSymbol::BTC, Timeframe::H4, 300)
            .await
            .unwrap();

        assert_eq!(snapshot.series.klines(), 300);
        assert_eq!(snapshot.ema.len(), 300, "EMA stays aligned with the series");
        assert_eq!(snapshot.ticker.last_price.value(), 399.0);
        assert_eq!(snapshot.timeframe_trends.len(), 4);

        // A monotone staircase gaps on every window, so the cap binds
        assert_eq!(snapshot.structure.zones.len(), 8);
        assert!(
            snapshot
                .structure
                .zones
                .iter()
                .all(|z| z.kind == ZoneKind::FairValueGap)
        );
    }

    #[tokio::test]
    async fn test_failed_trend_timeframe_is_skipped() {
        let engine = ScoutEngine::new(Box::new(StubProvider {
            fail_ticker: false,
            fail_timeframes: vec![Timeframe::H4],
        }));

        let snapshot = engine
            .snapshot(MarketSymbol::ETH, Timeframe::Min30, 300)
            .await
            .unwrap();

        assert_eq!(snapshot.timeframe_trends.len(), 3);
        assert!(
            snapshot
                .timeframe_trends
                .iter()
                .all(|t| t.timeframe != Timeframe::H4)
        );
    }

    #[tokio::test]
    async fn test_snapshot_needs_the_ticker() {
        let engine = ScoutEngine::new(Box::new(StubProvider {
            fail_ticker: true,
            fail_timeframes: Vec::new(),
        }));

        assert!(
            engine
                .snapshot(MarketSymbol::BTC, Timeframe::H1, 300)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_snapshot_needs_the_primary_series() {
        let engine = ScoutEngine::new(Box::new(StubProvider {
            fail_ticker: false,
            fail_timeframes: vec![Timeframe::Min30],
        }));

        assert!(
            engine
                .snapshot(MarketSymbol::BTC, Timeframe::Min30, 300)
                .await
                .is_err()
        );
    }
}
