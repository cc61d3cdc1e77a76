use {
    crate::{
        config::{BaseVol, ClosePrice, HighPrice, LowPrice, OpenPrice, QuoteVol},
        domain::{Candle, MarketSymbol, Timeframe},
    },
    serde::{Deserialize, Serialize},
};

/// One instrument's candle history at a fixed granularity, stored column-wise.
/// Built once by the fetch layer and read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CandleSeries {
    pub symbol: MarketSymbol,
    pub timeframe: Timeframe,
    pub timestamps: Vec<i64>,
    pub open_prices: Vec<OpenPrice>,
    pub high_prices: Vec<HighPrice>,
    pub low_prices: Vec<LowPrice>,
    pub close_prices: Vec<ClosePrice>,
    pub base_asset_volumes: Vec<BaseVol>,
    pub quote_asset_volumes: Vec<QuoteVol>,
}

impl CandleSeries {
    pub fn from_candles(symbol: MarketSymbol, timeframe: Timeframe, candles: Vec<Candle>) -> Self {
        let len = candles.len();

        let mut ts_vec = Vec::with_capacity(len);
        let mut open_vec = Vec::with_capacity(len);
        let mut high_vec = Vec::with_capacity(len);
        let mut low_vec = Vec::with_capacity(len);
        let mut close_vec = Vec::with_capacity(len);
        let mut base_vec = Vec::with_capacity(len);
        let mut quote_vec = Vec::with_capacity(len);

        for c in candles {
            ts_vec.push(c.timestamp_ms);
            open_vec.push(c.open_price);
            high_vec.push(c.high_price);
            low_vec.push(c.low_price);
            close_vec.push(c.close_price);
            base_vec.push(c.base_asset_volume);
            quote_vec.push(c.quote_asset_volume);
        }

        Self {
            symbol,
            timeframe,
            timestamps: ts_vec,
            open_prices: open_vec,
            high_prices: high_vec,
            low_prices: low_vec,
            close_prices: close_vec,
            base_asset_volumes: base_vec,
            quote_asset_volumes: quote_vec,
        }
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
            self.base_asset_volumes[idx],
            self.quote_asset_volumes[idx],
        )
    }

    pub fn klines(&self) -> usize {
        self.open_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_prices.is_empty()
    }

    pub fn last_close(&self) -> Option<ClosePrice> {
        self.close_prices.last().copied()
    }

    pub fn last_timestamp(&self) -> Option<i64> {
        self.timestamps.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceLike;

    fn candle(ts: i64, o: f64, h: f64, l: f64, c: f64) -> Candle {
        Candle::new(
            ts,
            o.into(),
            h.into(),
            l.into(),
            c.into(),
            BaseVol::new(1.0),
            QuoteVol::new(100.0),
        )
    }

    #[test]
    fn test_from_candles_preserves_columns() {
        let series = CandleSeries::from_candles(
            MarketSymbol::BTC,
            Timeframe::H1,
            vec![
                candle(1_000, 10.0, 11.0, 9.0, 10.5),
                candle(2_000, 10.5, 12.0, 10.0, 11.5),
            ],
        );

        assert_eq!(series.klines(), 2);
        assert_eq!(series.timestamps, vec![1_000, 2_000]);
        assert_eq!(series.high_prices[1].value(), 12.0);
        assert_eq!(series.last_close().unwrap().value(), 11.5);
        assert_eq!(series.last_timestamp(), Some(2_000));
    }

    #[test]
    fn test_get_candle_round_trip() {
        let series = CandleSeries::from_candles(
            MarketSymbol::ETH,
            Timeframe::Min15,
            vec![candle(5_000, 1.0, 2.0, 0.5, 1.5)],
        );

        let c = series.get_candle(0);
        assert_eq!(c.timestamp_ms, 5_000);
        assert_eq!(c.open_price.value(), 1.0);
        assert_eq!(c.low_price.value(), 0.5);
    }

    #[test]
    fn test_empty_series() {
        let series = CandleSeries::from_candles(MarketSymbol::BTC, Timeframe::D1, vec![]);
        assert!(series.is_empty());
        assert!(series.last_close().is_none());
    }
}
