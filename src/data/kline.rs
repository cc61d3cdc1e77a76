use {
    serde::Deserialize,
    serde_json::Value,
    std::{convert::TryFrom, error::Error, fmt},
};

use crate::{
    config::{BaseVol, ClosePrice, HighPrice, LowPrice, OpenPrice, Price, QuoteVol},
    domain::Candle,
    models::Ticker24h,
};

/// One kline row as the REST API ships it: a heterogeneous JSON array of
/// `[open_time, open, high, low, close, volume, close_time, quote_volume, ...]`
/// where every price and volume is a decimal string.
#[derive(Debug, PartialOrd, PartialEq)]
pub struct KlineRecord {
    pub open_timestamp_ms: i64,
    pub open_price: OpenPrice,
    pub high_price: HighPrice,
    pub low_price: LowPrice,
    pub close_price: ClosePrice,
    pub base_asset_volume: BaseVol,
    pub quote_asset_volume: QuoteVol,
}

#[derive(Debug)]
pub enum WireError {
    InvalidLength,
    InvalidType(String),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            WireError::InvalidLength => write!(f, "Invalid length"),
            WireError::InvalidType(field) => write!(f, "Invalid type: {}", field),
        }
    }
}

impl Error for WireError {}

fn string_field_as_f64(value: Option<Value>, field: &str) -> Result<f64, WireError> {
    match value {
        Some(Value::String(s)) => s
            .parse::<f64>()
            .map_err(|_| WireError::InvalidType(field.to_string())),
        Some(_) => Err(WireError::InvalidType(field.to_string())),
        None => Err(WireError::InvalidLength),
    }
}

impl TryFrom<Vec<Value>> for KlineRecord {
    type Error = WireError;

    fn try_from(row: Vec<Value>) -> Result<Self, Self::Error> {
        let mut items = row.into_iter();

        let open_timestamp_ms = match items.next().ok_or(WireError::InvalidLength)? {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| WireError::InvalidType("open_time".to_string()))?,
            _ => return Err(WireError::InvalidType("open_time".to_string())),
        };

        let open_price = string_field_as_f64(items.next(), "open")?;
        let high_price = string_field_as_f64(items.next(), "high")?;
        let low_price = string_field_as_f64(items.next(), "low")?;
        let close_price = string_field_as_f64(items.next(), "close")?;
        let volume = string_field_as_f64(items.next(), "volume")?;
        let _ = items.next(); // close_time is unused so skip it
        let quote_asset_volume = string_field_as_f64(items.next(), "quote_volume")?;

        Ok(KlineRecord {
            open_timestamp_ms,
            open_price: OpenPrice::new(open_price),
            high_price: HighPrice::new(high_price),
            low_price: LowPrice::new(low_price),
            close_price: ClosePrice::new(close_price),
            base_asset_volume: BaseVol::new(volume),
            quote_asset_volume: QuoteVol::new(quote_asset_volume),
        })
    }
}

pub fn convert_klines(data: Vec<Vec<Value>>) -> Result<Vec<KlineRecord>, WireError> {
    data.into_iter().map(Vec::try_into).collect()
}

impl From<KlineRecord> for Candle {
    fn from(record: KlineRecord) -> Self {
        Candle::new(
            record.open_timestamp_ms,
            record.open_price,
            record.high_price,
            record.low_price,
            record.close_price,
            record.base_asset_volume,
            record.quote_asset_volume,
        )
    }
}

/// The slice of the 24hr ticker statistics payload we care about.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStats {
    pub last_price: String,
    pub price_change_percent: String,
}

impl TryFrom<TickerStats> for Ticker24h {
    type Error = WireError;

    fn try_from(stats: TickerStats) -> Result<Self, Self::Error> {
        let last_price = stats
            .last_price
            .parse::<f64>()
            .map_err(|_| WireError::InvalidType("lastPrice".to_string()))?;
        let change_24h_pct = stats
            .price_change_percent
            .parse::<f64>()
            .map_err(|_| WireError::InvalidType("priceChangePercent".to_string()))?;

        Ok(Ticker24h {
            last_price: Price::new(last_price),
            change_24h_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceLike;
    use serde_json::json;

    fn sample_row() -> Vec<Value> {
        let row = json!([
            1625097600000_i64,
            "33500.10",
            "34000.00",
            "33400.55",
            "33900.25",
            "120.5",
            1625101199999_i64,
            "4071530.75",
            98765,
            "60.2",
            "2034000.00",
            "0"
        ]);
        match row {
            Value::Array(items) => items,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_valid_row_decodes() {
        let record = KlineRecord::try_from(sample_row()).unwrap();
        assert_eq!(record.open_timestamp_ms, 1625097600000);
        assert_eq!(record.open_price.value(), 33500.10);
        assert_eq!(record.high_price.value(), 34000.00);
        assert_eq!(record.low_price.value(), 33400.55);
        assert_eq!(record.close_price.value(), 33900.25);
        assert_eq!(record.base_asset_volume.value(), 120.5);
        assert_eq!(record.quote_asset_volume.value(), 4071530.75);
    }

    #[test]
    fn test_short_row_rejected() {
        let row = sample_row().into_iter().take(4).collect::<Vec<_>>();
        match KlineRecord::try_from(row) {
            Err(WireError::InvalidLength) => {}
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_price_rejected() {
        let mut row = sample_row();
        row[1] = json!(33500.10);
        match KlineRecord::try_from(row) {
            Err(WireError::InvalidType(field)) => assert_eq!(field, "open"),
            other => panic!("expected InvalidType, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_price_string_rejected() {
        let mut row = sample_row();
        row[4] = json!("not-a-price");
        assert!(matches!(
            KlineRecord::try_from(row),
            Err(WireError::InvalidType(_))
        ));
    }

    #[test]
    fn test_record_converts_to_candle() {
        let candle: Candle = KlineRecord::try_from(sample_row()).unwrap().into();
        assert_eq!(candle.timestamp_ms, 1625097600000);
        assert_eq!(candle.close_price.value(), 33900.25);
    }

    #[test]
    fn test_ticker_stats_decode() {
        let stats: TickerStats = serde_json::from_value(json!({
            "lastPrice": "43250.50",
            "priceChangePercent": "-2.35"
        }))
        .unwrap();

        let ticker = Ticker24h::try_from(stats).unwrap();
        assert_eq!(ticker.last_price.value(), 43250.50);
        assert_eq!(ticker.change_24h_pct, -2.35);
    }

    #[test]
    fn test_ticker_with_garbage_price_rejected() {
        let stats = TickerStats {
            last_price: "n/a".to_string(),
            price_change_percent: "0.0".to_string(),
        };
        assert!(Ticker24h::try_from(stats).is_err());
    }
}
