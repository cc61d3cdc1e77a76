use anyhow::{Result, bail};

use crate::{config::PriceLike, models::CandleSeries};

/// Exponential moving average over the series closes.
///
/// The first element seeds from the first close; every later element blends
/// the current close against the previous EMA value with smoothing factor
/// `k = 2 / (period + 1)`. Output length always equals the series length.
///
/// # Arguments
/// * `series` - Source candles, must be non-empty
/// * `period` - Smoothing period, must be positive
///
/// # Returns
/// One EMA value per candle, index-aligned with the input.
pub fn compute_ema(series: &CandleSeries, period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        bail!("EMA period must be positive");
    }
    if series.is_empty() {
        bail!(
            "cannot compute EMA for {} {}: series is empty",
            series.symbol,
            series.timeframe
        );
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = Vec::with_capacity(series.klines());
    ema.push(series.close_prices[0].value());

    for close in &series.close_prices[1..] {
        let prev = ema[ema.len() - 1];
        ema.push(close.value() * k + prev * (1.0 - k));
    }

    Ok(ema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Candle, MarketSymbol, Timeframe};

    fn series_from_closes(closes: &[f64]) -> CandleSeries {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Candle::new(
                    i as i64 * 60_000,
                    c.into(),
                    (c + 1.0).into(),
                    (c - 1.0).into(),
                    c.into(),
                    1.0.into(),
                    100.0.into(),
                )
            })
            .collect();
        CandleSeries::from_candles(MarketSymbol::BTC, Timeframe::H1, candles)
    }

    #[test]
    fn test_constant_series_stays_constant() {
        let series = series_from_closes(&[42.0; 25]);
        for period in [1, 2, 9, 20, 200] {
            let ema = compute_ema(&series, period).unwrap();
            assert!(
                ema.iter().all(|&v| (v - 42.0).abs() < 1e-9),
                "constant closes must give a constant EMA for period {}",
                period
            );
        }
    }

    #[test]
    fn test_output_length_matches_input() {
        for len in [1, 2, 5, 40] {
            let closes: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            let series = series_from_closes(&closes);
            let ema = compute_ema(&series, 20).unwrap();
            assert_eq!(ema.len(), series.klines());
        }
    }

    #[test]
    fn test_known_sequence() {
        // period 3 -> k = 0.5
        let series = series_from_closes(&[1.0, 2.0, 3.0]);
        let ema = compute_ema(&series, 3).unwrap();
        assert_eq!(ema[0], 1.0, "EMA seeds from the first close");
        assert!((ema[1] - 1.5).abs() < 1e-12);
        assert!((ema[2] - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_period_rejected() {
        let series = series_from_closes(&[1.0, 2.0]);
        assert!(compute_ema(&series, 0).is_err());
    }

    #[test]
    fn test_empty_series_rejected() {
        let series = series_from_closes(&[]);
        assert!(compute_ema(&series, 20).is_err());
    }
}
