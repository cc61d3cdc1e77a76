use crate::{
    config::PriceLike,
    models::{Bias, CandleSeries},
};

use super::ema::compute_ema;

/// Reads a timeframe's bias off its EMA: bullish when the last close sits
/// strictly above the last EMA value, bearish otherwise. Returns `None` for
/// series the EMA cannot be computed on.
pub fn classify_trend(series: &CandleSeries, ema_period: usize) -> Option<Bias> {
    let ema = compute_ema(series, ema_period).ok()?;
    let last_close = series.last_close()?;
    let last_ema = *ema.last()?;

    if last_close.value() > last_ema {
        Some(Bias::Bullish)
    } else {
        Some(Bias::Bearish)
    }
}
