use crate::{
    config::{ANALYSIS, Price, PriceLike},
    models::{Bias, CandleSeries, MarketStructure, TrendDirection, TrendLine, Zone, ZoneKind},
};

/// Detects imbalance zones and swing trendlines on a candle series.
///
/// Runs three passes over the data: fair value gaps (three-candle price
/// voids), order blocks (origin candles of impulsive displacement), and
/// swing-point trendlines. Zones keep only the most recent entries so the
/// report stays focused on structure that still matters.
pub struct StructureFinder;

impl StructureFinder {
    /// Full structure pass. Series too short for a detector simply
    /// contribute nothing; this never fails.
    pub fn analyze(series: &CandleSeries) -> MarketStructure {
        let mut zones = Self::find_fair_value_gaps(series);
        zones.extend(Self::find_order_blocks(series));

        // Newest zones win once the cap is hit
        let cap = ANALYSIS.structure.max_zones;
        if zones.len() > cap {
            zones.drain(..zones.len() - cap);
        }

        MarketStructure {
            zones,
            trend_lines: Self::find_trend_lines(series),
        }
    }

    /// A fair value gap is a three-candle window where price moved so fast
    /// that the outer candles never overlap: candle three opens business
    /// entirely above (bullish) or below (bearish) candle one. The zone
    /// spans the untraded void and stretches to the end of the series.
    fn find_fair_value_gaps(series: &CandleSeries) -> Vec<Zone> {
        let mut zones = Vec::new();
        let len = series.klines();
        if len < 4 {
            return zones;
        }

        let last_ts = series.timestamps[len - 1];

        for i in 2..len - 1 {
            let first_high = series.high_prices[i - 2];
            let first_low = series.low_prices[i - 2];
            let third_high = series.high_prices[i];
            let third_low = series.low_prices[i];

            if third_low > first_high {
                zones.push(Zone {
                    kind: ZoneKind::FairValueGap,
                    top: third_low.into(),
                    bottom: first_high.into(),
                    start_time: series.timestamps[i - 1],
                    end_time: last_ts,
                    bias: Bias::Bullish,
                });
            } else if third_high < first_low {
                zones.push(Zone {
                    kind: ZoneKind::FairValueGap,
                    top: first_low.into(),
                    bottom: third_high.into(),
                    start_time: series.timestamps[i - 1],
                    end_time: last_ts,
                    bias: Bias::Bearish,
                });
            }
        }

        zones
    }

    /// An order block is the origin candle of an impulsive move: the net
    /// displacement of the three candles that follow it must exceed the
    /// origin's own range by the configured factor. The zone covers the
    /// origin candle's full range.
    fn find_order_blocks(series: &CandleSeries) -> Vec<Zone> {
        let mut zones = Vec::new();
        let len = series.klines();
        if len < 7 {
            return zones;
        }

        let factor = ANALYSIS.structure.ob_impulse_factor;
        let last_ts = series.timestamps[len - 1];

        for i in 1..len - 5 {
            let move_range = series.close_prices[i + 3].value() - series.open_prices[i + 1].value();
            let origin_range = series.high_prices[i].value() - series.low_prices[i].value();

            if move_range.abs() > origin_range * factor {
                zones.push(Zone {
                    kind: ZoneKind::OrderBlock,
                    top: series.high_prices[i].into(),
                    bottom: series.low_prices[i].into(),
                    start_time: series.timestamps[i],
                    end_time: last_ts,
                    bias: if move_range > 0.0 {
                        Bias::Bullish
                    } else {
                        Bias::Bearish
                    },
                });
            }
        }

        zones
    }

    /// Builds at most two trendlines: resistance through the last two swing
    /// highs and support through the last two swing lows.
    fn find_trend_lines(series: &CandleSeries) -> Vec<TrendLine> {
        let mut lines = Vec::new();
        let margin = ANALYSIS.structure.swing_margin;
        let len = series.klines();
        if len < 2 * margin + 1 {
            return lines;
        }

        let mut swing_highs: Vec<(usize, Price)> = Vec::new();
        let mut swing_lows: Vec<(usize, Price)> = Vec::new();

        for idx in margin..len - margin {
            if Self::is_swing_high(series, idx, margin) {
                swing_highs.push((idx, series.high_prices[idx].into()));
            }
            if Self::is_swing_low(series, idx, margin) {
                swing_lows.push((idx, series.low_prices[idx].into()));
            }
        }

        if let Some(line) = Self::line_from_last_two(series, &swing_highs) {
            lines.push(line);
        }
        if let Some(line) = Self::line_from_last_two(series, &swing_lows) {
            lines.push(line);
        }

        lines
    }

    /// High at `idx` must not be undercut by the candles before it and must
    /// strictly dominate the candles after it. The asymmetry keeps a flat
    /// double-top from registering twice.
    fn is_swing_high(series: &CandleSeries, idx: usize, margin: usize) -> bool {
        let high = series.high_prices[idx];
        (1..=margin).all(|j| high >= series.high_prices[idx - j] && high > series.high_prices[idx + j])
    }

    fn is_swing_low(series: &CandleSeries, idx: usize, margin: usize) -> bool {
        let low = series.low_prices[idx];
        (1..=margin).all(|j| low <= series.low_prices[idx - j] && low < series.low_prices[idx + j])
    }

    fn line_from_last_two(series: &CandleSeries, points: &[(usize, Price)]) -> Option<TrendLine> {
        if points.len() < 2 {
            return None;
        }

        let (first_idx, first_price) = points[points.len() - 2];
        let (second_idx, second_price) = points[points.len() - 1];

        Some(TrendLine {
            x1: series.timestamps[first_idx],
            y1: first_price,
            x2: series.timestamps[second_idx],
            y2: second_price,
            direction: if second_price > first_price {
                TrendDirection::Ascending
            } else {
                TrendDirection::Descending
            },
        })
    }
}
