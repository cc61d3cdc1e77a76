//! Analysis and computation configuration

use crate::domain::Timeframe;

/// Structure-detection tunables.
pub struct StructureSettings {
    /// Follow-through multiple of the origin candle's range that flags an Order Block.
    /// Comparison is strict: a move exactly at the multiple does not qualify.
    pub ob_impulse_factor: f64,

    /// Candles of margin required on each side of a swing point.
    pub swing_margin: usize,

    /// Most recent zones kept after combining FVG and OB detections.
    pub max_zones: usize,
}

/// Multi-timeframe trend summary settings.
pub struct TrendSettings {
    /// Timeframes classified for the summary, in display order.
    pub timeframes: [Timeframe; 4],
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    /// EMA period for the snapshot series and the trend classifier.
    pub ema_period: usize,

    pub structure: StructureSettings,
    pub trend: TrendSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    ema_period: 20,
    structure: StructureSettings {
        ob_impulse_factor: 2.5,
        swing_margin: 2,
        max_zones: 8,
    },
    trend: TrendSettings {
        timeframes: [
            Timeframe::Min15,
            Timeframe::H1,
            Timeframe::H4,
            Timeframe::D1,
        ],
    },
};
