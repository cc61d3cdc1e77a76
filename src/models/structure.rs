use {
    crate::config::Price,
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ZoneKind {
    #[strum(to_string = "FVG")]
    FairValueGap,
    #[strum(to_string = "OB")]
    OrderBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Bias {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TrendDirection {
    Ascending,
    Descending,
}

/// A detected structural price region. `top >= bottom` always; both detectors
/// construct zones from an ordered (low, high) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub top: Price,
    pub bottom: Price,
    pub start_time: i64,
    pub end_time: i64,
    pub bias: Bias,
}

impl Zone {
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn midpoint(&self) -> Price {
        Price::new((self.top + self.bottom) / 2.0)
    }
}

/// A two-point line through (time, price) space. Endpoints are always two
/// distinct detected swing points, never synthesized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendLine {
    pub x1: i64,
    pub y1: Price,
    pub x2: i64,
    pub y2: Price,
    pub direction: TrendDirection,
}

/// Combined structural annotations for one series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketStructure {
    pub zones: Vec<Zone>,
    pub trend_lines: Vec<TrendLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PriceLike;

    #[test]
    fn test_zone_geometry() {
        let zone = Zone {
            kind: ZoneKind::FairValueGap,
            top: Price::new(12.0),
            bottom: Price::new(10.0),
            start_time: 1,
            end_time: 2,
            bias: Bias::Bullish,
        };
        assert_eq!(zone.height(), 2.0);
        assert_eq!(zone.midpoint().value(), 11.0);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ZoneKind::FairValueGap.to_string(), "FVG");
        assert_eq!(ZoneKind::OrderBlock.to_string(), "OB");
    }
}
