use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Logical chart granularity, 1 minute to 1 year. Display/FromStr speak the
/// chart labels ("15m", "4H"); an unknown label fails to parse, which is the
/// rejection point for unmapped timeframes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Timeframe {
    #[strum(serialize = "1m")]
    Min1,
    #[strum(serialize = "5m")]
    Min5,
    #[strum(serialize = "15m")]
    Min15,
    #[strum(serialize = "30m")]
    Min30,
    #[strum(serialize = "1H")]
    H1,
    #[strum(serialize = "4H")]
    H4,
    #[strum(serialize = "1D")]
    D1,
    #[strum(serialize = "1W")]
    W1,
    #[strum(serialize = "1M")]
    Mon1,
    #[strum(serialize = "3M")]
    Mon3,
    #[strum(serialize = "6M")]
    Mon6,
    #[strum(serialize = "1Y")]
    Y1,
}

impl Timeframe {
    /// The interval string the provider's klines endpoint understands.
    /// Granularities coarser than monthly collapse to the monthly interval.
    pub fn provider_interval(&self) -> &'static str {
        match self {
            Self::Min1 => "1m",
            Self::Min5 => "5m",
            Self::Min15 => "15m",
            Self::Min30 => "30m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::D1 => "1d",
            Self::W1 => "1w",
            Self::Mon1 | Self::Mon3 | Self::Mon6 | Self::Y1 => "1M",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_label_round_trip() {
        for timeframe in Timeframe::iter() {
            assert_eq!(
                Timeframe::from_str(&timeframe.to_string()).unwrap(),
                timeframe,
                "label round-trip must hold for every timeframe"
            );
        }
        assert_eq!(Timeframe::from_str("4H").unwrap(), Timeframe::H4);
        assert_eq!(Timeframe::H4.to_string(), "4H");
    }

    #[test]
    fn test_provider_interval_mapping() {
        assert_eq!(Timeframe::H1.provider_interval(), "1h");
        assert_eq!(Timeframe::Min15.provider_interval(), "15m");
        assert_eq!(
            Timeframe::Y1.provider_interval(),
            "1M",
            "coarse timeframes collapse to the monthly interval"
        );
    }

    #[test]
    fn test_unmapped_label_rejected() {
        assert!(Timeframe::from_str("2h").is_err());
        assert!(Timeframe::from_str("1h").is_err(), "labels are case-sensitive: 1H not 1h");
    }
}
