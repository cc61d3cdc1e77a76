use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Logical instrument vocabulary. Display/FromStr speak the ticker names
/// ("BTC", "XAUUSD"); the provider wire name comes from `provider_symbol`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum MarketSymbol {
    // Crypto
    BTC,
    ETH,
    SOL,
    BNB,
    ADA,
    XRP,
    DOT,
    // Forex
    EURUSD,
    GBPUSD,
    USDJPY,
    AUDUSD,
    USDCAD,
    USDCHF,
    EURJPY,
    GBPJPY,
    EURGBP,
    // Commodities
    XAUUSD,
    XAGUSD,
}

impl MarketSymbol {
    /// The pair name we pass into the Binance API (not necessarily the display name).
    /// Symbols without an explicit mapping default to the USDT quote pair.
    pub fn provider_symbol(&self) -> String {
        match self {
            Self::EURUSD => "EURUSDT".to_string(),
            Self::GBPUSD => "GBPUSDT".to_string(),
            Self::USDJPY => "USDTJPY".to_string(),
            Self::AUDUSD => "AUDUSDT".to_string(),
            Self::USDCAD => "USDCAD".to_string(),
            Self::USDCHF => "USDCHF".to_string(),
            Self::EURJPY => "EURJPY".to_string(),
            Self::GBPJPY => "GBPJPY".to_string(),
            Self::EURGBP => "EURGBP".to_string(),
            // Spot has no XAUUSD; the gold-backed token stands in
            Self::XAUUSD => "PAXGUSDT".to_string(),
            Self::XAGUSD => "XAGUSDT".to_string(),
            other => format!("{other}USDT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_crypto_defaults_to_usdt_pair() {
        assert_eq!(MarketSymbol::BTC.provider_symbol(), "BTCUSDT");
        assert_eq!(MarketSymbol::DOT.provider_symbol(), "DOTUSDT");
    }

    #[test]
    fn test_every_symbol_has_a_provider_pair() {
        for symbol in MarketSymbol::iter() {
            let pair = symbol.provider_symbol();
            assert!(!pair.is_empty());
            assert!(
                pair.chars().all(|c| c.is_ascii_uppercase()),
                "{} maps to a malformed pair {}",
                symbol,
                pair
            );
        }
    }

    #[test]
    fn test_explicit_mappings_win() {
        assert_eq!(MarketSymbol::XAUUSD.provider_symbol(), "PAXGUSDT");
        assert_eq!(MarketSymbol::USDJPY.provider_symbol(), "USDTJPY");
        assert_eq!(
            MarketSymbol::USDCAD.provider_symbol(),
            "USDCAD",
            "self-mapped pairs must not gain a USDT suffix"
        );
    }

    #[test]
    fn test_unknown_ticker_rejected() {
        assert!(MarketSymbol::from_str("DOGE").is_err());
    }
}
