// Domain types and value objects
mod candle;
mod symbol;
mod timeframe;

// Re-export commonly used types
pub use candle::Candle;
pub use symbol::MarketSymbol;
pub use timeframe::Timeframe;
