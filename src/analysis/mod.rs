// Analysis passes over candle series
mod ema;
mod structure_finder;
mod trend;

pub use ema::compute_ema;
pub use structure_finder::StructureFinder;
pub use trend::classify_trend;
