//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit one line per fetch attempt, including the cluster tried.
    pub log_fetch_attempts: bool,

    /// Log snapshot assembly steps (series size, zone/trendline counts).
    pub log_engine: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch_attempts: true,
    log_engine: false,
};
