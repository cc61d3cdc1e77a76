use chrono::DateTime;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Convert an epoch-ms timestamp to a display string (UTC).
    /// Falls back to the raw value if the timestamp is out of range.
    pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
        DateTime::from_timestamp_millis(epoch_ms)
            .map(|dt| dt.format(Self::STANDARD_TIME_FORMAT).to_string())
            .unwrap_or_else(|| format!("{}ms", epoch_ms))
    }
}
