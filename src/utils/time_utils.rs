use chrono::DateTime;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_3_MIN: i64 = Self::MS_IN_S * 60 * 3;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
}

// Time Helper functions

/// Axis tick label (HH:MM, UTC).
pub fn epoch_ms_to_time_string(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => String::new(),
    }
}

/// Hover/tooltip label with the full date.
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_ms_as_utc() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(epoch_ms_to_time_string(1_700_000_000_000), "22:13");
        assert_eq!(
            epoch_ms_to_date_string(1_700_000_000_000),
            "2023-11-14 22:13"
        );
    }

    #[test]
    fn out_of_range_timestamp_formats_empty() {
        assert_eq!(epoch_ms_to_time_string(i64::MAX), "");
    }
}
