mod time_utils;

pub use time_utils::{TimeUtils, epoch_ms_to_date_string, epoch_ms_to_time_string};
