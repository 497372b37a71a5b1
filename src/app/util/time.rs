use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn current_time_in_secs_f64() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

/// Seconds rounded to two decimals, as reported in response envelopes.
pub fn rounded_secs(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100.0).round() / 100.0
}
