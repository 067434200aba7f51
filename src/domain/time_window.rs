use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Milliseconds since the epoch at which generated timestamps start (2020-09-15T00:25:28.950Z).
const DEFAULT_START_MS: u64 = 1_600_129_528_950;

/// Width of the timestamp window, a little under 24 days.
const DEFAULT_WINDOW_MS: u64 = 2_070_000_000;

/// Half-open range `[start_ms, start_ms + window_ms)` that timestamps are drawn from.
///
/// The exclusive end always fits in a `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    start_ms: u64,
    window_ms: u64,
}

impl TimeWindow {
    /// Returns `None` when the window would end past `u64::MAX` milliseconds.
    pub fn new(start_ms: u64, window: Duration) -> Option<Self> {
        let window_ms = u64::try_from(window.as_millis()).ok()?;
        start_ms.checked_add(window_ms)?;
        Some(TimeWindow { start_ms, window_ms })
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Exclusive upper bound.
    pub fn end_ms(&self) -> u64 {
        self.start_ms + self.window_ms
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow {
            start_ms: DEFAULT_START_MS,
            window_ms: DEFAULT_WINDOW_MS,
        }
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rfc3339 = |ms: u64| {
            i64::try_from(ms)
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| ms.to_string())
        };
        write!(f, "[{}, {})", rfc3339(self.start_ms), rfc3339(self.end_ms()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn default_window_ends_after_start_plus_width() {
        let window = TimeWindow::default();
        assert_eq!(window.end_ms(), 1_602_199_528_950);
    }

    #[test]
    fn window_may_end_at_the_last_millisecond() {
        let window = TimeWindow::new(u64::MAX - 5, Duration::from_millis(5)).unwrap();
        assert_eq!(window.end_ms(), u64::MAX);
    }

    #[rstest]
    #[case::start_at_the_end(u64::MAX, Duration::from_millis(5))]
    #[case::end_overflows(u64::MAX - 4, Duration::from_millis(5))]
    #[case::width_overflows(0, Duration::from_secs(u64::MAX))]
    fn rejects_a_window_ending_past_u64(#[case] start_ms: u64, #[case] window: Duration) {
        assert_eq!(TimeWindow::new(start_ms, window), None);
    }

    #[test]
    fn displays_bounds_as_rfc3339() {
        let window = TimeWindow::new(0, Duration::from_secs(60)).unwrap();
        assert_eq!(window.to_string(), "[1970-01-01T00:00:00+00:00, 1970-01-01T00:01:00+00:00)");
    }
}
