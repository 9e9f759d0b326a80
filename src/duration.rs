use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use serde::Deserialize;
use std::fmt;

/// A span of time split into hour/minute/second components.
///
/// Fields are plain public integers and are not normalized on direct
/// construction: a `Duration` built with `minutes: 65` renders as `65m`.
/// Use [`Duration::from_seconds`] to decompose a total-second count into
/// in-range components. Unspecified fields default to 0, so partial
/// construction uses struct-update syntax:
///
/// ```
/// use spanfmt::duration::Duration;
///
/// let d = Duration { minutes: 5, seconds: 9, ..Default::default() };
/// assert_eq!(d.format(), "05m 09s");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Duration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    /// Creates a duration from explicit hour/minute/second components.
    ///
    /// Components are stored as given; no carrying between fields.
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Decomposes a total count of seconds into hours, minutes, and seconds.
    ///
    /// The result always has `minutes` and `seconds` in `[0, 59]` and
    /// satisfies `hours * 3600 + minutes * 60 + seconds == total_seconds`.
    pub fn from_seconds(total_seconds: u64) -> Self {
        let hours = total_seconds / SECONDS_PER_HOUR;
        let rem = total_seconds % SECONDS_PER_HOUR;
        Self {
            hours,
            minutes: rem / SECONDS_PER_MINUTE,
            seconds: rem % SECONDS_PER_MINUTE,
        }
    }

    /// Renders the duration as a human-readable string.
    ///
    /// Each component is zero-padded to at least two digits; components of
    /// 100 or more simply occupy more digits. When `hours` is 0 the hours
    /// segment is omitted entirely: `"05m 09s"` rather than `"00h 05m 09s"`.
    pub fn format(&self) -> String {
        if self.hours == 0 {
            format!("{:02}m {:02}s", self.minutes, self.seconds)
        } else {
            format!("{:02}h {:02}m {:02}s", self.hours, self.minutes, self.seconds)
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
