// Decomposition divisors
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;

// CLI help text
pub const HOURS_HELP_TEXT: &str = "Hour component of the span (default 0)";
pub const MINUTES_HELP_TEXT: &str = "Minute component of the span (default 0)";
pub const SECONDS_HELP_TEXT: &str = "Second component of the span (default 0)";
pub const TOTAL_SECONDS_HELP_TEXT: &str = "Total number of seconds to decompose";
pub const ROUND_VALUE_HELP_TEXT: &str = "Value to round to two decimal places";
