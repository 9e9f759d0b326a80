/// Rounds a value to two decimal places, half away from zero.
///
/// Implemented as `(value * 100).round() / 100`, so results are subject to
/// ordinary binary floating-point representation: `1.005 * 100` is
/// `100.49999999999999`, so `round_two_decimals(1.005)` is `1.0`, not `1.01`.
/// Non-finite inputs pass through arithmetic untouched.
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
