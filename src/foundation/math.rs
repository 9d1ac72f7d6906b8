/// Tolerance used when comparing clock values in seconds.
pub const TIME_EPSILON: f64 = 1e-9;

/// True when two clock values are within [`TIME_EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIME_EPSILON
}

/// `min(a, b) / max(a, b)`, with two zero extents counting as identical.
pub(crate) fn ratio_of_min_max(a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi <= 0.0 {
        return 1.0;
    }
    (lo / hi).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
