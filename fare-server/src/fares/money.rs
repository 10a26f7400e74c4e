//! Monetary rounding helpers.

/// Round to two decimal places, half away from zero.
///
/// This is the final rounding applied to every fare the engine emits.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round up to the next multiple of `step`.
///
/// Exact multiples are unchanged. `step` must be positive.
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}
