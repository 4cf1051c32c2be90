//! Clamp-and-scale helpers shared by the numeric features.

/// Scale `value` from [min, max] onto [0, 1], clamping at both ends.
/// A degenerate range maps everything to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Clamp to [0, 1].
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
