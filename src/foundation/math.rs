pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn is_strictly_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] > w[1])
}

/// Euclidean length of `p` measured from the origin.
pub(crate) fn norm(p: kurbo::Point) -> f64 {
    p.to_vec2().hypot()
}
