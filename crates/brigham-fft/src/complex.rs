/// Complex sample as a `(re, im)` pair of doubles.
///
/// Samples are plain values: constructed as tuple literals, copied freely,
/// never mutated in place by the transform.
pub type Complex64 = (f64, f64);

#[must_use]
pub fn complex_add(lhs: Complex64, rhs: Complex64) -> Complex64 {
    (lhs.0 + rhs.0, lhs.1 + rhs.1)
}

#[must_use]
pub fn complex_sub(lhs: Complex64, rhs: Complex64) -> Complex64 {
    (lhs.0 - rhs.0, lhs.1 - rhs.1)
}

#[must_use]
pub fn complex_scale(value: Complex64, scale: f64) -> Complex64 {
    (value.0 * scale, value.1 * scale)
}

/// Squared modulus `re² + im²`, the per-sample energy term.
#[must_use]
pub fn modulus_squared(value: Complex64) -> f64 {
    value.0 * value.0 + value.1 * value.1
}
