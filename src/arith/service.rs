//! Pure numeric operations behind the native entry points.
//!
//! Nothing in here logs, allocates or reads global state, so every function is
//! safe to call concurrently from any JVM thread.

/// IEEE-754 double precision product of `a` and `b`.
///
/// Infinities and NaN propagate per the floating-point standard, e.g.
/// `multiply(f64::INFINITY, 0.0)` is NaN.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}
