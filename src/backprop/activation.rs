/// Bipolar sigmoid `f(S) = 2/(1+exp(-αS)) - 1`.
///
/// Odd in S, bounded in (-1, 1), and exactly 0 at S = 0 for every α.
pub fn activation(s: f64, alpha: f64) -> f64 {
    2.0 / (1.0 + (-alpha * s).exp()) - 1.0
}

/// Derivative `F'(S) = (α/4)·(1 - f(S)²)`.
///
/// Strictly positive for α > 0, peaks at α/4 when S = 0 and falls off
/// monotonically as |S| grows.
pub fn derivative(s: f64, alpha: f64) -> f64 {
    let f = activation(s, alpha);
    (alpha / 4.0) * (1.0 - f * f)
}
